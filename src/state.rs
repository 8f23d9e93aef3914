use std::sync::Arc;

use crate::chat::store::ChatStore;
use crate::config::AppConfig;
use crate::meals::store::MealStore;
use crate::sim::{CannedReplyPicker, MacroSampler, ReplyPicker, UniformMacroSampler};

#[derive(Clone)]
pub struct AppState {
    pub meals: Arc<MealStore>,
    pub chat: Arc<ChatStore>,
    pub config: Arc<AppConfig>,
    pub sampler: Arc<dyn MacroSampler>,
    pub picker: Arc<dyn ReplyPicker>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(
            config,
            Arc::new(UniformMacroSampler),
            Arc::new(CannedReplyPicker),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        sampler: Arc<dyn MacroSampler>,
        picker: Arc<dyn ReplyPicker>,
    ) -> Self {
        Self {
            meals: Arc::new(MealStore::seeded()),
            chat: Arc::new(ChatStore::seeded()),
            config,
            sampler,
            picker,
        }
    }

    /// State for unit tests: seeded stores, default goals, real simulators.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            reply_delay_ms: 1000,
            goals: crate::meals::nutrition::DailyGoals {
                protein: 150.0,
                carbs: 250.0,
                fats: 70.0,
                calories: 2200.0,
            },
        });
        Self::from_parts(
            config,
            Arc::new(UniformMacroSampler),
            Arc::new(CannedReplyPicker),
        )
    }
}
