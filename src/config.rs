use crate::meals::nutrition::DailyGoals;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Delay before the simulated assistant reply lands, in milliseconds.
    pub reply_delay_ms: u64,
    pub goals: DailyGoals,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let reply_delay_ms = std::env::var("REPLY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1000);
        let goals = DailyGoals {
            protein: env_goal("GOAL_PROTEIN_G", 150.0),
            carbs: env_goal("GOAL_CARBS_G", 250.0),
            fats: env_goal("GOAL_FATS_G", 70.0),
            calories: env_goal("GOAL_CALORIES_KCAL", 2200.0),
        };
        Ok(Self {
            host,
            port,
            reply_delay_ms,
            goals,
        })
    }
}

fn env_goal(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_goals() {
        let config = AppConfig::from_env().expect("config should build from defaults");
        assert_eq!(config.reply_delay_ms, 1000);
        assert_eq!(config.goals.protein, 150.0);
        assert_eq!(config.goals.carbs, 250.0);
        assert_eq!(config.goals.fats, 70.0);
        assert_eq!(config.goals.calories, 2200.0);
    }
}
