//! Stand-ins for the AI pieces of the product.
//!
//! Both the food scanner and the chat assistant are simulations: macros are
//! drawn from fixed ranges and replies are picked from a canned set. The
//! traits exist so a real inference backend can be swapped in later without
//! touching any call site.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::meals::nutrition::MacroSet;

pub trait MacroSampler: Send + Sync {
    fn sample(&self) -> MacroSet;
}

pub trait ReplyPicker: Send + Sync {
    fn pick(&self) -> String;
}

/// Draws each macro independently from the reference ranges:
/// protein [20,60), carbs [30,90), fats [10,30), calories [300,700).
#[derive(Debug, Default, Clone)]
pub struct UniformMacroSampler;

impl MacroSampler for UniformMacroSampler {
    fn sample(&self) -> MacroSet {
        let mut rng = rand::thread_rng();
        MacroSet {
            protein: rng.gen_range(20..60) as f64,
            carbs: rng.gen_range(30..90) as f64,
            fats: rng.gen_range(10..30) as f64,
            calories: rng.gen_range(300..700) as f64,
        }
    }
}

pub const CANNED_REPLIES: [&str; 4] = [
    "Great choice! That food is rich in protein and will help you hit your targets.",
    "Based on your profile, I suggest adding more leafy greens to balance your micronutrients.",
    "Your progress is excellent! Keep it up and you will reach your goals.",
    "How about a strength workout today? Looks like you have plenty of energy!",
];

/// Picks uniformly at random from [`CANNED_REPLIES`].
#[derive(Debug, Default, Clone)]
pub struct CannedReplyPicker;

impl ReplyPicker for CannedReplyPicker {
    fn pick(&self) -> String {
        let mut rng = rand::thread_rng();
        CANNED_REPLIES
            .choose(&mut rng)
            .copied()
            .unwrap_or(CANNED_REPLIES[0])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_macros_stay_in_range() {
        let sampler = UniformMacroSampler;
        for _ in 0..200 {
            let m = sampler.sample();
            assert!((20.0..60.0).contains(&m.protein), "protein {}", m.protein);
            assert!((30.0..90.0).contains(&m.carbs), "carbs {}", m.carbs);
            assert!((10.0..30.0).contains(&m.fats), "fats {}", m.fats);
            assert!(
                (300.0..700.0).contains(&m.calories),
                "calories {}",
                m.calories
            );
        }
    }

    #[test]
    fn picked_reply_is_a_member_of_the_canned_set() {
        let picker = CannedReplyPicker;
        for _ in 0..50 {
            let reply = picker.pick();
            assert!(CANNED_REPLIES.contains(&reply.as_str()));
        }
    }
}
