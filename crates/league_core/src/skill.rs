//! Initial skill assignment policies

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Lower bound of the uniform skill ranges.
pub const SKILL_MIN: f64 = -3.0;

/// Upper bound of the uniform skill ranges.
pub const SKILL_MAX: f64 = 3.0;

/// How a generated division assigns skill to its teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStyle {
    /// Every team has skill 0.
    Identical,
    /// Evenly spaced from `SKILL_MIN` to `SKILL_MAX`.
    #[default]
    Uniform,
    /// Drawn from the standard normal distribution.
    RandomNormal,
    /// Drawn uniformly from `[SKILL_MIN, SKILL_MAX)`.
    TrueRandom,
}

impl SkillStyle {
    /// Generate `count` skills, in team order.
    pub fn generate<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<f64> {
        match self {
            SkillStyle::Identical => vec![0.0; count],
            SkillStyle::Uniform => {
                if count < 2 {
                    return vec![0.0; count];
                }
                let span = SKILL_MAX - SKILL_MIN;
                (0..count)
                    .map(|i| i as f64 / (count - 1) as f64 * span + SKILL_MIN)
                    .collect()
            }
            SkillStyle::RandomNormal => (0..count)
                .map(|_| rng.sample::<f64, _>(StandardNormal))
                .collect(),
            SkillStyle::TrueRandom => (0..count)
                .map(|_| rng.gen_range(SKILL_MIN..SKILL_MAX))
                .collect(),
        }
    }
}
