//! Policies for [`ZeldaEnv`](crate::ZeldaEnv).
use crate::{ZeldaAct, ZeldaAction, ZeldaEnv, ZeldaObs};
use serde::{Deserialize, Serialize};
use zelda_core::{Configurable, Policy};

/// Configuration of [`RandomPolicy`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RandomPolicyConfig {
    /// Seed of the sampler.
    pub seed: u64,
}

impl Default for RandomPolicyConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Takes actions uniformly at random.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl Policy<ZeldaEnv> for RandomPolicy {
    fn sample(&mut self, _: &ZeldaObs) -> ZeldaAct {
        ZeldaAct::new(self.rng.usize(..ZeldaAction::N))
    }
}

impl Configurable<ZeldaEnv> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(config.seed),
        }
    }
}
