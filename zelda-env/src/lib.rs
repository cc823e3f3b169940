//! A Zelda-style action-adventure game as a reinforcement learning environment.
//!
//! The environment `ZeldaCC-v0` follows the Gymnasium API defined in
//! [`zelda_core`]. The player walks around a tile map, fights monsters with a sword
//! and flame magic, and is rewarded for damaging and defeating them.
//!
//! * Observation: an RGB image of `84 x 84` pixels ([`ZeldaObs`]).
//! * Action: one of 7 commands ([`ZeldaAction`]), `0` is no-op.
//! * Render modes: `rgb_array` returns a `320 x 240` frame, `human` draws frames in the terminal.
//!
//! Here is an example of running the environment with a random policy.
//!
//! ```no_run
//! use anyhow::Result;
//! use zelda_core::{Configurable, DefaultEvaluator, Evaluator as _, RenderMode};
//! use zelda_env::{RandomPolicy, RandomPolicyConfig, ZeldaEnv, ZeldaEnvConfig};
//!
//! fn main() -> Result<()> {
//!     env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
//!
//!     let env_config = ZeldaEnvConfig::default().render_mode(Some(RenderMode::Human));
//!     let mut policy = RandomPolicy::build(RandomPolicyConfig::default());
//!
//!     let mut evaluator = DefaultEvaluator::<ZeldaEnv>::new(&env_config, 0, 5)?;
//!     let _ = evaluator.evaluate(&mut policy)?;
//!
//!     Ok(())
//! }
//! ```
mod act;
mod env;
pub mod game;
mod obs;
mod policy;
mod registry;
pub use act::{ZeldaAct, ZeldaAction};
pub use env::{ZeldaEnv, ZeldaEnvConfig, ZeldaInfo};
pub use obs::ZeldaObs;
pub use policy::{RandomPolicy, RandomPolicyConfig};
pub use registry::{config_for, make, make_with_seed};
