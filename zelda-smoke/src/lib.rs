//! Smoke test of the `ZeldaCC-v0` environment.
//!
//! Two probes exercise the public interface of an environment and report on a
//! writer:
//!
//! * [`test_basic_functionality`] creates the environment, resets it, prints its
//!   spaces, takes random actions, renders and closes it.
//! * [`test_with_manual_actions`] applies a fixed sequence of actions.
//!
//! [`run`] runs both and prints a PASS/FAIL summary. The probes are generic over
//! the environment, so any [`Env`](zelda_core::Env) with a discrete action space
//! can be checked.
//!
//! ```no_run
//! use anyhow::Result;
//! use zelda_core::RenderMode;
//! use zelda_env::make;
//!
//! fn main() -> Result<()> {
//!     let mut out = std::io::stdout();
//!     let summary = zelda_smoke::run(|| make("ZeldaCC-v0", Some(RenderMode::RgbArray)), 10, &mut out)?;
//!     assert!(summary.passed());
//!     Ok(())
//! }
//! ```
mod guard;
pub mod probe;
mod summary;
pub use guard::EnvGuard;
pub use probe::{test_basic_functionality, test_with_manual_actions, MANUAL_ACTIONS};
pub use summary::{run, Summary, USAGE};
