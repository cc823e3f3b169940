#![warn(missing_docs)]
//! Core interface of the Zelda-style reinforcement learning environment.
//!
//! This crate defines the contract shared by environments and the code driving them,
//! following the [Gymnasium](https://gymnasium.farama.org) API:
//!
//! * [`Env::reset`] returns an initial observation with additional information.
//! * [`Env::step`] returns a [`Step`], i.e., the tuple
//!   `(observation, reward, terminated, truncated, info)`.
//! * [`Env::render`] returns an [`RgbFrame`] in `rgb_array` mode and nothing in `human` mode.
//! * [`Env::close`] releases resources of the environment.
//! * [`Env::action_space`] and [`Env::observation_space`] declare valid actions and
//!   observations as [`Space`]s.
//!
//! [`Space`]: space::Space
pub mod error;
pub mod record;
pub mod space;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod render;
pub use render::{RenderMode, RgbFrame};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
