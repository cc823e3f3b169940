//! Environment.
use super::{Act, Info, Obs, Step};
use crate::{record::Record, space::Space, RgbFrame};
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// The methods follow the Gymnasium API. Errors are returned instead of raised,
/// so that a caller can decide where its failure boundary is.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// The set of valid actions.
    type ActSpace: Space;

    /// The set of valid observations.
    type ObsSpace: Space;

    /// Builds an environment with a given random seed.
    ///
    /// The seed is used at the first call of [`Env::reset`].
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation of a new episode.
    fn reset(&mut self) -> Result<(Self::Obs, Self::Info)>;

    /// Resets the environment with a given index.
    ///
    /// The index is used in an arbitrary way. For example, it can be used as a random seed,
    /// which is useful when evaluation of a trained agent.
    fn reset_with_index(&mut self, ix: usize) -> Result<(Self::Obs, Self::Info)>;

    /// Performes an environment step.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Performes an environment step and reset the environment if an episode ends.
    ///
    /// The initial observation of the next episode is stored in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            let (init_obs, _) = self.reset()?;
            step.init_obs = Some(init_obs);
        }
        Ok((step, record))
    }

    /// Renders the current state of the environment.
    ///
    /// Returns a frame in `rgb_array` mode. In `human` mode the environment displays
    /// the frame by itself and returns `None`.
    fn render(&mut self) -> Result<Option<RgbFrame>>;

    /// Releases resources held by the environment.
    ///
    /// Calling this method more than once has no effect.
    fn close(&mut self) -> Result<()>;

    /// Returns the action space.
    fn action_space(&self) -> &Self::ActSpace;

    /// Returns the observation space.
    fn observation_space(&self) -> &Self::ObsSpace;
}
