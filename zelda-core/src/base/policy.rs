//! Policies acting on an environment.
use super::Env;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

/// Chooses an action for each observation of `E`.
///
/// A random policy over `ZeldaAct` ignores the `ZeldaObs` it receives;
/// a learned one would map the frame to an action id.
pub trait Policy<E: Env> {
    /// Returns the action to take after observing `obs`.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// A policy built from a configuration, typically stored as YAML.
pub trait Configurable<E: Env> {
    /// Configuration of the policy.
    type Config: Clone + DeserializeOwned;

    /// Builds the policy.
    fn build(config: Self::Config) -> Self;

    /// Reads the configuration from the YAML file at `path` and builds the policy.
    ///
    /// Errors carry the path of the file.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open policy config {}", path.display()))?;
        let config = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid policy config {}", path.display()))?;
        Ok(Self::build(config))
    }
}
