//! Configuration of [`ZeldaEnv`](super::ZeldaEnv).
//!
//! If environment variable `ZELDA_MAX_EPISODE_STEPS` exists, it is used as the
//! default step limit of an episode.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{default::Default, env, fs::File, io::BufReader, path::Path};
use zelda_core::RenderMode;

const DEFAULT_MAX_EPISODE_STEPS: usize = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
/// Configurations of [`ZeldaEnv`](super::ZeldaEnv).
pub struct ZeldaEnvConfig {
    pub(super) name: String,
    pub(super) render_mode: Option<RenderMode>,
    pub(super) max_episode_steps: usize,
    pub(super) frame_skip: usize,
    pub(super) obs_width: u32,
    pub(super) obs_height: u32,
    pub(super) n_enemies: usize,
}

impl Default for ZeldaEnvConfig {
    fn default() -> Self {
        let max_episode_steps = env::var("ZELDA_MAX_EPISODE_STEPS")
            .ok()
            .and_then(|var| var.parse().ok())
            .unwrap_or(DEFAULT_MAX_EPISODE_STEPS);

        Self {
            name: "ZeldaCC-v0".to_string(),
            render_mode: None,
            max_episode_steps,
            frame_skip: 4,
            obs_width: 84,
            obs_height: 84,
            n_enemies: 6,
        }
    }
}

impl ZeldaEnvConfig {
    /// Loads a configuration from a YAML file. Missing fields take default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Sets the name of the environment.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn render_mode(mut self, render_mode: Option<RenderMode>) -> Self {
        self.render_mode = render_mode;
        self
    }

    /// Sets the number of steps after which an episode is truncated.
    pub fn max_episode_steps(mut self, v: usize) -> Self {
        self.max_episode_steps = v;
        self
    }

    /// Sets the number of game frames per environment step.
    pub fn frame_skip(mut self, v: usize) -> Self {
        self.frame_skip = v.max(1);
        self
    }

    /// Sets the size of observations.
    pub fn obs_size(mut self, width: u32, height: u32) -> Self {
        self.obs_width = width;
        self.obs_height = height;
        self
    }

    pub fn n_enemies(mut self, v: usize) -> Self {
        self.n_enemies = v;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn builder_and_yaml() -> Result<()> {
        let config = ZeldaEnvConfig::default()
            .render_mode(Some(RenderMode::RgbArray))
            .max_episode_steps(50)
            .frame_skip(0)
            .n_enemies(2);
        assert_eq!(config.frame_skip, 1);

        let dir = TempDir::new("zelda_env_config")?;
        let path = dir.path().join("env.yaml");
        config.save(&path)?;
        assert_eq!(ZeldaEnvConfig::load(&path)?, config);
        Ok(())
    }

    #[test]
    fn missing_fields_take_defaults() -> Result<()> {
        let dir = TempDir::new("zelda_env_config")?;
        let path = dir.path().join("env.yaml");
        std::fs::write(&path, "render_mode: human\nn_enemies: 1\n")?;
        let config = ZeldaEnvConfig::load(&path)?;
        assert_eq!(config.render_mode, Some(RenderMode::Human));
        assert_eq!(config.n_enemies, 1);
        assert_eq!(config.obs_width, 84);
        assert_eq!(config.name, "ZeldaCC-v0");
        Ok(())
    }
}
