//! Creation of environments by id.
use crate::{ZeldaEnv, ZeldaEnvConfig};
use anyhow::Result;
use log::info;
use zelda_core::{error::ZeldaError, Env, RenderMode};

/// Creates a registered environment, like `gymnasium.make(id, render_mode=...)`.
///
/// The environment is built with seed 0; call
/// [`Env::reset_with_index`] to start from another seed.
pub fn make(id: &str, render_mode: Option<RenderMode>) -> Result<ZeldaEnv> {
    make_with_seed(id, render_mode, 0)
}

/// Same as [`make`] but with a given seed.
pub fn make_with_seed(id: &str, render_mode: Option<RenderMode>, seed: i64) -> Result<ZeldaEnv> {
    let config = config_for(id)?.render_mode(render_mode);
    info!("Make {}", id);
    ZeldaEnv::build(&config, seed)
}

/// Returns the default configuration of a registered environment.
pub fn config_for(id: &str) -> Result<ZeldaEnvConfig> {
    match id {
        "ZeldaCC-v0" => Ok(ZeldaEnvConfig::default().name(id)),
        _ => Err(ZeldaError::UnknownEnvId(id.to_string()).into()),
    }
}
