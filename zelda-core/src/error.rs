//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum ZeldaError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// The environment id is not registered.
    #[error("Environment {0} doesn't exist")]
    UnknownEnvId(String),

    /// The action is not contained in the action space.
    #[error("Invalid action {action}; expected an element of {space}")]
    InvalidAction {
        /// The rejected action.
        action: String,
        /// The action space of the environment.
        space: String,
    },

    /// Unsupported render mode.
    #[error("Invalid render mode: {0}; expected one of rgb_array, human")]
    InvalidRenderMode(String),

    /// The configuration of an environment cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A step was taken before the first reset.
    #[error("Cannot call step before reset")]
    NotReset,

    /// The environment has already been closed.
    #[error("Environment has been closed")]
    Closed,
}
