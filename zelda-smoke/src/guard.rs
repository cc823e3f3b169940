use anyhow::Result;
use log::{trace, warn};
use std::ops::{Deref, DerefMut};
use zelda_core::Env;

/// Owns an environment and closes it when dropped.
///
/// Use [`EnvGuard::close`] to close the environment explicitly and observe the result.
pub struct EnvGuard<E: Env> {
    env: E,
    closed: bool,
}

impl<E: Env> EnvGuard<E> {
    pub fn new(env: E) -> Self {
        Self { env, closed: false }
    }

    /// Closes the environment.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.env.close()
    }
}

impl<E: Env> Deref for EnvGuard<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.env
    }
}

impl<E: Env> DerefMut for EnvGuard<E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.env
    }
}

impl<E: Env> Drop for EnvGuard<E> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        trace!("Close the environment on drop");
        if let Err(e) = self.env.close() {
            warn!("Failed to close the environment: {}", e);
        }
    }
}
