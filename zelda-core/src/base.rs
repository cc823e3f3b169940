//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Observations are opaque to the code driving an environment,
/// which only inspects their shape.
pub trait Obs: Clone + Debug {
    /// Returns the shape of the observation, e.g., `[84, 84, 3]` for an RGB image.
    fn shape(&self) -> Vec<usize>;
}

/// An action of an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    ///
    /// Vectorized environments are not supported, so this is 1 for every
    /// action type in this library.
    fn len(&self) -> usize {
        1
    }
}
