//! Spaces of actions and observations.
//!
//! A space declares the set of values an environment accepts or emits,
//! like `gymnasium.spaces`. Each space owns a random number generator,
//! so that [`Space::sample`] can be called without an external generator.
mod box_space;
mod discrete;
pub use box_space::BoxSpace;
pub use discrete::Discrete;
use std::fmt::Display;

/// A set of values with a sampler.
///
/// The [`Display`] implementation follows the text representation of Gymnasium,
/// e.g., `Discrete(7)`.
pub trait Space: Display {
    /// Type of the elements of the space.
    type Element;

    /// Samples an element uniformly at random.
    fn sample(&self) -> Self::Element;

    /// Returns `true` if `x` is an element of the space.
    fn contains(&self, x: &Self::Element) -> bool;

    /// Seeds the random number generator of the space.
    fn seed(&mut self, seed: u64);
}
