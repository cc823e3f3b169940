use super::Space;
use std::fmt;

/// A finite set of integers `{0, 1, ..., n - 1}`.
#[derive(Debug, Clone)]
pub struct Discrete {
    n: usize,
    rng: fastrand::Rng,
}

impl Discrete {
    /// Constructs a space of `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "Discrete space must have at least one element");
        Self {
            n,
            rng: fastrand::Rng::new(),
        }
    }

    /// The number of elements.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Space for Discrete {
    type Element = usize;

    fn sample(&self) -> usize {
        self.rng.usize(..self.n)
    }

    fn contains(&self, x: &usize) -> bool {
        *x < self.n
    }

    fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discrete({})", self.n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_is_contained() {
        let mut space = Discrete::new(7);
        space.seed(42);
        for _ in 0..100 {
            let a = space.sample();
            assert!(space.contains(&a));
        }
        assert!(!space.contains(&7));
        assert_eq!(space.to_string(), "Discrete(7)");
    }

    #[test]
    fn seeding_is_reproducible() {
        let mut s1 = Discrete::new(7);
        let mut s2 = Discrete::new(7);
        s1.seed(3);
        s2.seed(3);
        let a1 = (0..20).map(|_| s1.sample()).collect::<Vec<_>>();
        let a2 = (0..20).map(|_| s2.sample()).collect::<Vec<_>>();
        assert_eq!(a1, a2);
    }
}
