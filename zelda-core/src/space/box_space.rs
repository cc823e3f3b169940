use super::Space;
use std::fmt;

/// A box of `u8` arrays with a fixed shape, e.g., RGB images.
#[derive(Debug, Clone)]
pub struct BoxSpace {
    low: u8,
    high: u8,
    shape: Vec<usize>,
    rng: fastrand::Rng,
}

impl BoxSpace {
    /// Constructs a space of arrays of the given shape with elements in `[low, high]`.
    pub fn new(low: u8, high: u8, shape: &[usize]) -> Self {
        assert!(low <= high, "low must not be greater than high");
        Self {
            low,
            high,
            shape: shape.to_vec(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Shape of the elements.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Lower bound of the values.
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Upper bound of the values.
    pub fn high(&self) -> u8 {
        self.high
    }

    fn numel(&self) -> usize {
        self.shape.iter().product()
    }
}

impl Space for BoxSpace {
    type Element = Vec<u8>;

    fn sample(&self) -> Vec<u8> {
        (0..self.numel())
            .map(|_| self.rng.u8(self.low..=self.high))
            .collect()
    }

    fn contains(&self, x: &Vec<u8>) -> bool {
        x.len() == self.numel() && x.iter().all(|v| (self.low..=self.high).contains(v))
    }

    fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }
}

impl fmt::Display for BoxSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self
            .shape
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        // A 1-tuple is printed as `(n,)` in Python.
        let shape = if self.shape.len() == 1 {
            format!("({},)", shape)
        } else {
            format!("({})", shape)
        };
        write!(f, "Box({}, {}, {}, uint8)", self.low, self.high, shape)
    }
}
