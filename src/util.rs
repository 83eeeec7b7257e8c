//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval contains the value.
    ///
    /// Always false for NaN.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: Float> Interval<T> {
    /// Clamps a value into the interval. NaN is passed through.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    pub fn lerp(&self, t: T) -> T {
        self.min + t * (self.max - self.min)
    }

    pub fn inv_lerp(&self, value: T) -> T {
        (value - self.min) / (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn lerp_and_inv_lerp() {
        let range = Interval::new(2.0_f64, 6.0);
        assert_eq!(range.lerp(0.0), 2.0);
        assert_eq!(range.lerp(1.0), 6.0);
        assert_approx_eq!(range.lerp(0.25), 3.0);
        assert_approx_eq!(range.inv_lerp(5.0), 0.75);
    }

    #[test]
    fn contains_and_clamp() {
        let range = Interval::new(0.0_f64, 1.0);
        assert!(range.contains(0.0));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.5));
        assert!(!range.contains(f64::NAN));
        assert_eq!(range.clamp(-3.0), 0.0);
        assert_eq!(range.clamp(3.0), 1.0);
        assert_eq!(range.clamp(0.5), 0.5);
        assert!(range.clamp(f64::NAN).is_nan());
    }
}
