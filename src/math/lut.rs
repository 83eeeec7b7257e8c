use std::num::NonZeroUsize;
use cgmath::prelude::*;
use itertools::Itertools;
use crate::error::CurveError;
use crate::util::Interval;
use super::curve::ParametricCurve3d;

/// A lookup table of cumulative chord lengths along a curve.
///
/// Entry `i` holds the length of the polyline through the samples
/// `t_0, ..., t_i`, where `t_i = i / num_steps` spans the curve's bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcLengthTable {
    bounds: Interval<f64>,
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// The number of chords used when no resolution is given.
    pub const DEFAULT_STEPS: usize = 128;

    /// Builds a table by sampling `num_steps + 1` evenly spaced points along the curve.
    pub fn build(curve: &impl ParametricCurve3d, num_steps: usize) -> Result<Self, CurveError> {
        let num_steps = NonZeroUsize::new(num_steps).ok_or(CurveError::InvalidStepCount)?;
        Ok(Self::from_chords(curve, num_steps))
    }

    /// Builds a table with [ArcLengthTable::DEFAULT_STEPS] chords.
    pub fn with_default_steps(curve: &impl ParametricCurve3d) -> Self {
        const STEPS: NonZeroUsize = match NonZeroUsize::new(ArcLengthTable::DEFAULT_STEPS) {
            Some(steps) => steps,
            None => panic!("DEFAULT_STEPS must be non-zero"),
        };
        Self::from_chords(curve, STEPS)
    }

    fn from_chords(curve: &impl ParametricCurve3d, num_steps: NonZeroUsize) -> Self {
        let num_steps = num_steps.get();
        let bounds = curve.bounds();
        let mut lengths = Vec::with_capacity(num_steps + 1);
        lengths.push(0.0);
        let samples = (0..=num_steps).map(|i| curve.sample(bounds.lerp(i as f64 / num_steps as f64)));
        let mut total = 0.0;
        for (a, b) in samples.tuple_windows() {
            total += a.distance(b);
            lengths.push(total);
        }
        log::trace!("built arc-length table: {} steps, length {}", num_steps, total);
        Self { bounds, lengths }
    }

    /// The number of chords in the table.
    pub fn num_steps(&self) -> usize {
        self.lengths.len() - 1
    }

    /// The cumulative lengths, starting at zero.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// The parameter value of sample `i`.
    pub fn sample_t(&self, i: usize) -> f64 {
        self.bounds.lerp(i as f64 / self.num_steps() as f64)
    }

    /// The total length of the curve.
    pub fn arc_length(&self) -> f64 {
        self.lengths[self.num_steps()]
    }

    /// Finds the parameter at which the accumulated length reaches `length`.
    ///
    /// Lengths that land exactly on a table entry map to that sample's parameter.
    /// Between entries, the parameter is interpolated linearly.
    pub fn length_to_t(&self, length: f64) -> Result<f64, CurveError> {
        let total = self.arc_length();
        if !Interval::new(0.0, total).contains(length) {
            return Err(CurveError::LengthOutOfRange { length, total });
        }

        // Invariant: lengths[lo] <= length <= lengths[hi], and lengths[lo] < length once lo > 0
        let (mut lo, mut hi) = (0, self.num_steps());
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.lengths[mid] < length {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if self.lengths[lo] == length {
            return Ok(self.sample_t(lo));
        }
        if self.lengths[hi] == length {
            return Ok(self.sample_t(hi));
        }

        let dists = Interval::new(self.lengths[lo], self.lengths[hi]);
        let ts = Interval::new(self.sample_t(lo), self.sample_t(hi));
        Ok(ts.lerp(dists.inv_lerp(length)))
    }

    /// Like [ArcLengthTable::length_to_t], but clamps `length` to the curve first.
    ///
    /// NaN is still an error.
    pub fn length_to_t_clamped(&self, length: f64) -> Result<f64, CurveError> {
        let total = self.arc_length();
        if length.is_nan() {
            return Err(CurveError::LengthOutOfRange { length, total });
        }
        self.length_to_t(Interval::new(0.0, total).clamp(length))
    }

    /// Finds the accumulated length at parameter `t`, which is clamped to the curve's bounds.
    pub fn t_to_length(&self, t: f64) -> f64 {
        let steps = self.num_steps();
        let x = self.bounds.inv_lerp(self.bounds.clamp(t)) * steps as f64;
        if x >= steps as f64 {
            return self.arc_length();
        }
        let idx = x as usize;
        let frac = x - idx as f64;
        Interval::new(self.lengths[idx], self.lengths[idx + 1]).lerp(frac)
    }
}
