//! Piecewise-linear interpolation between control points.

use crate::error::{Result, SpecDefect};
use crate::spec::{check_order, ControlPoint};
use crate::ColorRange;

/// Piecewise-linear interpolant through a sorted list of control
/// points, each channel being interpolated independently.  Outside the
/// positions of the first and last control points, the ramp is flat.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    points: Vec<ControlPoint>, // Invariant: non-empty, strictly increasing
}

impl Ramp {
    /// Create the ramp through `points`, which must be sorted by
    /// strictly increasing position.
    pub fn new(points: &[ControlPoint]) -> Result<Ramp> {
        if points.is_empty() {
            return Err(SpecDefect::NoControlPoints.into())
        }
        check_order(points)?;
        Ok(Ramp { points: points.to_vec() })
    }

    /// The control points of the ramp.
    pub fn points(&self) -> &[ControlPoint] { &self.points }
}

impl ColorRange<[f64; 3]> for Ramp {
    /// Returns the interpolated color at `t`.  A NaN `t` yields the
    /// first color.
    fn color(&self, t: f64) -> [f64; 3] {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        if t.is_nan() || t <= first.position { return first.color }
        if t >= last.position { return last.color }
        // first.position < t < last.position, thus 1 ≤ k < len.
        let k = self.points.partition_point(|p| p.position <= t);
        let p = &self.points[k - 1];
        let q = &self.points[k];
        let u = (t - p.position) / (q.position - p.position);
        // Written so that u = 0 and u = 1 give the control colors exactly.
        [0, 1, 2].map(|i| (1. - u) * p.color[i] + u * q.color[i])
    }
}

/// Sample the ramp through `points` at `sample_count` evenly spaced
/// positions `i / (sample_count - 1)` of \[0, 1\].
///
/// # Example
///
/// ```
/// use color_ramp::{resample, ControlPoint};
/// let points = [ControlPoint::new(0., [0., 0., 0.]),
///               ControlPoint::new(1., [1., 2., 4.])];
/// let samples = resample(&points, 5)?;
/// assert_eq!(samples[1], (0.25, [0.25, 0.5, 1.]));
/// # Ok::<(), color_ramp::Error>(())
/// ```
pub fn resample(points: &[ControlPoint], sample_count: usize)
                -> Result<Vec<(f64, [f64; 3])>> {
    if sample_count < 2 {
        return Err(SpecDefect::TooFewSamples(sample_count).into())
    }
    Ok(Ramp::new(points)?.range(sample_count).collect())
}
