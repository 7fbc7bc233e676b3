//! Perceptual color scales turned into static lookup tables.
//!
//! A [`ColorScaleSpec`] lists a few control points in some
//! [`ColorSpace`].  [`generate`] converts them into the interpolation
//! space, resamples them on a uniform grid of \[0, 1\] with a
//! piecewise-linear [`Ramp`], converts the samples to sRGB and encodes
//! them as `#RRGGBB` strings, producing a [`ColorScaleTable`].
//!
//! ```
//! use color_ramp::{generate, ColorScaleSpec, ColorSpace, ControlPoint};
//! let spec = ColorScaleSpec {
//!     name: "gray".into(),
//!     description: "Black to white.".into(),
//!     points: vec![ControlPoint::new(0., [0., 0., 0.]),
//!                  ControlPoint::new(1., [1., 1., 1.])],
//!     space: ColorSpace::Srgb,
//!     interpolation_space: ColorSpace::Srgb,
//!     sample_count: 3,
//! };
//! let table = generate(&spec)?;
//! assert_eq!(table.entries()[1], (0.5, "#808080".to_string()));
//! # Ok::<(), color_ramp::Error>(())
//! ```
//!
//! A catalogue of ready-made scales lives in [`scales`].

use std::marker::PhantomData;

mod error;
mod space;
mod spec;
mod ramp;
mod encode;
mod pipeline;
pub mod scales;

pub use error::{Error, Result, SpecDefect};
pub use space::{convert, convert_one, ColorSpace};
pub use spec::{load, ColorScaleSpec, ControlPoint, ScaleDef};
pub use ramp::{resample, Ramp};
pub use encode::{encode, hex, parse_hex, quantize, srgb_of_hex};
pub use pipeline::{generate, ColorScaleTable};
pub use scales::ScaleType;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn color(&self, t: f64) -> Color;

    /// Return an iterator yielding a uniform sampling of `n` points of
    /// \[0, 1\] (with both bounds included) together with colors.  The
    /// first position is exactly `0.` and the last exactly `1.`.
    fn range(self, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if n == 0 {
            Range { range: self, color: PhantomData,
                    flast: 0., last: 0, i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, color: PhantomData,
                    flast: (n - 1) as f64, last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding evenly spaced positions of \[0, 1\] together
/// with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the position `k` (assumed in `0 ..= self.last`) and its
    /// color.
    fn at(&self, k: usize) -> (f64, Color) {
        let t = if k == 0 { 0. }
                else if k == self.last { 1. }
                else { k as f64 / self.flast };
        (t, self.range.color(t))
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.at(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.at(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}
