//! Generation of color scale tables.

use crate::encode::encode;
use crate::error::Result;
use crate::ramp::resample;
use crate::space::{convert, ColorSpace};
use crate::spec::{ColorScaleSpec, ControlPoint};

/// A generated color scale: `(normalized_value, "#RRGGBB")` pairs in
/// ascending order of values, from `0.` to `1.`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScaleTable {
    name: String,
    description: String,
    entries: Vec<(f64, String)>,
}

impl ColorScaleTable {
    /// Name of the scale the table was generated from.
    pub fn name(&self) -> &str { &self.name }

    pub fn description(&self) -> &str { &self.description }

    /// The `(value, hex color)` pairs.
    pub fn entries(&self) -> &[(f64, String)] { &self.entries }

    /// Number of entries.
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate on the `(value, hex color)` pairs.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, &str)> + '_ {
        self.entries.iter().map(|(v, c)| (*v, c.as_str()))
    }

    /// The same scale run backwards: the color at value `v` becomes the
    /// color at `1 - v`.  Entries remain in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use color_ramp::{generate, scales};
    /// let autumn = generate(scales::autumn().spec())?;
    /// let inverted = autumn.inverted();
    /// assert_eq!(inverted.entries()[0].1, autumn.entries().last().unwrap().1);
    /// # Ok::<(), color_ramp::Error>(())
    /// ```
    pub fn inverted(&self) -> ColorScaleTable {
        ColorScaleTable {
            name: self.name.clone(),
            description: self.description.clone(),
            entries: self.entries.iter().rev()
                .map(|(v, c)| (1. - v, c.clone()))
                .collect(),
        }
    }
}

/// Generate the table of `spec`.
///
/// The control points are converted into the interpolation space,
/// resampled at `spec.sample_count` evenly spaced positions, converted
/// to sRGB and encoded.  The specification is validated before any
/// conversion takes place.
#[tracing::instrument(skip_all, fields(name = %spec.name))]
pub fn generate(spec: &ColorScaleSpec) -> Result<ColorScaleTable> {
    spec.validate()?;
    let colors = convert(&spec.colors(), spec.space, spec.interpolation_space)?;
    let points: Vec<_> = spec.points.iter().zip(colors)
        .map(|(p, c)| ControlPoint::new(p.position, c))
        .collect();
    let (values, colors): (Vec<f64>, Vec<[f64; 3]>) =
        resample(&points, spec.sample_count)?.into_iter().unzip();
    let srgb = convert(&colors, spec.interpolation_space, ColorSpace::DISPLAY)?;
    let entries: Vec<_> = values.into_iter().zip(encode(&srgb)).collect();
    tracing::debug!(space = %spec.interpolation_space, samples = entries.len(),
                    "generated color scale");
    Ok(ColorScaleTable {
        name: spec.name.clone(),
        description: spec.description.clone(),
        entries,
    })
}
