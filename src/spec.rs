//! Specifications of color scales.

use std::cmp::Ordering;

use crate::error::{Result, SpecDefect};
use crate::space::ColorSpace;

/// An authored anchor of a color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in \[0, 1\].
    pub position: f64,
    /// Color, in the space of the enclosing specification.
    pub color: [f64; 3],
}

impl ControlPoint {
    pub const fn new(position: f64, color: [f64; 3]) -> Self {
        Self { position, color }
    }
}

/// A color scale to be generated.
///
/// Invariants (checked by [`ColorScaleSpec::validate`]): at least one
/// control point, positions in \[0, 1\] and strictly increasing, finite
/// color components and `sample_count ≥ 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScaleSpec {
    pub name: String,
    pub description: String,
    /// Control points, sorted by position.
    pub points: Vec<ControlPoint>,
    /// Space the colors of `points` are expressed in.
    pub space: ColorSpace,
    /// Space in which the resampling is performed.
    pub interpolation_space: ColorSpace,
    /// Number of entries of the generated table.
    pub sample_count: usize,
}

/// A loosely typed color scale definition, as read from static data.
/// Turned into a [`ColorScaleSpec`] by [`load`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleDef {
    pub name: String,
    pub description: String,
    /// `(position, color)` pairs, in any order.
    pub points: Vec<(f64, Vec<f64>)>,
    pub space: ColorSpace,
    pub interpolation_space: ColorSpace,
    pub sample_count: usize,
}

/// Check and convert a definition.  Points are sorted by position.
///
/// # Example
///
/// ```
/// use color_ramp::{load, ColorSpace, ScaleDef};
/// let spec = load(ScaleDef {
///     name: "blues".into(),
///     description: String::new(),
///     points: vec![(1., vec![0.3, 0.1, 265.]), (0., vec![0.95, 0.03, 240.])],
///     space: ColorSpace::Oklch,
///     interpolation_space: ColorSpace::Oklab,
///     sample_count: 16,
/// })?;
/// assert_eq!(spec.points[0].position, 0.);
/// # Ok::<(), color_ramp::Error>(())
/// ```
pub fn load(def: ScaleDef) -> Result<ColorScaleSpec> {
    if def.points.is_empty() {
        return Err(SpecDefect::NoControlPoints.into())
    }
    let mut points = Vec::with_capacity(def.points.len());
    for (index, (position, color)) in def.points.iter().enumerate() {
        check_position(index, *position)?;
        let color: [f64; 3] = color.as_slice().try_into()
            .map_err(|_| SpecDefect::WrongArity { index, len: color.len() })?;
        points.push(ControlPoint::new(*position, color));
    }
    points.sort_by(|p, q| p.position.total_cmp(&q.position));
    let spec = ColorScaleSpec {
        name: def.name,
        description: def.description,
        points,
        space: def.space,
        interpolation_space: def.interpolation_space,
        sample_count: def.sample_count,
    };
    spec.validate()?;
    Ok(spec)
}

impl ColorScaleSpec {
    /// See [`load`].
    pub fn load(def: ScaleDef) -> Result<Self> { load(def) }

    /// Check the invariants of the specification.
    pub fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(SpecDefect::NoControlPoints.into())
        }
        for (index, p) in self.points.iter().enumerate() {
            check_position(index, p.position)?;
            if !p.color.iter().all(|x| x.is_finite()) {
                return Err(SpecDefect::NonFiniteComponent { index }.into())
            }
        }
        check_order(&self.points)?;
        if self.sample_count < 2 {
            return Err(SpecDefect::TooFewSamples(self.sample_count).into())
        }
        Ok(())
    }

    /// The colors of the control points, in order.
    pub fn colors(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| p.color).collect()
    }
}

fn check_position(index: usize, position: f64) -> Result<()> {
    // NaN fails the range test.
    if (0. ..= 1.).contains(&position) { Ok(()) }
    else { Err(SpecDefect::PositionOutOfRange { index, position }.into()) }
}

/// Positions must be strictly increasing.  Equal neighbors are reported
/// as duplicates rather than ordered arbitrarily.
pub(crate) fn check_order(points: &[ControlPoint]) -> Result<()> {
    for (i, w) in points.windows(2).enumerate() {
        let (p, q) = (w[0].position, w[1].position);
        if p == q {
            return Err(SpecDefect::DuplicatePosition { position: p }.into())
        }
        if p.partial_cmp(&q) != Some(Ordering::Less) {
            return Err(SpecDefect::Unsorted { index: i + 1 }.into())
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn def(points: Vec<(f64, Vec<f64>)>, sample_count: usize) -> ScaleDef {
        ScaleDef {
            name: "test".into(),
            description: "A test scale.".into(),
            points,
            space: ColorSpace::Srgb,
            interpolation_space: ColorSpace::Oklab,
            sample_count,
        }
    }

    fn defect(r: Result<ColorScaleSpec>) -> SpecDefect {
        match r {
            Err(Error::InvalidSpec(d)) => d,
            r => panic!("expected an invalid specification, got {r:?}"),
        }
    }

    #[test]
    fn load_sorts_and_keeps_parameters() {
        let spec = load(def(vec![(1., vec![1., 1., 1.]),
                                 (0.3, vec![0.5, 0., 0.]),
                                 (0., vec![0., 0., 0.])], 5)).unwrap();
        let positions: Vec<_> = spec.points.iter().map(|p| p.position)
            .collect();
        assert_eq!(positions, vec![0., 0.3, 1.]);
        assert_eq!(spec.points[1].color, [0.5, 0., 0.]);
        assert_eq!(spec.space, ColorSpace::Srgb);
        assert_eq!(spec.interpolation_space, ColorSpace::Oklab);
        assert_eq!(spec.sample_count, 5);
        assert_eq!(spec.name, "test");
    }

    #[test]
    fn position_out_of_range() {
        let d = defect(load(def(vec![(0., vec![0.; 3]),
                                     (1.5, vec![1.; 3])], 3)));
        assert_eq!(d, SpecDefect::PositionOutOfRange { index: 1,
                                                       position: 1.5 });
        let d = defect(load(def(vec![(-0.1, vec![0.; 3])], 3)));
        assert!(matches!(d, SpecDefect::PositionOutOfRange { index: 0, .. }));
        let d = defect(load(def(vec![(f64::NAN, vec![0.; 3])], 3)));
        assert!(matches!(d, SpecDefect::PositionOutOfRange { .. }));
    }

    #[test]
    fn duplicate_positions() {
        let d = defect(load(def(vec![(0.5, vec![0.; 3]),
                                     (0.5, vec![1.; 3])], 3)));
        assert_eq!(d, SpecDefect::DuplicatePosition { position: 0.5 });
    }

    #[test]
    fn wrong_arity() {
        let d = defect(load(def(vec![(0., vec![0.; 3]),
                                     (1., vec![1., 1.])], 3)));
        assert_eq!(d, SpecDefect::WrongArity { index: 1, len: 2 });
        let d = defect(load(def(vec![(0., vec![0.; 4])], 3)));
        assert_eq!(d, SpecDefect::WrongArity { index: 0, len: 4 });
    }

    #[test]
    fn too_few_samples() {
        let d = defect(load(def(vec![(0., vec![0.; 3])], 1)));
        assert_eq!(d, SpecDefect::TooFewSamples(1));
    }

    #[test]
    fn no_points() {
        assert_eq!(defect(load(def(vec![], 3))), SpecDefect::NoControlPoints);
    }

    #[test]
    fn non_finite_component() {
        let d = defect(load(def(vec![(0., vec![0., f64::NAN, 0.])], 3)));
        assert_eq!(d, SpecDefect::NonFiniteComponent { index: 0 });
    }

    #[test]
    fn validate_hand_built_spec() {
        let mut spec = load(def(vec![(0., vec![0.; 3]),
                                     (1., vec![1.; 3])], 3)).unwrap();
        assert_eq!(spec.validate(), Ok(()));
        spec.points.reverse();
        assert!(matches!(spec.validate(),
                         Err(Error::InvalidSpec(SpecDefect::Unsorted {
                             index: 1 }))));
    }
}
