use crate::spec::ColorScaleSpec;

/// A built-in color scale with its characteristics.
pub(crate) struct ScaleData {
    pub(crate) spec: ColorScaleSpec, // Invariant: valid
    pub(crate) typ: ScaleType,
}

/// Type of color scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleType {
    /// Sequential scale, suited to ordered data that progress from low
    /// to high.  Lightness changes monotonically along the scale.
    Seq,
    /// Diverging scale.  It puts equal emphasis on a critical mid-range
    /// value and on the extremes at both ends, which have contrasting
    /// hues.
    Div,
    /// Cyclic scale, whose both ends have the same color.  Suited to
    /// angles and phases.
    Cyclic,
}
