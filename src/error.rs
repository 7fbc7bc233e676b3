//! Error types of the color scale pipeline.

use thiserror::Error;

use crate::space::ColorSpace;

/// Everything that can go wrong while turning a specification into a
/// table.  Errors are raised at the earliest point they are detectable
/// and are never recovered from inside the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid color scale specification: {0}")]
    InvalidSpec(#[from] SpecDefect),

    #[error("unsupported color space “{name}”")]
    UnsupportedColorSpace { name: String },

    #[error("conversion from {from} to {to} produced a non-finite value \
             (color #{index})")]
    NumericInstability {
        from: ColorSpace,
        to: ColorSpace,
        index: usize,
    },
}

/// The way a specification fails to be well formed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecDefect {
    #[error("no control points")]
    NoControlPoints,

    #[error("position {position} of control point #{index} is not in [0, 1]")]
    PositionOutOfRange { index: usize, position: f64 },

    #[error("two control points share the position {position}")]
    DuplicatePosition { position: f64 },

    #[error("control points are not sorted (at #{index})")]
    Unsorted { index: usize },

    #[error("color of control point #{index} has {len} components, \
             expected 3")]
    WrongArity { index: usize, len: usize },

    #[error("color of control point #{index} has a non-finite component")]
    NonFiniteComponent { index: usize },

    #[error("sample count {0} is smaller than 2")]
    TooFewSamples(usize),

    #[error("“{0}” is not a #RRGGBB color")]
    MalformedHex(String),
}

/// Result type alias for color scale operations.
pub type Result<T> = std::result::Result<T, Error>;
