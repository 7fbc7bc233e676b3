//! Built-in color scales.
//!
//! All scales are authored in [`ColorSpace::Oklch`] and resampled in
//! Oklab, except [`rainbow`] and [`equal_hue`] which are resampled in
//! Oklch so that their hue turns around the color wheel.
//!
//! ```
//! use color_ramp::scales::{self, ScaleType};
//! let diverging: Vec<_> = scales::find().typ(ScaleType::Div).find()
//!     .map(|s| s.name())
//!     .collect();
//! assert!(diverging.contains(&"blue_red_white"));
//! ```

use std::ops::Deref;
use lazy_static::lazy_static;

use crate::error::Result;
use crate::pipeline::{generate, ColorScaleTable};
use crate::space::ColorSpace;
use crate::spec::{ColorScaleSpec, ControlPoint};

pub(crate) mod ty;
use ty::ScaleData;
pub use ty::ScaleType;

/// Number of entries of the tables of built-in scales.
pub const DEFAULT_SAMPLE_COUNT: usize = 21;

fn oklch(name: &str, description: &str, typ: ScaleType,
         interpolation_space: ColorSpace,
         points: &[(f64, [f64; 3])]) -> ScaleData {
    ScaleData {
        spec: ColorScaleSpec {
            name: name.to_string(),
            description: description.to_string(),
            points: points.iter().map(|&(t, c)| ControlPoint::new(t, c))
                .collect(),
            space: ColorSpace::Oklch,
            interpolation_space,
            sample_count: DEFAULT_SAMPLE_COUNT,
        },
        typ,
    }
}

use ScaleType::*;
use ColorSpace::{Oklab, Oklch};

lazy_static! {
    static ref AUTUMN: ScaleData = oklch(
        "autumn", "A color map of yellow, orange, red and brown.",
        Seq, Oklab,
        &[(0.00, [0.93, 0.16, 98.]),
          (0.35, [0.78, 0.16, 65.]),
          (0.70, [0.60, 0.19, 30.]),
          (1.00, [0.38, 0.09, 40.])]);

    static ref AUTUMN_WIDE: ScaleData = oklch(
        "autumn_wide", "A color map of white, yellow, orange, red and brown.",
        Seq, Oklab,
        &[(0.00, [0.98, 0.03, 100.]),
          (0.25, [0.90, 0.15, 95.]),
          (0.50, [0.75, 0.16, 60.]),
          (0.75, [0.57, 0.18, 30.]),
          (1.00, [0.30, 0.07, 40.])]);

    static ref OCEAN: ScaleData = oklch(
        "ocean", "A color maps of blues.",
        Seq, Oklab,
        &[(0.0, [0.90, 0.05, 230.]),
          (0.5, [0.65, 0.12, 245.]),
          (1.0, [0.40, 0.12, 260.])]);

    static ref OCEAN_WIDE: ScaleData = oklch(
        "ocean_wide", "A color maps of blues with wider range of lightness.",
        Seq, Oklab,
        &[(0.0, [0.98, 0.01, 230.]),
          (0.5, [0.66, 0.13, 245.]),
          (1.0, [0.25, 0.09, 265.])]);

    static ref FOREST: ScaleData = oklch(
        "forest", "A color map of greens.",
        Seq, Oklab,
        &[(0.0, [0.92, 0.08, 130.]),
          (0.5, [0.70, 0.14, 145.]),
          (1.0, [0.45, 0.10, 155.])]);

    static ref FOREST_WIDE: ScaleData = oklch(
        "forest_wide", "A color map of greens with wider range of lightness.",
        Seq, Oklab,
        &[(0.0, [0.97, 0.03, 125.]),
          (0.5, [0.70, 0.15, 145.]),
          (1.0, [0.32, 0.08, 155.])]);

    static ref RED: ScaleData = oklch(
        "red", "A color map of reds.",
        Seq, Oklab,
        &[(0.0, [0.90, 0.05, 20.]),
          (0.5, [0.65, 0.17, 25.]),
          (1.0, [0.42, 0.14, 25.])]);

    static ref RED_WIDE: ScaleData = oklch(
        "red_wide", "A color map of reds with wider range of lightness.",
        Seq, Oklab,
        &[(0.0, [0.97, 0.02, 20.]),
          (0.5, [0.65, 0.18, 25.]),
          (1.0, [0.30, 0.10, 25.])]);

    static ref PURPLE_GREEN_YELLOW: ScaleData = oklch(
        "purple_green_yellow", "A color map of purple, green and yellow.",
        Seq, Oklab,
        &[(0.0, [0.30, 0.12, 300.]),
          (0.5, [0.60, 0.10, 170.]),
          (1.0, [0.92, 0.18, 105.])]);

    static ref TEA: ScaleData = oklch(
        "tea", "A color map of red and green.",
        Div, Oklab,
        &[(0.0, [0.50, 0.15, 25.]),
          (0.5, [0.85, 0.03, 90.]),
          (1.0, [0.50, 0.12, 145.])]);

    static ref BLUE_BROWN_WHITE: ScaleData = oklch(
        "blue_brown_white", "A color map of blue, white, and brown.",
        Div, Oklab,
        &[(0.0, [0.45, 0.12, 245.]),
          (0.5, [0.97, 0.00, 0.]),
          (1.0, [0.45, 0.09, 60.])]);

    static ref BLUE_BROWN_WHITE_WIDE: ScaleData = oklch(
        "blue_brown_white_wide",
        "A color map of blue, white, and brown with wider range of lightness.",
        Div, Oklab,
        &[(0.0, [0.32, 0.10, 250.]),
          (0.5, [0.98, 0.00, 0.]),
          (1.0, [0.32, 0.07, 60.])]);

    static ref BLUE_BROWN_LIGHT: ScaleData = oklch(
        "blue_brown_light", "A color map of blue, green, and brown.",
        Div, Oklab,
        &[(0.0, [0.45, 0.12, 245.]),
          (0.5, [0.85, 0.10, 150.]),
          (1.0, [0.45, 0.09, 60.])]);

    static ref BLUE_BROWN_LIGHT_WIDE: ScaleData = oklch(
        "blue_brown_light_wide",
        "A color map of blue, green, and brown with wider range of lightness.",
        Div, Oklab,
        &[(0.0, [0.32, 0.10, 250.]),
          (0.5, [0.90, 0.10, 150.]),
          (1.0, [0.32, 0.07, 60.])]);

    static ref BLUE_RED_WHITE: ScaleData = oklch(
        "blue_red_white", "A color map of blue, white, and red.",
        Div, Oklab,
        &[(0.0, [0.45, 0.14, 260.]),
          (0.5, [0.97, 0.00, 0.]),
          (1.0, [0.45, 0.16, 25.])]);

    static ref BLUE_RED_WHITE_WIDE: ScaleData = oklch(
        "blue_red_white_wide",
        "A color map of blue, white, and red with wider range of lightness.",
        Div, Oklab,
        &[(0.0, [0.32, 0.11, 262.]),
          (0.5, [0.98, 0.00, 0.]),
          (1.0, [0.32, 0.12, 25.])]);

    static ref BLUE_RED_LIGHT: ScaleData = oklch(
        "blue_red_light", "A color map of blue, yellow, and red.",
        Div, Oklab,
        &[(0.0, [0.45, 0.14, 260.]),
          (0.5, [0.92, 0.12, 100.]),
          (1.0, [0.45, 0.16, 25.])]);

    static ref BLUE_RED_LIGHT_WIDE: ScaleData = oklch(
        "blue_red_light_wide",
        "A color map of blue, yellow, and red with wider range of lightness.",
        Div, Oklab,
        &[(0.0, [0.32, 0.11, 262.]),
          (0.5, [0.95, 0.12, 100.]),
          (1.0, [0.32, 0.12, 25.])]);

    static ref BLUE_ORANGE_DARK: ScaleData = oklch(
        "blue_orange_dark", "A color map of blue, dark purple, and orange.",
        Div, Oklab,
        &[(0.0, [0.75, 0.12, 240.]),
          (0.5, [0.30, 0.08, 300.]),
          (1.0, [0.78, 0.15, 60.])]);

    static ref BLUE_ORANGE_DARK_WIDE: ScaleData = oklch(
        "blue_orange_dark_wide",
        "A color map of blue, dark purple, and orange \
         with wider range of lightness.",
        Div, Oklab,
        &[(0.0, [0.85, 0.08, 240.]),
          (0.5, [0.22, 0.06, 300.]),
          (1.0, [0.87, 0.11, 65.])]);

    static ref BLUE_RED_DARK: ScaleData = oklch(
        "blue_red_dark", "A color map of blue, dark purple, and red.",
        Div, Oklab,
        &[(0.0, [0.75, 0.12, 240.]),
          (0.5, [0.30, 0.08, 310.]),
          (1.0, [0.72, 0.15, 25.])]);

    static ref BLUE_RED_DARK_WIDE: ScaleData = oklch(
        "blue_red_dark_wide",
        "A color map of blue, dark purple, and red \
         with wider range of lightness.",
        Div, Oklab,
        &[(0.0, [0.85, 0.08, 240.]),
          (0.5, [0.22, 0.06, 310.]),
          (1.0, [0.82, 0.10, 25.])]);

    static ref RAINBOW: ScaleData = oklch(
        "rainbow", "A color scale of blue, green and red.",
        Seq, Oklch,
        &[(0.0, [0.55, 0.15, 265.]),
          (0.5, [0.72, 0.17, 145.]),
          (1.0, [0.62, 0.20, 30.])]);

    static ref EQUAL_HUE: ScaleData = oklch(
        "equal_hue", "A cyclic color map whose color changes only in hue.",
        Cyclic, Oklch,
        &[(0.0, [0.70, 0.12, 0.]),
          (1.0, [0.70, 0.12, 360.])]);

    static ref ALL_SCALES: [&'static ScaleData; 24] = [
        AUTUMN.deref(), AUTUMN_WIDE.deref(), OCEAN.deref(),
        OCEAN_WIDE.deref(), FOREST.deref(), FOREST_WIDE.deref(), RED.deref(),
        RED_WIDE.deref(), PURPLE_GREEN_YELLOW.deref(), TEA.deref(),
        BLUE_BROWN_WHITE.deref(), BLUE_BROWN_WHITE_WIDE.deref(),
        BLUE_BROWN_LIGHT.deref(), BLUE_BROWN_LIGHT_WIDE.deref(),
        BLUE_RED_WHITE.deref(), BLUE_RED_WHITE_WIDE.deref(),
        BLUE_RED_LIGHT.deref(), BLUE_RED_LIGHT_WIDE.deref(),
        BLUE_ORANGE_DARK.deref(), BLUE_ORANGE_DARK_WIDE.deref(),
        BLUE_RED_DARK.deref(), BLUE_RED_DARK_WIDE.deref(), RAINBOW.deref(),
        EQUAL_HUE.deref()];
}

/// A built-in color scale.
#[derive(Clone, Copy)]
pub struct Scale {
    data: &'static ScaleData,
}

impl Scale {
    pub fn name(&self) -> &'static str { &self.data.spec.name }

    pub fn description(&self) -> &'static str { &self.data.spec.description }

    /// Says whether the scale is `Seq`uential, `Div`ergent or `Cyclic`.
    pub fn typ(&self) -> ScaleType { self.data.typ }

    /// The specification the scale is generated from.
    pub fn spec(&self) -> &'static ColorScaleSpec { &self.data.spec }

    /// Generate the table of the scale.
    pub fn generate(&self) -> Result<ColorScaleTable> {
        generate(&self.data.spec)
    }
}

impl std::fmt::Debug for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scale")
            .field("name", &self.name())
            .field("typ", &self.typ())
            .finish()
    }
}

macro_rules! builtin {
    ($($(#[$doc: meta])* $f: ident => $data: ident),* $(,)?) => {
        $( $(#[$doc])*
           #[inline]
           pub fn $f() -> Scale { Scale { data: $data.deref() } } )*
    }
}

builtin! {
    /// Yellow, orange, red and brown.
    autumn => AUTUMN,
    /// White, yellow, orange, red and brown.
    autumn_wide => AUTUMN_WIDE,
    /// Light to dark blue.
    ocean => OCEAN,
    /// Near white to very dark blue.
    ocean_wide => OCEAN_WIDE,
    /// Light to dark green.
    forest => FOREST,
    /// Near white to very dark green.
    forest_wide => FOREST_WIDE,
    /// Light to dark red.
    red => RED,
    /// Near white to very dark red.
    red_wide => RED_WIDE,
    /// Dark purple, green and light yellow.
    purple_green_yellow => PURPLE_GREEN_YELLOW,
    /// Red, light beige and green.
    tea => TEA,
    /// Blue, white and brown.
    blue_brown_white => BLUE_BROWN_WHITE,
    /// Dark blue, white and dark brown.
    blue_brown_white_wide => BLUE_BROWN_WHITE_WIDE,
    /// Blue, light green and brown.
    blue_brown_light => BLUE_BROWN_LIGHT,
    /// Dark blue, light green and dark brown.
    blue_brown_light_wide => BLUE_BROWN_LIGHT_WIDE,
    /// Blue, white and red.
    blue_red_white => BLUE_RED_WHITE,
    /// Dark blue, white and dark red.
    blue_red_white_wide => BLUE_RED_WHITE_WIDE,
    /// Blue, light yellow and red.
    blue_red_light => BLUE_RED_LIGHT,
    /// Dark blue, light yellow and dark red.
    blue_red_light_wide => BLUE_RED_LIGHT_WIDE,
    /// Light blue, dark purple and orange.
    blue_orange_dark => BLUE_ORANGE_DARK,
    /// Very light blue, very dark purple and light orange.
    blue_orange_dark_wide => BLUE_ORANGE_DARK_WIDE,
    /// Light blue, dark purple and light red.
    blue_red_dark => BLUE_RED_DARK,
    /// Very light blue, very dark purple and light red.
    blue_red_dark_wide => BLUE_RED_DARK_WIDE,
    /// Blue, green and red, turning around the hue circle.
    rainbow => RAINBOW,
    /// Constant lightness and chroma, hue going once around the circle.
    equal_hue => EQUAL_HUE,
}

/// All built-in scales.
pub fn all() -> impl Iterator<Item = Scale> {
    ALL_SCALES.iter().map(|&data| Scale { data })
}

/// The built-in scale named `name`, if any.
pub fn get(name: &str) -> Option<Scale> {
    all().find(|s| s.name() == name)
}

/// Find built-in scales matching certain criteria.
pub fn find() -> ScaleFind {
    ScaleFind { typ: vec![], interpolation_space: None }
}

/// Set criteria to find matching scales.
///
/// Created by [`find`].
#[derive(Clone, Debug)]
pub struct ScaleFind {
    typ: Vec<ScaleType>,
    interpolation_space: Option<ColorSpace>,
}

impl ScaleFind {
    /// Find scales with this type.  Use several times to specify more
    /// than one [`ScaleType`].
    pub fn typ(mut self, t: ScaleType) -> Self {
        self.typ.push(t);
        self
    }

    /// Find scales resampled in `space`.
    pub fn interpolation_space(mut self, space: ColorSpace) -> Self {
        self.interpolation_space = Some(space);
        self
    }

    /// Return the scales satisfying the criteria.
    pub fn find(self) -> impl Iterator<Item = Scale> {
        let typ = { if self.typ.is_empty() { vec![Seq, Div, Cyclic] }
                    else { self.typ } };
        let space = self.interpolation_space;
        all().filter(move |s| {
            typ.contains(&s.typ())
                && space.map_or(true, |sp| s.spec().interpolation_space == sp)
        })
    }
}
