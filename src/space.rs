//! Color spaces and conversions between them.
//!
//! Every space but [`ColorSpace::Xyz`] has a *parent* space from which it
//! is derived by a single, exactly invertible step:
//!
//! ```text
//! Srgb ─▶ LinearSrgb ─▶ Xyz ◀─ Lab ◀─ Lch
//!                        ▲
//!                        └─ Oklab ◀─ Oklch
//! ```
//!
//! A conversion climbs from the source space to the nearest space shared
//! with the target and then descends to the target, so that e.g.
//! `Oklab → Oklch` never goes through XYZ.  Values are never clamped:
//! colors may leave the sRGB gamut mid-pipeline.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The closed set of supported color spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB, channels nominally in \[0, 1\].  This is the
    /// display space of generated tables.
    Srgb,
    /// sRGB primaries without the transfer function.
    LinearSrgb,
    /// CIE 1931 XYZ relative to the D65 white point (Y = 1 for white).
    Xyz,
    /// CIE L\*a\*b\* relative to D65, L in \[0, 100\].
    Lab,
    /// CIE L\*a\*b\* in polar coordinates: lightness, chroma and hue
    /// in degrees.  Any hue is accepted as input; converting back from
    /// another space yields the canonical hue, in \[0, 360) and `0.` for
    /// achromatic colors.
    Lch,
    /// Oklab, L in \[0, 1\].
    Oklab,
    /// Oklab in polar coordinates: lightness, chroma and hue in degrees,
    /// canonical in the same way as [`ColorSpace::Lch`].
    Oklch,
}

impl ColorSpace {
    /// All spaces, in a fixed order.
    pub const ALL: [ColorSpace; 7] = [
        ColorSpace::Srgb,
        ColorSpace::LinearSrgb,
        ColorSpace::Xyz,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Oklab,
        ColorSpace::Oklch,
    ];

    /// The space colors are quantized and encoded in.
    pub const DISPLAY: ColorSpace = ColorSpace::Srgb;

    /// Canonical name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::LinearSrgb => "linear-srgb",
            ColorSpace::Xyz => "xyz",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Oklch => "oklch",
        }
    }

    /// Whether the third channel is a hue angle.
    pub fn is_polar(self) -> bool {
        matches!(self, ColorSpace::Lch | ColorSpace::Oklch)
    }

    fn parent(self) -> Option<ColorSpace> {
        match self {
            ColorSpace::Srgb => Some(ColorSpace::LinearSrgb),
            ColorSpace::LinearSrgb => Some(ColorSpace::Xyz),
            ColorSpace::Xyz => None,
            ColorSpace::Lab => Some(ColorSpace::Xyz),
            ColorSpace::Lch => Some(ColorSpace::Lab),
            ColorSpace::Oklab => Some(ColorSpace::Xyz),
            ColorSpace::Oklch => Some(ColorSpace::Oklab),
        }
    }

    /// `self` followed by its parents, ending with `Xyz`.
    fn lineage(self) -> Vec<ColorSpace> {
        let mut spaces = vec![self];
        let mut s = self;
        while let Some(p) = s.parent() {
            spaces.push(p);
            s = p;
        }
        spaces
    }

    /// Express `c`, given in `self`, in the parent space.
    fn to_parent(self, c: [f64; 3]) -> [f64; 3] {
        match self {
            ColorSpace::Srgb => srgb_to_linear(c),
            ColorSpace::LinearSrgb => multiply(&LINEAR_SRGB_TO_XYZ, &c),
            ColorSpace::Xyz => c,
            ColorSpace::Lab => lab_to_xyz(c),
            ColorSpace::Lch => polar_to_rect(c),
            ColorSpace::Oklab => oklab_to_xyz(c),
            ColorSpace::Oklch => polar_to_rect(c),
        }
    }

    /// Express `c`, given in the parent space, in `self`.
    fn from_parent(self, c: [f64; 3]) -> [f64; 3] {
        match self {
            ColorSpace::Srgb => linear_to_srgb(c),
            ColorSpace::LinearSrgb => multiply(&XYZ_TO_LINEAR_SRGB, &c),
            ColorSpace::Xyz => c,
            ColorSpace::Lab => xyz_to_lab(c),
            ColorSpace::Lch => rect_to_polar(c, LAB_ACHROMATIC),
            ColorSpace::Oklab => xyz_to_oklab(c),
            ColorSpace::Oklch => rect_to_polar(c, OKLAB_ACHROMATIC),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let space = match s.trim().to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => ColorSpace::Srgb,
            "linear-srgb" | "linear_srgb" | "srgb-linear" | "linear-rgb" =>
                ColorSpace::LinearSrgb,
            "xyz" | "xyz-d65" => ColorSpace::Xyz,
            "lab" | "cielab" => ColorSpace::Lab,
            "lch" | "cielch" => ColorSpace::Lch,
            "oklab" => ColorSpace::Oklab,
            "oklch" => ColorSpace::Oklch,
            _ => return Err(Error::UnsupportedColorSpace {
                name: s.to_string() }),
        };
        Ok(space)
    }
}

/// The sequence of single steps leading from one space to another.
struct Route {
    up: Vec<ColorSpace>,   // apply `to_parent`, in order
    down: Vec<ColorSpace>, // apply `from_parent`, in order
}

impl Route {
    fn new(from: ColorSpace, to: ColorSpace) -> Route {
        let from_lineage = from.lineage();
        let to_lineage = to.lineage();
        // Both lineages end with `Xyz`, so there is a common space.
        let common = from_lineage.iter()
            .position(|s| to_lineage.contains(s))
            .unwrap_or(from_lineage.len() - 1);
        let up = from_lineage[.. common].to_vec();
        let down = match to_lineage.iter()
            .position(|s| *s == from_lineage[common]) {
                Some(j) => to_lineage[.. j].iter().rev().copied().collect(),
                None => vec![],
            };
        Route { up, down }
    }

    fn apply(&self, mut c: [f64; 3]) -> [f64; 3] {
        for s in &self.up { c = s.to_parent(c) }
        for s in &self.down { c = s.from_parent(c) }
        c
    }
}

/// Convert `colors` expressed in `from` into `to`.
///
/// Converting to the same space returns the colors unchanged.  Channels
/// are not clamped.
///
/// # Example
///
/// ```
/// use color_ramp::{convert, ColorSpace};
/// let lab = convert(&[[1., 1., 1.]], ColorSpace::Srgb, ColorSpace::Lab)?;
/// assert!((lab[0][0] - 100.).abs() < 1e-9);
/// # Ok::<(), color_ramp::Error>(())
/// ```
pub fn convert(colors: &[[f64; 3]], from: ColorSpace, to: ColorSpace)
               -> Result<Vec<[f64; 3]>> {
    if from == to {
        return Ok(colors.to_vec())
    }
    tracing::trace!(%from, %to, len = colors.len(), "converting colors");
    let route = Route::new(from, to);
    colors.iter().enumerate()
        .map(|(index, &c)| {
            let c = route.apply(c);
            if c.iter().all(|x| x.is_finite()) { Ok(c) }
            else { Err(Error::NumericInstability { from, to, index }) }
        })
        .collect()
}

/// Convert a single color.  See [`convert`].
pub fn convert_one(color: [f64; 3], from: ColorSpace, to: ColorSpace)
                   -> Result<[f64; 3]> {
    let mut out = convert(&[color], from, to)?;
    Ok(out.remove(0))
}

/// Product of a 3×3 matrix with a vector.
#[inline]
fn multiply(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    let [r1, r2, r3] = m;
    [r1[0] * v[0] + r1[1] * v[1] + r1[2] * v[2],
     r2[0] * v[0] + r2[1] * v[1] + r2[2] * v[2],
     r3[0] * v[0] + r3[1] * v[1] + r3[2] * v[2]]
}

// sRGB transfer function, extended to negative values by symmetry.

fn srgb_to_linear(c: [f64; 3]) -> [f64; 3] {
    #[inline]
    fn decode(x: f64) -> f64 {
        let m = x.abs();
        if m <= 0.04045 { x / 12.92 }
        else { ((m + 0.055) / 1.055).powf(2.4).copysign(x) }
    }
    c.map(decode)
}

fn linear_to_srgb(c: [f64; 3]) -> [f64; 3] {
    #[inline]
    fn encode(x: f64) -> f64 {
        let m = x.abs();
        if m <= 0.0031308 { x * 12.92 }
        else { (1.055 * m.powf(1. / 2.4) - 0.055).copysign(x) }
    }
    c.map(encode)
}

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// CIE L*a*b*

/// D65 white point, from its chromaticity (0.3127, 0.3290).
const WHITE: [f64; 3] = [0.3127 / 0.3290, 1., (1. - 0.3127 - 0.3290) / 0.3290];

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;

/// Chroma below which a Lab color is considered gray (hue set to 0).
const LAB_ACHROMATIC: f64 = 1e-7;

fn xyz_to_lab(c: [f64; 3]) -> [f64; 3] {
    const C1: f64 = 841. / 108.;
    const C2: f64 = 4. / 29.;
    #[inline]
    fn f(t: f64) -> f64 { if t > EPS { t.cbrt() } else { C1 * t + C2 } }
    let fx = f(c[0] / WHITE[0]);
    let fy = f(c[1] / WHITE[1]);
    let fz = f(c[2] / WHITE[2]);
    [116. * fy - 16., 500. * (fx - fy), 200. * (fy - fz)]
}

fn lab_to_xyz(c: [f64; 3]) -> [f64; 3] {
    const C0: f64 = 108. / 841.;
    const C1: f64 = 4. / 29.;
    #[inline]
    fn finv(f: f64) -> f64 { if f > EPS0 { f * f * f } else { C0 * (f - C1) } }
    let [l, a, b] = c;
    let fy = (l + 16.) / 116.;
    let fx = a / 500. + fy;
    let fz = fy - b / 200.;
    [finv(fx) * WHITE[0], finv(fy) * WHITE[1], finv(fz) * WHITE[2]]
}

// Oklab, matrices from color.js (exact inverses of each other in f64).

/// Chroma below which an Oklab color is considered gray.
const OKLAB_ACHROMATIC: f64 = 1e-9;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[f64; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[f64; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[f64; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[f64; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

fn xyz_to_oklab(c: [f64; 3]) -> [f64; 3] {
    let lms = multiply(&XYZ_TO_OKLMS, &c);
    multiply(&OKLMS_TO_OKLAB, &lms.map(f64::cbrt))
}

fn oklab_to_xyz(c: [f64; 3]) -> [f64; 3] {
    let lms = multiply(&OKLAB_TO_OKLMS, &c);
    multiply(&OKLMS_TO_XYZ, &lms.map(|x| x * x * x))
}

// Polar coordinates, hue in degrees in [0, 360).

fn rect_to_polar(c: [f64; 3], achromatic: f64) -> [f64; 3] {
    let [l, a, b] = c;
    let chroma = a.hypot(b);
    if chroma < achromatic { return [l, chroma, 0.] }
    let h = b.atan2(a).to_degrees();
    // A tiny negative angle plus 360 may round to 360.
    let h = if h < 0. { h + 360. } else { h };
    [l, chroma, if h >= 360. { 0. } else { h }]
}

fn polar_to_rect(c: [f64; 3]) -> [f64; 3] {
    let [l, chroma, h] = c;
    let (sin, cos) = h.to_radians().sin_cos();
    [l, chroma * cos, chroma * sin]
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Representative sRGB colors, grays and both transfer segments
    /// included.
    const SAMPLES: [[f64; 3]; 24] = [
        [0., 0., 0.], [1., 1., 1.], [0.5, 0.5, 0.5], [0.2, 0.2, 0.2],
        [1., 0., 0.], [0., 1., 0.], [0., 0., 1.],
        [0., 1., 1.], [1., 0., 1.], [1., 1., 0.],
        [1., 0.5, 0.], [0.1, 0.2, 0.3], [0.9, 0.8, 0.7],
        [0.25, 0.75, 0.5], [0.01, 0.02, 0.005], [0.04, 0.04, 0.05],
        [0.5, 0., 0.5], [0., 0.5, 0.5], [0.5, 0.5, 0.], [1., 0.75, 0.8],
        [0.6, 0.3, 0.1], [0., 0., 0.5], [0.3, 0.6, 0.9], [0.95, 0.05, 0.4],
    ];

    fn assert_close(x: [f64; 3], y: [f64; 3], tol: f64) {
        for i in 0 .. 3 {
            assert!((x[i] - y[i]).abs() <= tol, "{x:?} ≉ {y:?}");
        }
    }

    #[test]
    fn round_trip_every_pair() {
        for a in ColorSpace::ALL {
            let xs = convert(&SAMPLES, ColorSpace::Srgb, a).unwrap();
            for b in ColorSpace::ALL {
                let there = convert(&xs, a, b).unwrap();
                let back = convert(&there, b, a).unwrap();
                for (x, y) in xs.iter().zip(&back) {
                    for i in 0 .. 3 {
                        assert!((x[i] - y[i]).abs() <= 1e-6,
                                "{a} → {b} → {a}: {x:?} ≉ {y:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn same_space_is_identity() {
        for s in ColorSpace::ALL {
            let c = [[0.1234, -5., 7.5]];
            assert_eq!(convert(&c, s, s).unwrap(), c.to_vec());
        }
    }

    #[test]
    fn known_values() {
        let white = convert_one([1., 1., 1.], ColorSpace::Srgb,
                                ColorSpace::Lab).unwrap();
        assert_close(white, [100., 0., 0.], 1e-9);
        let white = convert_one([1., 1., 1.], ColorSpace::Srgb,
                                ColorSpace::Oklab).unwrap();
        assert_close(white, [1., 0., 0.], 1e-9);
        let red = convert_one([1., 0., 0.], ColorSpace::Srgb,
                              ColorSpace::Oklab).unwrap();
        assert_close(red, [0.627955, 0.224863, 0.125846], 1e-5);
        let red = convert_one([1., 0., 0.], ColorSpace::Srgb,
                              ColorSpace::Lab).unwrap();
        assert_close(red, [53.2371, 80.0901, 67.2033], 1e-3);
        let blue = convert_one([0., 0., 1.], ColorSpace::Srgb,
                               ColorSpace::Oklch).unwrap();
        assert!((blue[2] - 264.052).abs() < 1e-2, "{blue:?}");
    }

    #[test]
    fn grays_have_zero_hue() {
        for g in [0., 0.2, 0.5, 1.] {
            let lch = convert_one([g, g, g], ColorSpace::Srgb,
                                  ColorSpace::Lch).unwrap();
            assert_eq!(lch[2], 0.);
            let oklch = convert_one([g, g, g], ColorSpace::Srgb,
                                    ColorSpace::Oklch).unwrap();
            assert_eq!(oklch[2], 0.);
        }
    }

    #[test]
    fn polar_hues_come_back_canonical() {
        for (s, l) in [(ColorSpace::Lch, 50.), (ColorSpace::Oklch, 0.5)] {
            for (c, h, expected) in [(0.1, 45., 45.), (0.1, 400., 40.),
                                     (0.1, -30., 330.), (0.1, 360., 0.),
                                     (0.1, -720., 0.), (0., 120., 0.)] {
                let rect = convert_one([l, c, h], s, s.parent().unwrap())
                    .unwrap();
                let [l1, c1, h1] = convert_one(rect, s.parent().unwrap(), s)
                    .unwrap();
                assert!((l1 - l).abs() < 1e-9 && (c1 - c).abs() < 1e-9);
                assert!((0. .. 360.).contains(&h1), "{s} {h} → {h1}");
                let d = (h1 - expected).rem_euclid(360.);
                assert!(d.min(360. - d) < 1e-9, "{s} {h} → {h1}");
                if c == 0. { assert_eq!(h1, 0.) }
            }
        }
    }

    #[test]
    fn no_clamping() {
        let c = [1.2, -0.1, 0.5];
        let lab = convert_one(c, ColorSpace::Srgb, ColorSpace::Oklab).unwrap();
        let back = convert_one(lab, ColorSpace::Oklab, ColorSpace::Srgb)
            .unwrap();
        assert_close(back, c, 1e-9);
    }

    #[test]
    fn non_finite_is_reported() {
        let r = convert(&[[0., 0., 0.], [f64::INFINITY, 0., 0.]],
                        ColorSpace::Srgb, ColorSpace::Oklab);
        assert_eq!(r, Err(Error::NumericInstability {
            from: ColorSpace::Srgb, to: ColorSpace::Oklab, index: 1 }));
    }

    #[test]
    fn names() {
        for s in ColorSpace::ALL {
            assert_eq!(s.to_string().parse::<ColorSpace>().unwrap(), s);
        }
        assert_eq!("OKLCH".parse::<ColorSpace>().unwrap(), ColorSpace::Oklch);
        assert_eq!("srgb-linear".parse::<ColorSpace>().unwrap(),
                   ColorSpace::LinearSrgb);
        assert!(matches!("hsv".parse::<ColorSpace>(),
                         Err(Error::UnsupportedColorSpace { .. })));
    }

    #[test]
    fn routes_avoid_xyz_when_possible() {
        let r = Route::new(ColorSpace::Oklab, ColorSpace::Oklch);
        assert!(r.up.is_empty());
        assert_eq!(r.down, vec![ColorSpace::Oklch]);
        let r = Route::new(ColorSpace::Srgb, ColorSpace::Lch);
        assert_eq!(r.up, vec![ColorSpace::Srgb, ColorSpace::LinearSrgb]);
        assert_eq!(r.down, vec![ColorSpace::Lab, ColorSpace::Lch]);
    }

    proptest! {
        #[test]
        fn round_trip_random(r in 0.0..=1.0f64, g in 0.0..=1.0f64,
                             b in 0.0..=1.0f64) {
            let c = [r, g, b];
            for a in [ColorSpace::Srgb, ColorSpace::Lab, ColorSpace::Oklab] {
                let x = convert_one(c, ColorSpace::Srgb, a).unwrap();
                for s in ColorSpace::ALL {
                    let y = convert_one(x, a, s).unwrap();
                    let back = convert_one(y, s, a).unwrap();
                    for i in 0 .. 3 {
                        prop_assert!((x[i] - back[i]).abs() <= 1e-6,
                                     "{} → {} → {}: {:?} ≉ {:?}",
                                     a, s, a, x, back);
                    }
                }
            }
        }
    }
}
