//! Reading color scale definitions from HJSON files.
//!
//! A definition file holds either an array of scales or an object with
//! a `scales` array.  Each scale reads
//!
//! ```text
//! {
//!   name: ocean
//!   description: A color map of blues.
//!   space: oklch                 // space of the colors below
//!   interpolation_space: oklab   // optional, defaults to oklab
//!   sample_count: 21             // optional
//!   points: [
//!     [0.0, [0.9, 0.05, 230]]
//!     [1.0, "#1B3A6B"]           // sRGB, converted to `space`
//!   ]
//! }
//! ```

use std::{fs::File, path::Path};
use anyhow::{anyhow, bail, Context, Result};
use serde_hjson::Value;
use color_ramp::{convert_one, load, scales::DEFAULT_SAMPLE_COUNT,
                 srgb_of_hex, ColorScaleSpec, ColorSpace, ScaleDef};

pub(crate) fn read_definitions(path: &Path) -> Result<Vec<ColorScaleSpec>> {
    let fh = File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let json: Value = serde_hjson::from_reader(fh)
        .with_context(|| format!("{} is not valid HJSON", path.display()))?;
    let specs = parse_definitions(&json)
        .with_context(|| format!("in {}", path.display()))?;
    tracing::info!(path = %path.display(), scales = specs.len(),
                   "read definitions");
    Ok(specs)
}

pub(crate) fn parse_definitions(json: &Value) -> Result<Vec<ColorScaleSpec>> {
    let scales = match json {
        Value::Array(a) => a,
        Value::Object(m) => match m.get("scales") {
            Some(Value::Array(a)) => a,
            _ => bail!("expected a “scales” array"),
        },
        _ => bail!("expected an array of scales"),
    };
    scales.iter().enumerate()
        .map(|(i, s)| parse_scale(s).with_context(|| format!("scale #{i}")))
        .collect()
}

fn string_field<'a>(v: Option<&'a Value>, key: &str) -> Result<&'a str> {
    match v {
        Some(Value::String(s)) => Ok(s),
        Some(_) => bail!("“{key}” must be a string"),
        None => bail!("missing “{key}”"),
    }
}

fn parse_scale(v: &Value) -> Result<ColorScaleSpec> {
    let Value::Object(m) = v else { bail!("a scale must be an object") };
    let name = string_field(m.get("name"), "name")?.to_string();
    let description = match m.get("description") {
        Some(d) => string_field(Some(d), "description")?.to_string(),
        None => String::new(),
    };
    let space: ColorSpace = string_field(m.get("space"), "space")?.parse()?;
    let interpolation_space = match m.get("interpolation_space") {
        Some(s) => string_field(Some(s), "interpolation_space")?.parse()?,
        None => ColorSpace::Oklab,
    };
    let sample_count = match m.get("sample_count") {
        Some(n) => n.as_u64().and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| anyhow!("“sample_count” must be a non-negative \
                                    integer"))?,
        None => DEFAULT_SAMPLE_COUNT,
    };
    let points = match m.get("points") {
        Some(Value::Array(a)) => a.iter().enumerate()
            .map(|(i, p)| parse_point(p, space)
                 .with_context(|| format!("point #{i}")))
            .collect::<Result<Vec<_>>>()?,
        _ => bail!("missing “points” array"),
    };
    let spec = load(ScaleDef { name: name.clone(), description, points,
                               space, interpolation_space, sample_count })
        .with_context(|| format!("scale “{name}”"))?;
    Ok(spec)
}

/// A point is `[position, color]` or `{position, color}` where the color
/// is an array of numbers in `space` or a `#RRGGBB` sRGB string.
fn parse_point(v: &Value, space: ColorSpace) -> Result<(f64, Vec<f64>)> {
    let (position, color) = match v {
        Value::Array(a) if a.len() == 2 => (&a[0], &a[1]),
        Value::Object(m) => match (m.get("position"), m.get("color")) {
            (Some(p), Some(c)) => (p, c),
            _ => bail!("a point needs a “position” and a “color”"),
        },
        _ => bail!("a point must be [position, color]"),
    };
    let position = position.as_f64()
        .ok_or_else(|| anyhow!("position is not a number"))?;
    let color = match color {
        Value::String(s) => {
            let c = convert_one(srgb_of_hex(s)?, ColorSpace::Srgb, space)?;
            c.to_vec()
        }
        Value::Array(a) => a.iter()
            .map(|x| x.as_f64()
                 .ok_or_else(|| anyhow!("color component is not a number")))
            .collect::<Result<Vec<_>>>()?,
        _ => bail!("a color is an array of numbers or a #RRGGBB string"),
    };
    Ok((position, color))
}
