//! Writing generated tables as Rust source or JSON.

use std::io::{self, Write};
use serde_json::{json, Value};
use color_ramp::ColorScaleTable;

/// Name of the Rust constant holding the table of the scale `name`.
fn const_name(name: &str) -> String {
    let mut id: String = name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() }
                 else { '_' })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}

/// Write a Rust module with one `pub const` per table and an `ALL`
/// constant listing them by name.
pub(crate) fn write_rust(fh: &mut impl Write, tables: &[ColorScaleTable],
                         generator: &str) -> io::Result<()> {
    writeln!(fh, "// Written by {generator}\n\
                  // Number of color scales: {}",
             tables.len())?;
    for t in tables {
        writeln!(fh)?;
        for line in t.description().lines() {
            writeln!(fh, "/// {line}")?;
        }
        writeln!(fh, "pub const {}: [(f64, &str); {}] = [",
                 const_name(t.name()), t.len())?;
        for (v, c) in t.iter() {
            writeln!(fh, "    ({v:?}, \"{c}\"),")?;
        }
        writeln!(fh, "];")?;
    }
    writeln!(fh, "\npub const ALL: [(&str, &[(f64, &str)]); {}] = [",
             tables.len())?;
    for t in tables {
        writeln!(fh, "    ({:?}, &{}),", t.name(), const_name(t.name()))?;
    }
    writeln!(fh, "];")?;
    Ok(())
}

fn json_of_table(t: &ColorScaleTable) -> Value {
    let color_scale: Vec<_> = t.iter().map(|(v, c)| json!([v, c])).collect();
    json!({
        "name": t.name(),
        "description": t.description(),
        "color_scale": color_scale,
    })
}

/// Write the tables as a JSON array of
/// `{name, description, color_scale: [[value, hex], ...]}` objects.
pub(crate) fn write_json(fh: &mut impl Write, tables: &[ColorScaleTable])
                         -> io::Result<()> {
    let all: Vec<_> = tables.iter().map(json_of_table).collect();
    serde_json::to_writer_pretty(&mut *fh, &all)?;
    writeln!(fh)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use color_ramp::{generate, ColorScaleSpec, ColorSpace, ControlPoint};

    fn gray() -> ColorScaleTable {
        let spec = ColorScaleSpec {
            name: "dark-gray".into(),
            description: "Black to white.\nIn sRGB.".into(),
            points: vec![ControlPoint::new(0., [0., 0., 0.]),
                         ControlPoint::new(1., [1., 1., 1.])],
            space: ColorSpace::Srgb,
            interpolation_space: ColorSpace::Srgb,
            sample_count: 3,
        };
        generate(&spec).unwrap()
    }

    #[test]
    fn identifiers() {
        assert_eq!(const_name("autumn"), "AUTUMN");
        assert_eq!(const_name("blue-red white"), "BLUE_RED_WHITE");
        assert_eq!(const_name("3d"), "_3D");
        assert_eq!(const_name(""), "_");
    }

    #[test]
    fn rust_module() {
        let mut out = Vec::new();
        write_rust(&mut out, &[gray()], "test").unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("// Written by test\n"));
        assert!(out.contains("/// Black to white.\n/// In sRGB.\n\
                              pub const DARK_GRAY: [(f64, &str); 3] = [\n    \
                              (0.0, \"#000000\"),\n    \
                              (0.5, \"#808080\"),\n    \
                              (1.0, \"#FFFFFF\"),\n];\n"));
        assert!(out.contains("pub const ALL: [(&str, &[(f64, &str)]); 1] = [\n    \
                              (\"dark-gray\", &DARK_GRAY),\n];\n"));
    }

    #[test]
    fn json_array() {
        let mut out = Vec::new();
        write_json(&mut out, &[gray(), gray().inverted()]).unwrap();
        let v: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(2));
        assert_eq!(v[0]["name"], "dark-gray");
        assert_eq!(v[0]["description"], "Black to white.\nIn sRGB.");
        assert_eq!(v[0]["color_scale"][1], json!([0.5, "#808080"]));
        assert_eq!(v[1]["color_scale"][0], json!([0.0, "#FFFFFF"]));
    }
}
