use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_ramp::{convert_one, generate, hex, quantize, scales, srgb_of_hex,
                 ColorScaleTable, ColorSpace, ScaleType};

type Err = Box<dyn Error>;

/// Oklab lightness of the sRGB color `c`, as a gray CSS color.
fn gray_of_hex(c: &str) -> Result<String, Err> {
    let lab = convert_one(srgb_of_hex(c)?, ColorSpace::Srgb,
                          ColorSpace::Oklab)?;
    let gray = convert_one([lab[0], 0., 0.], ColorSpace::Oklab,
                           ColorSpace::Srgb)?;
    Ok(hex(quantize(gray)))
}

fn table_of_colors(fh: &mut impl Write, table: &ColorScaleTable,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (_, c) in table.iter() {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for (_, c) in table.iter() {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 gray_of_hex(c)?)?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn scale(fh: &mut impl Write, s: scales::Scale) -> Result<(), Err> {
    let table = s.generate()?;
    let comment = format!("{} ({} colors, {})", s.name(), table.len(),
                          s.spec().interpolation_space);
    table_of_colors(fh, &table, 40, &comment)?;
    let mut fine = s.spec().clone();
    fine.sample_count = 150;
    let fine = generate(&fine)?;
    table_of_colors(fh, &fine, 2, &format!("{} (150 samples)", s.name()))?;
    table_of_colors(fh, &fine.inverted(), 2,
                    &format!("{} (inverted)", s.name()))?;
    Ok(())
}


fn main() -> Result<(), Err> {
    let program = env::args().next().unwrap_or_default();
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color_ramp: test {program}</title>\n\
                  </head>\n\
                  <body>")?;
    for (title, typ) in [("Sequential", ScaleType::Seq),
                         ("Diverging", ScaleType::Div),
                         ("Cyclic", ScaleType::Cyclic)] {
        writeln!(fh, "<h3>{title} scales</h3>")?;
        for s in scales::find().typ(typ).find() {
            scale(&mut fh, s)?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
