//! Generate color scale tables, from the built-in catalogue or from
//! HJSON definition files, as Rust source or JSON.

use std::{fs::File,
          io::{self, BufWriter, Write},
          path::{Path, PathBuf}};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use color_ramp::{generate, scales, ColorScaleSpec, ColorScaleTable};

mod def;
mod emit;

#[derive(Parser)]
#[command(name = "color-ramp-tools")]
#[command(version, about = "Generate perceptual color scale tables",
          long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in color scales
    List,
    /// Print the table of one color scale
    Show {
        /// Name of the scale
        name: String,
        /// Definition file (HJSON); the built-in scales if absent
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Override the number of samples
        #[arg(short, long)]
        samples: Option<usize>,
    },
    /// Generate the tables of all scales
    Gen {
        /// Definition file (HJSON); the built-in scales if absent
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file; standard output if absent
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Rust)]
        format: Format,
        /// Override the number of samples
        #[arg(short, long)]
        samples: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Rust,
    Json,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

/// The specifications read from `input` or, if absent, those of the
/// built-in scales.
fn load_specs(input: Option<&Path>, samples: Option<usize>)
              -> Result<Vec<ColorScaleSpec>> {
    let mut specs = match input {
        Some(path) => def::read_definitions(path)?,
        None => scales::all().map(|s| s.spec().clone()).collect(),
    };
    if let Some(n) = samples {
        for s in &mut specs {
            s.sample_count = n;
        }
    }
    Ok(specs)
}

fn generate_all(specs: &[ColorScaleSpec]) -> Result<Vec<ColorScaleTable>> {
    specs.par_iter()
        .map(|s| generate(s).with_context(|| format!("scale “{}”", s.name)))
        .collect()
}

fn output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let fh = File::create(p)
                .with_context(|| format!("cannot create {}", p.display()))?;
            Box::new(BufWriter::new(fh))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::List => {
            let mut fh = output(None)?;
            for s in scales::all() {
                writeln!(fh, "{:<21} {:<7} {:<6} {}", s.name(),
                         format!("{:?}", s.typ()),
                         s.spec().interpolation_space.name(),
                         s.description())?;
            }
            fh.flush()?;
        }
        Commands::Show { name, input, samples } => {
            let specs = load_specs(input.as_deref(), samples)?;
            let spec = specs.iter().find(|s| s.name == name)
                .ok_or_else(|| anyhow!("no color scale named “{name}”"))?;
            let table = generate(spec)?;
            let mut fh = output(None)?;
            for (v, c) in table.iter() {
                writeln!(fh, "{v:.4}  {c}")?;
            }
            fh.flush()?;
        }
        Commands::Gen { input, output: path, format, samples } => {
            let specs = load_specs(input.as_deref(), samples)?;
            let tables = generate_all(&specs)?;
            info!(scales = tables.len(), ?format, "generated");
            let mut fh = output(path.as_deref())?;
            match format {
                Format::Rust => emit::write_rust(&mut fh, &tables,
                                                 env!("CARGO_PKG_NAME"))?,
                Format::Json => emit::write_json(&mut fh, &tables)?,
            }
            fh.flush()?;
        }
    }
    Ok(())
}
