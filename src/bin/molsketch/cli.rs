use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use molsketch::FormulaKind;

#[derive(Parser)]
#[command(
    name = "molsketch",
    about = "Sketch a molecule from its formula and relax the layout",
    version
)]
pub struct Cli {
    /// Formula to build, e.g. SO2, CH3CH2OH or CH3C(CH3)O
    pub formula: String,

    /// How the formula is written
    #[arg(short, long, value_name = "KIND", default_value_t = FormulaKind::Molecular)]
    pub kind: FormulaKind,

    /// Number of layout frames to simulate
    #[arg(short = 'n', long, value_name = "N", default_value_t = 200)]
    pub steps: usize,

    /// Relax in three dimensions instead of the plane
    #[arg(long)]
    pub spatial: bool,

    /// Seed for the initial depth offsets (with --spatial)
    #[arg(long, value_name = "S")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", default_value = "svg")]
    pub format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log bonding and layout progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Rendered drawing
    Svg,
    /// Atom and bond records
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
