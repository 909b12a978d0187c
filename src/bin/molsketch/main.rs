use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use molsketch::{build_molecule, LayoutParams, Mol, PlanarLayout, Simulate, SpatialLayout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, Level};

mod cli;
mod snapshot;
mod svg;

use cli::{Cli, OutputFormat};
use snapshot::Snapshot;

/// Frame time handed to each layout step.
const FRAME_TIME: f64 = 1.0 / 60.0;

fn main() -> ExitCode {
    let cli = cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut mol = build_molecule(cli.kind, &cli.formula, [0.0, 0.0])
        .with_context(|| format!("Failed to build {} formula '{}'", cli.kind, cli.formula))?;

    let depth = simulate(cli, &mut mol);

    let out = match cli.format {
        OutputFormat::Svg => svg::render(&mol),
        OutputFormat::Json => {
            let snapshot = Snapshot::new(
                &cli.formula,
                cli.kind.to_string(),
                cli.steps,
                &mol,
                depth.as_deref(),
            );
            let mut json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize molecule")?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, out)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(out.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

/// Run the requested number of frames. Returns per-atom depth for spatial
/// layouts.
fn simulate(cli: &Cli, mol: &mut Mol) -> Option<Vec<f64>> {
    if cli.spatial {
        let seed = cli.seed.unwrap_or_else(rand::random);
        debug!(seed, "spatial layout");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut layout = SpatialLayout::new(mol, LayoutParams::spatial(), &mut rng);
        for _ in 0..cli.steps {
            layout.step(mol, FRAME_TIME);
        }
        Some(layout.positions(mol).into_iter().map(|p| p[2]).collect())
    } else {
        let mut layout = PlanarLayout::new(LayoutParams::planar());
        for _ in 0..cli.steps {
            layout.step(mol, FRAME_TIME);
        }
        None
    }
}

fn print_error(err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "error: {err}");
    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "  caused by: {cause}");
    }
}
