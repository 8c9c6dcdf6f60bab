//! Command-line entry point.
//!
//! With no arguments, runs the built-in demo and prints its transcript.
//!
//! ```bash
//! u-warehouse
//! u-warehouse --scenario plant.json --format json
//! RUST_LOG=debug u-warehouse
//! ```

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_warehouse::demo::demo_warehouse;
use u_warehouse::models::Warehouse;
use u_warehouse::report::{CostSummary, Narrator};
use u_warehouse::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON scenario to simulate instead of the built-in demo.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Step-by-step transcript.
    Text,
    /// Nested cost breakdown.
    Json,
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_warehouse(args: &CliArgs) -> Result<Warehouse, Box<dyn Error>> {
    match &args.scenario {
        Some(path) => Ok(Scenario::load(path)?.build()?),
        None => Ok(demo_warehouse()?),
    }
}

fn run<W: Write>(args: &CliArgs, mut out: W) -> Result<(), Box<dyn Error>> {
    let warehouse = load_warehouse(args)?;
    info!(warehouse = %warehouse.name(), format = ?args.format, "Starting simulation");

    match args.format {
        OutputFormat::Text => {
            Narrator::new(out).simulate(&warehouse)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", CostSummary::calculate(&warehouse).to_json()?)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Runs the simulation and reports any failure on `err`.
///
/// Returns the process exit status.
fn execute<W: Write, E: Write>(args: &CliArgs, out: W, mut err: E) -> u8 {
    match run(args, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}

fn main() -> ExitCode {
    setup_tracing();
    let args = CliArgs::parse();
    ExitCode::from(execute(&args, io::stdout().lock(), io::stderr().lock()))
}
