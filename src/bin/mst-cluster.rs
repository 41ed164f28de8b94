//! mst-cluster CLI
//!
//! Reads `n k` and `n` points from the input file, clusters them into `k`
//! groups by cutting the minimum spanning tree, and writes one center per line
//! followed by the largest cluster spread.
//!
//! Exit codes:
//! - 0: success
//! - 1: input unavailable or output not writable
//! - 2: malformed input

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mst_cluster::io;
use mst_cluster::{CenterKind, MstCut, Result};

/// Max-spacing k-clustering of 2D points
#[derive(Parser, Debug)]
#[command(name = "mst-cluster")]
#[command(version)]
#[command(about = "Cluster 2D points by cutting their minimum spanning tree")]
struct Cli {
    /// Input file: `n k` followed by `n` coordinate pairs
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Output file, written only when the run succeeds
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Center rule: medoid or centroid
    #[arg(long, default_value_t = CenterKind::Medoid)]
    center: CenterKind,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let problem = io::read_problem(&cli.input)?;
    let fit = MstCut::new(problem.k)
        .with_center(cli.center)
        .fit(&problem.points)?;
    io::write_result(&cli.output, &fit)?;

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        clusters = fit.clusters().len(),
        delta_max = fit.delta_max(),
        "wrote clustering"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mst-cluster: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
