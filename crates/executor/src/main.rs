pub mod cli;
pub mod config;
pub mod dot_writer;
pub mod error;
pub mod loader;
pub mod report;

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::Error;
use path_sum_core::ExhaustiveSearch;
use path_sum_core::traits::PathEnumerator;
use report::Reporter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "path search aborted");
            ExitCode::FAILURE
        }
    }
}

/// Load, wire, export, enumerate, report.
///
/// A missing matrix file and a failed DOT export are logged and the run goes
/// on; configuration and index violations end it.
fn run(cli: &Cli) -> Result<(), Error> {
    let config = config::load_config(cli.config.as_deref())?.with_overrides(cli);
    config.validate()?;

    info!(
        grid = config.grid.size,
        input = %config.input.matrix_path.display(),
        "building grid graph"
    );
    let (graph, wiring) = loader::build_grid_graph(&config.input.matrix_path, config.grid.size)?;
    info!(
        vertices = graph.vertex_count(),
        edges = wiring.added,
        "graph ready"
    );

    match dot_writer::save_dot(&graph, &config.output.dot_path) {
        Ok(()) => info!(path = %config.output.dot_path.display(), "graph exported"),
        Err(e) => warn!(error = %e, "graph export failed, continuing"),
    }

    let mut search = ExhaustiveSearch::new();
    let outcome = search.enumerate(&graph)?;
    info!(
        paths = outcome.len(),
        max_sum = ?outcome.max_sum(),
        "enumeration complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(&graph, config.output.list_paths).write_report(&outcome, &mut out)?;

    Ok(())
}

/// Diagnostics go to stderr so the report on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
