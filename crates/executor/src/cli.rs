use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds the maximum-sum simple path in a grid graph loaded from a matrix file.", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to PathSum.toml when present.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Matrix file of semicolon-separated vertex values
    #[clap(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the DOT export of the graph
    #[clap(short, long)]
    pub dot: Option<PathBuf>,

    /// Width of the square grid (the graph gets width * width vertices)
    #[clap(short = 'n', long)]
    pub grid_size: Option<usize>,

    /// Only print the best path, not every path found
    #[clap(long)]
    pub best_only: bool,

    /// Enable debug logging on stderr
    #[clap(short, long)]
    pub verbose: bool,
}
