use super::graph::Graph;
use super::outcome::SearchOutcome;
use common::error::Error;

/// Trait for strategies that enumerate paths across every ordered vertex pair.
pub trait PathEnumerator {
    /// Enumerates paths for all pairs `(i, j)` with `i != j`.
    ///
    /// Returns the collected paths together with the best one found,
    /// or `Err(e)` if the graph store rejects a lookup.
    fn enumerate(&mut self, graph: &Graph) -> Result<SearchOutcome, Error>;
}
