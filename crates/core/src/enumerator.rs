use super::graph::Graph;
use super::outcome::SearchOutcome;
use super::path::Path;
use super::traits::PathEnumerator;
use common::error::Error;
use common::types::{VertexId, VertexValue};

/// Exhaustive depth-first enumeration of simple paths with backtracking.
///
/// One `visited` array and one path buffer are reused for every pair the
/// driver searches. Each recursive call undoes its own mark and push before
/// returning, so both are back to their initial state once a search ends.
/// [`ExhaustiveSearch::is_reset`] exposes that invariant.
///
/// The only pruning is the visited set; the search is exponential in the
/// number of simple paths and meant for small graphs.
#[derive(Debug, Default)]
pub struct ExhaustiveSearch {
    visited: Vec<bool>,
    current: Path,
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no vertex is marked visited and the path buffer is empty.
    pub fn is_reset(&self) -> bool {
        self.current.is_empty() && self.visited.iter().all(|&v| !v)
    }

    /// Enumerates every simple path from `start` to `end`, recording each one in `outcome`.
    ///
    /// An empty `start` slot yields no paths. With `start == end` the only path is the
    /// single vertex itself.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` if either endpoint lies outside the graph.
    pub fn search_pair(
        &mut self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        outcome: &mut SearchOutcome,
    ) -> Result<(), Error> {
        let num_vertices = graph.num_vertices();
        for index in [start, end] {
            if index >= num_vertices {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: num_vertices,
                });
            }
        }

        self.prepare(num_vertices);

        if !graph.has_vertex(start) {
            return Ok(());
        }

        self.visit(graph, start, end, 0, outcome)
    }

    /// Sizes the shared state for a graph of `num_vertices` slots.
    fn prepare(&mut self, num_vertices: usize) {
        if self.visited.len() != num_vertices {
            self.visited = vec![false; num_vertices];
            self.current = Path::with_capacity(num_vertices);
        }
    }

    /// Enter `vertex`, explore, then undo the mark and the push.
    fn visit(
        &mut self,
        graph: &Graph,
        vertex: VertexId,
        end: VertexId,
        sum: VertexValue,
        outcome: &mut SearchOutcome,
    ) -> Result<(), Error> {
        self.visited[vertex] = true;
        self.current.push(vertex);

        let result = self.expand(graph, vertex, end, sum, outcome);

        self.current.truncate_last()?;
        self.visited[vertex] = false;

        result
    }

    fn expand(
        &mut self,
        graph: &Graph,
        vertex: VertexId,
        end: VertexId,
        sum: VertexValue,
        outcome: &mut SearchOutcome,
    ) -> Result<(), Error> {
        let sum = sum
            .checked_add(graph.vertex_value(vertex)?)
            .ok_or(Error::SumOverflow(vertex))?;

        if vertex == end {
            outcome.record(self.current.snapshot(), sum);
            return Ok(());
        }

        for next in graph.neighbors(vertex) {
            if !self.visited[next] {
                self.visit(graph, next, end, sum, outcome)?;
            }
        }

        Ok(())
    }
}

impl PathEnumerator for ExhaustiveSearch {
    /// Runs one search per ordered pair, `i` ascending then `j` ascending.
    fn enumerate(&mut self, graph: &Graph) -> Result<SearchOutcome, Error> {
        let num_vertices = graph.num_vertices();
        let mut outcome = SearchOutcome::new();

        for start in 0..num_vertices {
            if !graph.has_vertex(start) {
                continue;
            }
            for end in (0..num_vertices).filter(|&end| end != start) {
                self.search_pair(graph, start, end, &mut outcome)?;
            }
        }

        Ok(outcome)
    }
}
