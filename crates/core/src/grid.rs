use super::graph::Graph;
use common::error::Error;

/// Result of wiring a grid: how many edges were recorded and how many were
/// declined because their destination slot held no vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridWiring {
    pub added: usize,
    pub skipped: usize,
}

/// Connects a `width x width` grid laid out row-major in `graph`.
///
/// Vertex `row * width + col` gets an edge to its right neighbour when
/// `col + 1 < width` and to its bottom neighbour when `row + 1 < width`.
/// No diagonals and no wraparound, so the result is acyclic.
///
/// # Errors
/// Returns `Error::IndexOutOfRange` if the graph has fewer than `width * width` slots.
pub fn connect_grid(graph: &mut Graph, width: usize) -> Result<GridWiring, Error> {
    let cells = width.saturating_mul(width);
    if cells > graph.num_vertices() {
        return Err(Error::IndexOutOfRange {
            index: cells - 1,
            len: graph.num_vertices(),
        });
    }

    let mut wiring = GridWiring::default();

    for row in 0..width {
        for col in 0..width {
            let current = row * width + col;

            if col + 1 < width {
                wiring.apply(graph.add_edge(current, current + 1))?;
            }
            if row + 1 < width {
                wiring.apply(graph.add_edge(current, current + width))?;
            }
        }
    }

    Ok(wiring)
}

impl GridWiring {
    fn apply(&mut self, result: Result<(), Error>) -> Result<(), Error> {
        match result {
            Ok(()) => self.added += 1,
            Err(Error::MissingDestinationVertex(_)) => self.skipped += 1,
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
