use std::collections::HashSet;
use std::fmt;

use super::graph::Graph;
use common::error::Error;
use common::types::{VertexId, VertexValue};

/// Ordered sequence of vertex indices; insertion order is traversal order.
///
/// The search grows one `Path` with `push` and shrinks it with `truncate_last`
/// while backtracking. Anything handed out of the search is a `snapshot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty path with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends `vertex` at the end of the path.
    pub fn push(&mut self, vertex: VertexId) {
        self.vertices.push(vertex);
    }

    /// Removes and returns the last vertex.
    ///
    /// # Errors
    /// Returns `Error::EmptyPath` when there is nothing to remove.
    pub fn truncate_last(&mut self) -> Result<VertexId, Error> {
        self.vertices.pop().ok_or(Error::EmptyPath)
    }

    /// Independent copy with its own storage, sized to the current length.
    pub fn snapshot(&self) -> Path {
        Path {
            vertices: self.vertices.as_slice().to_vec(),
        }
    }

    /// Sum of the vertex values along the path, looked up in `graph`.
    ///
    /// # Errors
    /// `Error::MissingVertex` for an empty slot, `Error::SumOverflow` when the
    /// total does not fit.
    pub fn sum(&self, graph: &Graph) -> Result<VertexValue, Error> {
        self.vertices.iter().try_fold(0 as VertexValue, |acc, &idx| {
            acc.checked_add(graph.vertex_value(idx)?)
                .ok_or(Error::SumOverflow(idx))
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn first(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// True when no vertex index appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(*v))
    }

    /// True when every consecutive pair is joined by an edge of `graph`.
    pub fn is_connected_in(&self, graph: &Graph) -> bool {
        self.vertices
            .windows(2)
            .all(|pair| graph.has_edge(pair[0], pair[1]).unwrap_or(false))
    }
}

impl From<Vec<VertexId>> for Path {
    fn from(vertices: Vec<VertexId>) -> Self {
        Path { vertices }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
