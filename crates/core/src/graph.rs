use common::error::Error;
use common::types::{Edge, VertexId, VertexValue};

/// Directed graph over a fixed number of vertex slots.
///
/// Storage is index based:
/// - `values[i]` -> value of the vertex at slot `i`, `None` when the slot is empty
/// - `adjacency[src * num_vertices + dst]` -> presence of the edge `src -> dst`
///
/// The vertex count is fixed at construction. Edges are unweighted and boolean,
/// so adding the same edge twice leaves a single edge behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    values: Vec<Option<VertexValue>>,
    adjacency: Vec<bool>,
}

impl Graph {
    /// Creates a graph with `num_vertices` empty slots and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            values: vec![None; num_vertices],
            adjacency: vec![false; num_vertices * num_vertices],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of slots currently holding a vertex.
    pub fn vertex_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|&&present| present).count()
    }

    /// Sets or overwrites the vertex at `index`.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` if `index >= num_vertices`.
    pub fn add_vertex(&mut self, index: VertexId, value: VertexValue) -> Result<(), Error> {
        self.check_index(index)?;
        self.values[index] = Some(value);
        Ok(())
    }

    /// Records the edge `source -> destination`.
    ///
    /// Only the destination has to hold a vertex; the source slot may still be empty.
    ///
    /// # Errors
    /// - `Error::IndexOutOfRange` if either index is outside the graph.
    /// - `Error::MissingDestinationVertex` if no vertex exists at `destination`.
    ///   The edge matrix is left untouched in that case.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId) -> Result<(), Error> {
        self.check_index(source)?;
        self.check_index(destination)?;

        if self.values[destination].is_none() {
            return Err(Error::MissingDestinationVertex(destination));
        }

        let slot = self.slot(source, destination);
        self.adjacency[slot] = true;
        Ok(())
    }

    /// Removes the vertex at `index` together with every edge leaving or entering it.
    ///
    /// Returns `Ok(false)` and leaves the graph unchanged when the slot is already empty.
    pub fn remove_vertex(&mut self, index: VertexId) -> Result<bool, Error> {
        self.check_index(index)?;

        if self.values[index].take().is_none() {
            return Ok(false);
        }

        for other in 0..self.num_vertices {
            let outgoing = self.slot(index, other);
            let incoming = self.slot(other, index);
            self.adjacency[outgoing] = false;
            self.adjacency[incoming] = false;
        }

        Ok(true)
    }

    /// Removes the edge `source -> destination`, returning whether it was present.
    pub fn remove_edge(&mut self, source: VertexId, destination: VertexId) -> Result<bool, Error> {
        self.check_index(source)?;
        self.check_index(destination)?;

        let slot = self.slot(source, destination);
        Ok(std::mem::replace(&mut self.adjacency[slot], false))
    }

    pub fn has_edge(&self, source: VertexId, destination: VertexId) -> Result<bool, Error> {
        self.check_index(source)?;
        self.check_index(destination)?;
        Ok(self.adjacency[self.slot(source, destination)])
    }

    pub fn has_vertex(&self, index: VertexId) -> bool {
        matches!(self.values.get(index), Some(Some(_)))
    }

    /// Returns the value stored at `index`.
    ///
    /// # Errors
    /// - `Error::IndexOutOfRange` if `index >= num_vertices`.
    /// - `Error::MissingVertex` if the slot is empty.
    pub fn vertex_value(&self, index: VertexId) -> Result<VertexValue, Error> {
        self.check_index(index)?;
        self.values[index].ok_or(Error::MissingVertex(index))
    }

    /// Outgoing neighbours of `source` in ascending index order.
    ///
    /// An out-of-range `source` has no neighbours.
    pub fn neighbors(&self, source: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let row: &[bool] = if source < self.num_vertices {
            let start = source * self.num_vertices;
            &self.adjacency[start..start + self.num_vertices]
        } else {
            &[]
        };

        row.iter()
            .enumerate()
            .filter_map(|(dst, &present)| present.then_some(dst))
    }

    /// Every present edge, row-major (source ascending, then destination ascending).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_vertices).flat_map(move |src| self.neighbors(src).map(move |dst| (src, dst)))
    }

    /// Every populated slot as `(index, value)`, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, VertexValue)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| value.map(|v| (idx, v)))
    }

    fn check_index(&self, index: VertexId) -> Result<(), Error> {
        if index < self.num_vertices {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.num_vertices,
            })
        }
    }

    #[inline]
    fn slot(&self, source: VertexId, destination: VertexId) -> usize {
        source * self.num_vertices + destination
    }
}
