/// Index of a vertex slot inside a graph (`0..num_vertices`).
pub type VertexId = usize;

/// Integer value carried by a vertex. Path sums use the same type.
pub type VertexValue = i64;

/// Directed edge as `(source, destination)`.
pub type Edge = (VertexId, VertexId);
