use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Indicates an attempt to access a vertex index that exceeds the graph size.
    IndexOutOfRange { index: usize, len: usize },

    /// An edge was declined because no vertex exists at its destination.
    MissingDestinationVertex(usize),

    /// A value was requested from an index that holds no vertex.
    MissingVertex(usize),

    /// Backtracking was attempted on a path with no elements left.
    EmptyPath,

    /// Adding the value of the given vertex overflowed the running path sum.
    SumOverflow(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => write!(
                f,
                "Vertex index {} is out of range for a graph of {} vertices.",
                index, len
            ),

            Error::MissingDestinationVertex(n) => write!(
                f,
                "Edge declined: no vertex exists at destination index {}.",
                n
            ),

            Error::MissingVertex(n) => write!(f, "No vertex is present at index {}.", n),

            Error::EmptyPath => write!(f, "Cannot backtrack: the path is already empty."),

            Error::SumOverflow(n) => write!(
                f,
                "Path sum overflowed while adding the value of vertex {}.",
                n
            ),
        }
    }
}

impl std::error::Error for Error {}
