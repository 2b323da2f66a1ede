pub mod enumerator;
pub mod graph;
pub mod grid;
pub mod outcome;
pub mod path;
pub mod traits;

pub use enumerator::ExhaustiveSearch;
pub use graph::Graph;
pub use outcome::{FoundPath, SearchOutcome};
pub use path::Path;
