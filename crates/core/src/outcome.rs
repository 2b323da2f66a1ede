use super::path::Path;
use common::types::{VertexId, VertexValue};

/// A completed path frozen at the moment the search reached its end vertex.
///
/// Fields:
/// - `path`: snapshot of the search path, independent of the live buffer.
/// - `sum`: vertex-value total accumulated while the path was walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath {
    pub path: Path,
    pub sum: VertexValue,
}

/// Everything one enumeration run produced.
///
/// Paths are kept in discovery order. The best path is the first one whose sum
/// strictly exceeded every sum seen before it, so ties keep the earlier path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    paths: Vec<FoundPath>,
    best: Option<usize>,
}

impl SearchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed path and updates the running maximum.
    pub fn record(&mut self, path: Path, sum: VertexValue) {
        let improves = self.max_sum().is_none_or(|max| sum > max);

        self.paths.push(FoundPath { path, sum });

        if improves {
            self.best = Some(self.paths.len() - 1);
        }
    }

    pub fn paths(&self) -> &[FoundPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The path that achieved the maximum sum, `None` if no path was found.
    pub fn best(&self) -> Option<&FoundPath> {
        self.best.map(|idx| &self.paths[idx])
    }

    /// Maximum sum over all recorded paths, `None` if no path was found.
    pub fn max_sum(&self) -> Option<VertexValue> {
        self.best().map(|found| found.sum)
    }

    /// True if an identical vertex sequence has already been recorded.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|found| &found.path == path)
    }

    /// Best recorded path running from `start` to `end`.
    pub fn best_between(&self, start: VertexId, end: VertexId) -> Option<&FoundPath> {
        self.paths
            .iter()
            .filter(|found| found.path.first() == Some(start) && found.path.last() == Some(end))
            .fold(None, |best: Option<&FoundPath>, found| match best {
                Some(current) if current.sum >= found.sum => Some(current),
                _ => Some(found),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome_has_no_best() {
        let outcome = SearchOutcome::new();

        assert!(outcome.is_empty());
        assert!(outcome.best().is_none());
        assert_eq!(outcome.max_sum(), None);
    }

    #[test]
    fn record_tracks_strict_maximum() {
        let mut outcome = SearchOutcome::new();
        outcome.record(Path::from(vec![0, 1]), 5);
        outcome.record(Path::from(vec![0, 2]), 9);
        outcome.record(Path::from(vec![1, 2]), 9);
        outcome.record(Path::from(vec![2, 3]), -4);

        assert_eq!(outcome.len(), 4);
        assert_eq!(outcome.max_sum(), Some(9));
        assert_eq!(outcome.best().unwrap().path.vertices(), &[0, 2]);
    }

    #[test]
    fn negative_sums_still_produce_a_best_path() {
        let mut outcome = SearchOutcome::new();
        outcome.record(Path::from(vec![0, 1]), -7);
        outcome.record(Path::from(vec![1, 0]), -3);

        assert_eq!(outcome.max_sum(), Some(-3));
    }

    #[test]
    fn contains_compares_vertex_sequences() {
        let mut outcome = SearchOutcome::new();
        outcome.record(Path::from(vec![0, 1, 3]), 7);

        assert!(outcome.contains(&Path::from(vec![0, 1, 3])));
        assert!(!outcome.contains(&Path::from(vec![0, 1])));
    }

    #[test]
    fn best_between_filters_by_endpoints() {
        let mut outcome = SearchOutcome::new();
        outcome.record(Path::from(vec![0, 1, 3]), 7);
        outcome.record(Path::from(vec![0, 2, 3]), 8);
        outcome.record(Path::from(vec![1, 3]), 6);

        assert_eq!(outcome.best_between(0, 3).unwrap().sum, 8);
        assert_eq!(outcome.best_between(1, 3).unwrap().sum, 6);
        assert!(outcome.best_between(1, 2).is_none());
    }
}
