use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::Error;
use common::types::VertexValue;
use path_sum_core::Graph;
use path_sum_core::grid::{self, GridWiring};

/// Reads a matrix of `;`-separated integers into consecutive vertex slots.
///
/// Row boundaries carry no meaning: the tokens are flattened row-major and the
/// n-th token becomes vertex `n`.
pub struct MatrixLoader {
    path: PathBuf,
}

impl MatrixLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MatrixLoader { path: path.into() }
    }

    /// Opens the file and returns every token value in order.
    ///
    /// # Errors
    /// `Error::FileNotFound` when the file does not exist, `Error::MatrixRead`
    /// when the reader fails part way.
    pub fn read_values(&self) -> Result<Vec<VertexValue>, Error> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(self.path.clone()),
            _ => Error::IoError(e),
        })?;

        parse_values(file)
    }

    /// Loads the values into `graph`, returning how many vertices were set.
    ///
    /// # Errors
    /// Besides read failures, `Error::GraphError` when the file holds more
    /// values than the graph has slots.
    pub fn load_into(&self, graph: &mut Graph) -> Result<usize, Error> {
        let values = self.read_values()?;

        for (index, value) in values.iter().enumerate() {
            graph.add_vertex(index, *value)?;
        }

        debug!(path = %self.path.display(), vertices = values.len(), "matrix loaded");
        Ok(values.len())
    }
}

/// Parses `;`-separated records from `reader`, skipping empty tokens.
///
/// Quotes carry no meaning and bytes are read raw, so a malformed token
/// (including one that is not valid UTF-8) becomes zero instead of failing the load.
pub fn parse_values<R: Read>(reader: R) -> Result<Vec<VertexValue>, Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(reader);

    let mut values = Vec::new();

    for result in rdr.byte_records() {
        let record = result?;
        values.extend(
            record
                .iter()
                .filter(|token| !token.trim_ascii().is_empty())
                .map(parse_lenient),
        );
    }
    Ok(values)
}

/// Integer parsing with C `atoi` semantics.
///
/// Leading whitespace and an optional sign are accepted, then digits are read
/// until the first non-digit. A token with no leading digits is zero. The
/// result is clamped to the `i32` range, so sums over a grid cannot leave `i64`.
pub fn parse_lenient(token: &[u8]) -> VertexValue {
    let s = token.trim_ascii_start();
    let (negative, digits) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .iter()
        .take_while(|d| d.is_ascii_digit())
        .fold(0 as VertexValue, |acc, d| {
            acc.saturating_mul(10).saturating_add((d - b'0') as VertexValue)
        });

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i32::MIN as VertexValue, i32::MAX as VertexValue)
}

/// Builds an `n x n` graph from the matrix at `path` and applies the grid connection rule.
///
/// A missing matrix file is logged and not fatal: the graph is wired with
/// whatever vertices it holds, which is none in that case.
pub fn build_grid_graph(path: &Path, grid_size: usize) -> Result<(Graph, GridWiring), Error> {
    let mut graph = Graph::new(grid_size * grid_size);
    let loader = MatrixLoader::new(path);

    match loader.load_into(&mut graph) {
        Ok(count) if count < graph.num_vertices() => warn!(
            path = %path.display(),
            loaded = count,
            expected = graph.num_vertices(),
            "matrix has fewer values than grid cells"
        ),
        Ok(_) => {}
        Err(Error::FileNotFound(missing)) => {
            warn!(path = %missing.display(), "matrix file not found, continuing without vertices");
        }
        Err(e) => return Err(e),
    }

    let wiring = grid::connect_grid(&mut graph, grid_size)?;
    debug!(added = wiring.added, skipped = wiring.skipped, "grid connection rules applied");

    Ok((graph, wiring))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_MATRIX_CONTENT: &str = "\
1;2;3
4;5;6
7;8;9
";

    fn temp_matrix(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write mock content");
        temp_file
    }

    #[test]
    fn test_read_values_success() {
        let temp_file = temp_matrix(MOCK_MATRIX_CONTENT);
        let loader = MatrixLoader::new(temp_file.path());

        let result = loader.read_values();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_read_values_file_not_found() {
        let loader = MatrixLoader::new("non_existent_matrix.txt");
        let result = loader.read_values();

        match result {
            Err(Error::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("non_existent_matrix.txt"))
            }
            other => panic!("Expected FileNotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_rows_of_different_length_are_flattened() {
        let values = parse_values("1;2\n3;4;5\n\n6\n".as_bytes()).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let values = parse_values("1;;2;\n;3\n".as_bytes()).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_malformed_tokens_parse_as_zero() {
        let values = parse_values("12x; abc;-7;+4\n".as_bytes()).unwrap();
        assert_eq!(values, vec![12, 0, -7, 4]);
    }

    #[test]
    fn test_parse_lenient_edge_cases() {
        assert_eq!(parse_lenient(b"  42"), 42);
        assert_eq!(parse_lenient(b"-"), 0);
        assert_eq!(parse_lenient(b"3 4"), 3);
    }

    #[test]
    fn test_parse_lenient_clamps_to_int_range() {
        assert_eq!(parse_lenient(b"99999999999999999999"), i32::MAX as VertexValue);
        assert_eq!(parse_lenient(b"-99999999999999999999"), i32::MIN as VertexValue);
        assert_eq!(parse_lenient(b"2147483647"), 2147483647);
    }

    #[test]
    fn test_quotes_do_not_group_tokens() {
        let values = parse_values("1;\"2;3\";4\n".as_bytes()).unwrap();
        assert_eq!(values, vec![1, 0, 3, 4]);
    }

    #[test]
    fn test_invalid_utf8_token_parses_as_zero() {
        let values = parse_values(&b"1;\xff;3\n"[..]).unwrap();
        assert_eq!(values, vec![1, 0, 3]);
    }

    #[test]
    fn test_huge_values_do_not_break_the_search() {
        use path_sum_core::ExhaustiveSearch;
        use path_sum_core::traits::PathEnumerator;

        let temp_file = temp_matrix("99999999999999999999;1\n1;1\n");
        let (graph, _) = build_grid_graph(temp_file.path(), 2).unwrap();

        let outcome = ExhaustiveSearch::new().enumerate(&graph).unwrap();

        assert_eq!(outcome.max_sum(), Some(i32::MAX as VertexValue + 2));
    }

    #[test]
    fn test_load_into_rejects_overflowing_matrix() {
        let temp_file = temp_matrix("1;2;3;4;5\n");
        let mut graph = Graph::new(4);

        let result = MatrixLoader::new(temp_file.path()).load_into(&mut graph);

        assert!(matches!(result, Err(Error::GraphError(_))));
    }

    #[test]
    fn test_build_grid_graph_wires_loaded_values() {
        let temp_file = temp_matrix("1;2\n3;4\n");

        let (graph, wiring) = build_grid_graph(temp_file.path(), 2).unwrap();

        assert_eq!(graph.vertex_value(3).unwrap(), 4);
        assert_eq!(wiring.added, 4);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_build_grid_graph_tolerates_missing_file() {
        let (graph, wiring) = build_grid_graph(Path::new("non_existent_matrix.txt"), 3).unwrap();

        assert_eq!(graph.num_vertices(), 9);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(wiring.added, 0);
        assert_eq!(wiring.skipped, 12);
    }
}
