use std::fmt::Write as FmtWrite;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::Error;
use path_sum_core::Graph;

/// Renders `graph` as a DOT digraph.
///
/// Per vertex index ascending: a label line when the slot holds a vertex, then
/// that vertex's outgoing edges in ascending destination order.
pub fn render_dot(graph: &Graph) -> String {
    let mut out = String::from("digraph G {\n");

    for index in 0..graph.num_vertices() {
        if let Ok(value) = graph.vertex_value(index) {
            let _ = writeln!(out, "{} [label=\"{}\"];", index, value);
        }
        for dst in graph.neighbors(index) {
            let _ = writeln!(out, "{} -> {};", index, dst);
        }
    }

    out.push_str("}\n");
    out
}

/// Writes the DOT rendering of `graph` to `path`, creating or truncating it.
///
/// # Errors
/// `Error::FileWriteFailure` if the file cannot be opened, written or flushed.
pub fn save_dot(graph: &Graph, path: &Path) -> Result<(), Error> {
    let write_failure = |source: std::io::Error| Error::FileWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(write_failure)?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_dot(graph).as_bytes())
        .map_err(write_failure)?;
    writer.flush().map_err(write_failure)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_sum_core::grid::connect_grid;
    use tempfile::tempdir;

    fn small_grid() -> Graph {
        let mut graph = Graph::new(4);
        for (i, v) in [1, 2, 3, 4].into_iter().enumerate() {
            graph.add_vertex(i, v).unwrap();
        }
        connect_grid(&mut graph, 2).unwrap();
        graph
    }

    #[test]
    fn render_lists_labels_then_edges_per_vertex() {
        let expected = "\
digraph G {
0 [label=\"1\"];
0 -> 1;
0 -> 2;
1 [label=\"2\"];
1 -> 3;
2 [label=\"3\"];
2 -> 3;
3 [label=\"4\"];
}
";
        assert_eq!(render_dot(&small_grid()), expected);
    }

    #[test]
    fn render_skips_labels_for_empty_slots() {
        let mut graph = Graph::new(2);
        graph.add_vertex(1, 9).unwrap();
        graph.add_edge(0, 1).unwrap();

        assert_eq!(render_dot(&graph), "digraph G {\n0 -> 1;\n1 [label=\"9\"];\n}\n");
    }

    #[test]
    fn save_writes_the_rendering() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("graph.dot");
        let graph = small_grid();

        save_dot(&graph, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_dot(&graph));
    }

    #[test]
    fn save_into_missing_directory_reports_failure() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("graph.dot");

        let result = save_dot(&small_grid(), &path);

        assert!(matches!(result, Err(Error::FileWriteFailure { .. })));
    }
}
