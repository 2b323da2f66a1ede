use std::io::Write;

use super::error::Error;
use path_sum_core::{FoundPath, Graph, Path, SearchOutcome};

/// Writes the enumeration result in a fixed, deterministic layout.
///
/// Every path is listed in discovery order (unless `list_paths` is off),
/// followed by the best path and a two-line summary.
pub struct Reporter<'a> {
    graph: &'a Graph,
    list_paths: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(graph: &'a Graph, list_paths: bool) -> Self {
        Reporter { graph, list_paths }
    }

    pub fn write_report<W: Write>(&self, outcome: &SearchOutcome, out: &mut W) -> Result<(), Error> {
        if self.list_paths {
            for (i, found) in outcome.paths().iter().enumerate() {
                self.write_path_block(i + 1, found, out)?;
            }
        }

        match outcome.best() {
            Some(best) => {
                writeln!(out, "\nPath with Maximum Sum:")?;
                writeln!(out, "Vertices (Index - Value): {}", self.annotate(&best.path)?)?;
                writeln!(out, "Sum of path with maximum sum: {}", best.sum)?;

                let indices: Vec<String> = best.path.vertices().iter().map(|v| v.to_string()).collect();
                writeln!(out, "Max Path Sum: {}", best.sum)?;
                writeln!(out, "Max Path: {}", indices.join(" "))?;
            }
            None => writeln!(out, "\nNo path found.")?,
        }

        Ok(())
    }

    fn write_path_block<W: Write>(&self, number: usize, found: &FoundPath, out: &mut W) -> Result<(), Error> {
        writeln!(out, "\nPath {}:", number)?;
        writeln!(out, "Vertices (Index - Value): {}", self.annotate(&found.path)?)?;
        writeln!(out, "Sum of path {}: {}", number, found.sum)?;
        Ok(())
    }

    /// `0 - (1) -> 2 - (3)`: each index with its value, joined by arrows.
    fn annotate(&self, path: &Path) -> Result<String, Error> {
        let parts = path
            .vertices()
            .iter()
            .map(|&idx| -> Result<String, Error> {
                Ok(format!("{} - ({})", idx, self.graph.vertex_value(idx)?))
            })
            .collect::<Result<Vec<String>, Error>>()?;

        Ok(parts.join(" -> "))
    }
}
