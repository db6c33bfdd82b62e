// Analysis orchestration for callsketch.

use crate::domain::callgraph::CallGraph;
use crate::infrastructure::ProjectLoader;
use crate::ports::{DiagramExporter, FunctionExtractor};
use anyhow::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Runs the whole analysis and assembles the report.
///
/// The report is returned as one string so a run is deterministic and easy
/// to test; the caller decides where it goes (stdout for the CLI).
pub struct AnalyzeUsecase<'a> {
    pub extractor: &'a dyn FunctionExtractor,
    pub exporter: &'a dyn DiagramExporter,
}

impl<'a> AnalyzeUsecase<'a> {
    pub fn run(&self, root: &Path) -> Result<String> {
        let files = ProjectLoader::discover(root)?;

        let mut out = String::new();
        writeln!(out, "# Call Graph Analysis")?;
        writeln!(out)?;
        writeln!(out, "Analyzing {} files...", files.len())?;

        // Pass 1: extract every file and fold into the aggregate graph.
        let mut graph = CallGraph::default();
        for file in &files {
            writeln!(out, "Processing: {}", file.display())?;
            let analysis = self.extractor.extract(&read_source(file));
            graph.absorb(&analysis);
        }

        writeln!(out)?;
        writeln!(out, "Found {} functions", graph.function_count())?;
        writeln!(out, "Found {} function calls", graph.call_count())?;

        writeln!(out)?;
        writeln!(out, "## Function Call Graph")?;
        writeln!(out, "{}", self.exporter.render(&graph))?;

        // Pass 2: re-extract per file for the listing. Recomputed rather
        // than cached, so extraction must stay deterministic.
        writeln!(out)?;
        writeln!(out, "## Function List by File")?;
        for file in &files {
            let analysis = self.extractor.extract(&read_source(file));
            if analysis.defined.is_empty() {
                continue;
            }

            writeln!(out)?;
            writeln!(out, "### {}", file.display())?;

            let mut names = analysis.defined.clone();
            names.sort();
            for name in &names {
                match analysis.callees_of(name) {
                    Some(callees) => {
                        let mut distinct: Vec<&str> =
                            callees.iter().map(|s| s.as_str()).collect();
                        distinct.sort_unstable();
                        distinct.dedup();
                        writeln!(out, "- **{}()** calls: {}", name, distinct.join(", "))?;
                    }
                    None => writeln!(out, "- **{}()**", name)?,
                }
            }
        }

        Ok(out)
    }
}

/// Read one source file, treating failure as an empty file: the problem is
/// reported on stderr and the run carries on.
fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("WARN: Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}
