use crate::domain::analysis::FileAnalysis;
use crate::domain::callgraph::CallGraph;

pub mod mermaid_exporter;

/// Extraction seam: one file's text in, defined functions and calls out.
pub trait FunctionExtractor {
    fn extract(&self, content: &str) -> FileAnalysis;
}

/// Diagram seam: render an aggregated call graph as diagram text.
pub trait DiagramExporter {
    fn render(&self, graph: &CallGraph) -> String;
}
