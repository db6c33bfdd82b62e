//! Mermaid Diagram Exporter
//!
//! Exports a CallGraph as a fenced Mermaid `graph TD` block.

use crate::domain::callgraph::CallGraph;
use crate::ports::DiagramExporter;
use std::collections::HashMap;

pub struct MermaidExporter;

impl DiagramExporter for MermaidExporter {
    /// Convert a CallGraph to a fenced Mermaid flowchart.
    ///
    /// Node ids are F0, F1, ... in discovery order. An edge is emitted for
    /// every recorded (caller, callee) occurrence whose ends are both known
    /// functions; repeated calls emit repeated edges, and callees never
    /// defined in the tree are dropped from the diagram entirely.
    fn render(&self, graph: &CallGraph) -> String {
        let mut lines = Vec::new();

        lines.push("```mermaid".to_string());
        lines.push("graph TD".to_string());

        let mut node_id: HashMap<&str, String> = HashMap::new();
        for (counter, function) in graph.functions().iter().enumerate() {
            node_id.insert(function.as_str(), format!("F{}", counter));
        }

        for function in graph.functions() {
            lines.push(format!("    {}[{}]", node_id[function.as_str()], function));
        }

        for record in graph.calls() {
            let Some(caller_id) = node_id.get(record.caller.as_str()) else {
                continue;
            };
            for callee in &record.callees {
                if let Some(callee_id) = node_id.get(callee.as_str()) {
                    lines.push(format!("    {} --> {}", caller_id, callee_id));
                }
            }
        }

        lines.push("```".to_string());

        lines.join("\n")
    }
}
