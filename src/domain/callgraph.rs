// Call graph structures for callsketch.
// Represents the project-wide caller/callee relationships.

use crate::domain::analysis::{CallRecord, FileAnalysis};

/// The aggregated call graph across all analyzed files.
///
/// Function names are kept in first-discovery order (first file where seen,
/// first occurrence within that file) because diagram node numbering follows
/// discovery order. Caller records keep the order in which each caller was
/// first seen making a call. Functions are matched by bare name only, so two
/// files defining the same name share one node.
#[derive(Debug, Default)]
pub struct CallGraph {
    functions: Vec<String>,
    calls: Vec<CallRecord>,
}

impl CallGraph {
    /// Fold one file's extraction results into the graph. Defined names are
    /// unioned (first occurrence wins the position); callee lists for an
    /// already-known caller are extended, never replaced.
    pub fn absorb(&mut self, analysis: &FileAnalysis) {
        for name in &analysis.defined {
            if !self.functions.iter().any(|f| f == name) {
                self.functions.push(name.clone());
            }
        }
        for record in &analysis.calls {
            if let Some(existing) = self.calls.iter_mut().find(|r| r.caller == record.caller) {
                existing.callees.extend(record.callees.iter().cloned());
            } else {
                self.calls.push(record.clone());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    /// Known function names in discovery order.
    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    /// Caller records in first-call order.
    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Total recorded call occurrences, including calls to unknown names.
    pub fn call_count(&self) -> usize {
        self.calls.iter().map(|r| r.callees.len()).sum()
    }
}
