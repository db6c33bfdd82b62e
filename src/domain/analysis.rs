// Per-file extraction results for callsketch.
// These types represent what the extractor found in one source file.

/// Calls recorded for a single caller, in source order.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub caller: String,
    pub callees: Vec<String>, // duplicates kept; deduplicated only for the listing
}

/// Everything extracted from one file: the defined function names in
/// definition order, and the calls found inside each function body.
#[derive(Debug, Default)]
pub struct FileAnalysis {
    pub defined: Vec<String>,
    pub calls: Vec<CallRecord>,
}

impl FileAnalysis {
    /// Append a callee under a caller. Two definitions of the same name in
    /// one file share a record, matching the name-keyed accumulation.
    pub fn record_call(&mut self, caller: &str, callee: &str) {
        if let Some(record) = self.calls.iter_mut().find(|r| r.caller == caller) {
            record.callees.push(callee.to_string());
        } else {
            self.calls.push(CallRecord {
                caller: caller.to_string(),
                callees: vec![callee.to_string()],
            });
        }
    }

    /// Callees recorded for a function, if any calls were seen.
    pub fn callees_of(&self, name: &str) -> Option<&[String]> {
        self.calls
            .iter()
            .find(|r| r.caller == name)
            .map(|r| r.callees.as_slice())
    }
}
