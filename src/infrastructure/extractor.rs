//! Regex Function Extractor
//!
//! Finds function definitions and the calls inside their bodies using
//! single-line pattern matching and a brace-depth counter. This is a
//! deliberate heuristic, not a parser: comments, strings, macros, and
//! multi-line signatures are invisible to it.

use crate::domain::analysis::FileAnalysis;
use crate::ports::FunctionExtractor;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A definition line: allow-listed return type, identifier, a parameter
    /// list with no close paren inside, and the opening brace on the same line.
    static ref DEFINITION_RE: Regex =
        Regex::new(r"^\s*(?:void|bool|int|float|char\*?|String)\s+(\w+)\s*\([^)]*\)\s*\{")
            .expect("definition pattern is valid");

    /// A call-shaped token: identifier followed by an open paren.
    static ref CALL_RE: Regex = Regex::new(r"(\w+)\s*\(").expect("call pattern is valid");
}

/// Identifiers that match the call pattern but are never calls worth
/// recording: control-flow keywords plus commonly-noisy built-ins.
const CALL_EXCLUSIONS: &[&str] = &["if", "while", "for", "switch", "Serial", "printf", "delay"];

pub struct RegexExtractor;

impl RegexExtractor {
    pub fn new() -> Self {
        RegexExtractor
    }
}

impl Default for RegexExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionExtractor for RegexExtractor {
    fn extract(&self, content: &str) -> FileAnalysis {
        let mut analysis = FileAnalysis::default();
        let mut current: Option<String> = None;
        let mut depth: i32 = 0;

        for raw in content.lines() {
            let line = raw.trim();

            if let Some(caps) = DEFINITION_RE.captures(line) {
                // A definition-shaped line inside another body starts a new
                // function and abandons the enclosing one. Known limitation.
                let name = caps[1].to_string();
                depth = brace_delta(line);
                analysis.defined.push(name.clone());
                current = Some(name);
                continue;
            }

            if let Some(function) = current.clone() {
                depth += brace_delta(line);

                for caps in CALL_RE.captures_iter(line) {
                    let callee = &caps[1];
                    if !CALL_EXCLUSIONS.contains(&callee) {
                        analysis.record_call(&function, callee);
                    }
                }

                // Body closed once braces balance out.
                if depth <= 0 {
                    current = None;
                }
            }
        }

        analysis
    }
}

fn brace_delta(line: &str) -> i32 {
    let opens = line.chars().filter(|&c| c == '{').count() as i32;
    let closes = line.chars().filter(|&c| c == '}').count() as i32;
    opens - closes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(src: &str) -> FileAnalysis {
        RegexExtractor::new().extract(src)
    }

    #[test]
    fn test_no_definitions_yields_empty_results() {
        let analysis = extract("#include <Arduino.h>\n// just a comment\nint x = 3;\n");
        assert!(analysis.defined.is_empty());
        assert!(analysis.calls.is_empty());
    }

    #[test]
    fn test_single_function_calls_in_source_order() {
        let src = r#"
void setup() {
    initSensors();
    if (ready) {
        initDisplay();
    }
    delay(100);
    initSensors();
}
"#;
        let analysis = extract(src);
        assert_eq!(analysis.defined, vec!["setup"]);
        // `if` and `delay` excluded; duplicates kept in order.
        assert_eq!(
            analysis.callees_of("setup").unwrap(),
            &["initSensors", "initDisplay", "initSensors"]
        );
    }

    #[test]
    fn test_nested_braces_do_not_end_tracking_early() {
        let src = r#"
void loop() {
    readSensor();
    if (ok) {
        publish();
    }
    report();
}
void other() {
    cleanup();
}
"#;
        let analysis = extract(src);
        assert_eq!(analysis.defined, vec!["loop", "other"]);
        assert_eq!(
            analysis.callees_of("loop").unwrap(),
            &["readSensor", "publish", "report"]
        );
        assert_eq!(analysis.callees_of("other").unwrap(), &["cleanup"]);
    }

    #[test]
    fn test_exclusion_list_filters_keywords_and_builtins() {
        let src = r#"
void loop() {
    while (true) {
        for (int i = 0; i < 3; i++) {
            switch (mode) {
            }
        }
        Serial.println("hi");
        printf("x");
        delay(10);
        work();
    }
}
"#;
        let analysis = extract(src);
        // Serial.println still records `println`; only the listed names drop.
        assert_eq!(analysis.callees_of("loop").unwrap(), &["println", "work"]);
    }

    #[test]
    fn test_allow_listed_return_types_only() {
        let src = r#"
double compute() {
    helper();
}
float measure() {
    sample();
}
char* label() {
    format();
}
"#;
        let analysis = extract(src);
        // `double` is outside the allow-list, so compute is never detected
        // and helper is attributed to nothing.
        assert_eq!(analysis.defined, vec!["measure", "label"]);
        assert_eq!(analysis.callees_of("measure").unwrap(), &["sample"]);
        assert_eq!(analysis.callees_of("label").unwrap(), &["format"]);
        assert!(analysis.callees_of("compute").is_none());
    }

    #[test]
    fn test_multi_line_signature_never_detected() {
        let src = "void configure(\n    int retries) {\n    reset();\n}\n";
        let analysis = extract(src);
        assert!(analysis.defined.is_empty());
        assert!(analysis.calls.is_empty());
    }

    #[test]
    fn test_definition_line_not_scanned_for_calls() {
        let src = "bool check(int x) { probe(); }\n";
        let analysis = extract(src);
        // Single-line body: the definition line itself is skipped, and the
        // brace balance closes the function immediately.
        assert_eq!(analysis.defined, vec!["check"]);
        assert!(analysis.callees_of("check").is_none());
    }

    #[test]
    fn test_nested_definition_resets_tracking() {
        // A definition-shaped line inside a body abandons the outer function.
        let src = r#"
void outer() {
    before();
    void inner() {
        middle();
    }
    after();
}
"#;
        let analysis = extract(src);
        assert_eq!(analysis.defined, vec!["outer", "inner"]);
        assert_eq!(analysis.callees_of("outer").unwrap(), &["before"]);
        // inner's brace closes at the `}` after middle(); after() is outside
        // any tracked body from the extractor's point of view.
        assert_eq!(analysis.callees_of("inner").unwrap(), &["middle"]);
    }
}
