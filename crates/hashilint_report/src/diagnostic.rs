//! Normalized diagnostic types shipped to the editing surface.

use std::path::PathBuf;

use serde::Serialize;

use hashilint_text::Range;

/// Severity of a normalized diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking finding. Also the fallback for unknown raw severities.
    #[default]
    Error,
    /// Advisory finding.
    Warning,
}

/// Where a diagnostic applies: file plus zero-based range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub position: Range,
}

/// A proposed text edit attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// The range to replace.
    pub position: Range,
    /// The replacement text, carried verbatim from the analyzer.
    pub replace_with: String,
}

/// One normalized, position-bearing finding ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// The finding's message text.
    pub excerpt: String,

    /// File and range the finding applies to.
    pub location: Location,

    /// Proposed edits. Absent (not empty) when the analyzer offered no
    /// fix, so consumers can tell "no fix available" from "fix with an
    /// empty edit".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<Solution>>,
}

impl Diagnostic {
    /// Creates a diagnostic with no solutions.
    pub fn new(
        severity: Severity,
        excerpt: impl Into<String>,
        file: impl Into<PathBuf>,
        position: Range,
    ) -> Self {
        Self {
            severity,
            excerpt: excerpt.into(),
            location: Location {
                file: file.into(),
                position,
            },
            solutions: None,
        }
    }

    /// Attaches proposed edits.
    pub fn with_solutions(mut self, solutions: Vec<Solution>) -> Self {
        self.solutions = Some(solutions);
        self
    }
}

#[cfg(test)]
mod tests {
    use hashilint_text::{Position, Range};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_range() -> Range {
        Range::new(Position::new(0, 1), Position::new(0, 5))
    }

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Severity::Warning, "Too long", "/w/a.js", sample_range());

        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.excerpt, "Too long");
        assert_eq!(diag.location.file, PathBuf::from("/w/a.js"));
        assert!(diag.solutions.is_none());
    }

    #[test]
    fn test_diagnostic_with_solutions() {
        let solution = Solution {
            position: sample_range(),
            replace_with: "\n".to_string(),
        };
        let diag = Diagnostic::new(Severity::Error, "m", "/w/a.js", sample_range())
            .with_solutions(vec![solution.clone()]);

        assert_eq!(diag.solutions, Some(vec![solution]));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn test_solutions_field_omitted_when_absent() {
        let diag = Diagnostic::new(Severity::Error, "m", "/w/a.js", sample_range());
        let json = serde_json::to_string(&diag).unwrap();

        assert!(!json.contains("solutions"));
    }

    #[test]
    fn test_solution_serializes_camel_case() {
        let solution = Solution {
            position: sample_range(),
            replace_with: ";".to_string(),
        };
        let json = serde_json::to_string(&solution).unwrap();

        assert!(json.contains("replaceWith"));
    }
}
