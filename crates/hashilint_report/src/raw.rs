//! Untrusted model of the external analyzer's JSON output.
//!
//! Field names follow the tool's wire format (camelCase). Only `message`
//! is required on a finding; every other field may be absent and the
//! normalizer degrades gracefully.

use serde::Deserialize;

/// The analyzer's full output: one entry per analyzed file.
pub type RawReport = Vec<RawFileResult>;

/// All findings for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFileResult {
    /// Path of the analyzed file, as the tool reported it.
    #[serde(default)]
    pub file_path: Option<String>,

    /// Findings for this file, in the tool's order.
    pub messages: Vec<RawMessage>,

    /// Fully-fixed text, present when the tool ran in fix mode and had
    /// fixes to apply.
    #[serde(default)]
    pub output: Option<String>,
}

/// One finding as the analyzer emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    /// Identifier of the rule that produced the finding.
    #[serde(default)]
    pub rule_id: Option<String>,

    /// Numeric severity: 1 = advisory, 2 = blocking. Absent or unknown
    /// values are treated as blocking downstream.
    #[serde(default)]
    pub severity: Option<u32>,

    /// Human-readable message text. Always present.
    pub message: String,

    /// 1-based line of the finding.
    #[serde(default)]
    pub line: Option<u32>,

    /// 1-based column of the finding.
    #[serde(default)]
    pub column: Option<u32>,

    /// The offending source-text fragment, typically the full line.
    #[serde(default)]
    pub source: Option<String>,

    /// Machine-applicable fix, if the rule offered one.
    #[serde(default)]
    pub fix: Option<RawFix>,
}

/// A fix descriptor: replace the chars in `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawFix {
    /// Absolute char offsets `[start, end]` into the document text.
    pub range: [usize; 2],

    /// Replacement text. May be empty (pure deletion).
    pub text: String,
}
