//! Normalization of one raw analyzer message into one diagnostic.

use hashilint_report::{Diagnostic, RawFix, RawMessage, Severity, Solution};
use hashilint_text::{Document, Position, Range, range_at_offsets};

/// Maps one raw message to a normalized diagnostic against the owning
/// document's live text.
///
/// Raw severity 1 becomes [`Severity::Warning`]; anything else, including
/// absent or unknown values, becomes [`Severity::Error`] so no finding is
/// silently downgraded. A message without a rule id normalizes like any
/// other; rule identity is metadata only.
pub fn normalize_message(raw: &RawMessage, document: &Document) -> Diagnostic {
    let severity = match raw.severity {
        Some(1) => Severity::Warning,
        _ => Severity::Error,
    };

    let position = derive_range(raw);
    let diagnostic = Diagnostic::new(severity, raw.message.clone(), document.path(), position);

    match &raw.fix {
        Some(fix) => diagnostic.with_solutions(vec![solution_from_fix(fix, document.text())]),
        None => diagnostic,
    }
}

/// Derives the diagnostic range, in priority order:
///
/// 1. `line` + `column` + `source`: the range covers the fragment's tail
///    from the start column up to its last non-whitespace char, bounding
///    the squiggle to the relevant token rather than the whole line.
/// 2. `line` (with or without `column`): zero-width range at that spot.
/// 3. no positional data: collapsed at the origin.
fn derive_range(raw: &RawMessage) -> Range {
    let Some(line) = raw.line else {
        return Range::default();
    };

    let column = raw.column.unwrap_or(1);
    let start = Position::from_line_col(line, column);

    match (&raw.source, raw.column) {
        (Some(source), Some(_)) => {
            let fragment_len = source.chars().count();
            let start_col = start.column as usize;
            let tail: String = source.chars().skip(start_col).collect();
            let tail_len = tail.trim_end().chars().count();
            let end_col = (start_col + tail_len).min(fragment_len).max(start_col);
            Range::new(start, Position::new(start.row, end_col as u32))
        }
        _ => Range::collapsed(start),
    }
}

/// Translates a char-offset fix descriptor into a coordinate-based
/// solution against the live text.
fn solution_from_fix(fix: &RawFix, text: &str) -> Solution {
    Solution {
        position: range_at_offsets(text, fix.range[0], fix.range[1]),
        replace_with: fix.text.clone(),
    }
}
