//! Shape validation of raw analyzer output.

use serde_json::Value;
use thiserror::Error;

use crate::raw::{RawFileResult, RawReport};

/// The analyzer's output did not have the expected shape.
///
/// The display text is fixed; callers surface it through their reporting
/// channel rather than propagating it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("Invalid lint report")]
pub struct InvalidReport;

/// Validates raw analyzer output for a single-file invocation.
///
/// Valid output is a sequence of per-file results containing exactly one
/// entry for the target file. Anything else (empty sequence, multiple
/// entries, non-sequence, entries missing required fields) is an
/// [`InvalidReport`].
pub fn validate_report(raw: Value) -> Result<RawFileResult, InvalidReport> {
    let mut report: RawReport = serde_json::from_value(raw).map_err(|_| InvalidReport)?;

    if report.len() != 1 {
        return Err(InvalidReport);
    }

    Ok(report.remove(0))
}
