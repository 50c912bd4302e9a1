//! # hashilint_report
//!
//! Report types for the hashilint gateway:
//!
//! - the raw, untrusted model of what the external analyzer emits
//!   ([`RawReport`], [`RawMessage`], [`RawFix`])
//! - shape validation of that output ([`validate_report`])
//! - the normalized diagnostic model shipped to the editing surface
//!   ([`Diagnostic`], [`Solution`])
//!
//! Raw values are ephemeral: produced per invocation, validated, consumed
//! immediately. Normalized diagnostics carry no identity beyond the call
//! that produced them.

mod diagnostic;
mod raw;
mod validate;

pub use diagnostic::{Diagnostic, Location, Severity, Solution};
pub use raw::{RawFileResult, RawFix, RawMessage, RawReport};
pub use validate::{InvalidReport, validate_report};
