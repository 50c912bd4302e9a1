//! # hashilint_core
//!
//! Gateway core that turns raw output of an external static-analysis tool
//! into normalized diagnostics for an interactive editing surface.
//!
//! This crate provides:
//! - The [`Gateway`] pipeline orchestrator (`lint` / `fix`)
//! - Collaborator traits for the permission gate, ignore policy, options
//!   resolver, and analyzer invoker
//! - Failure classification: suppressible configuration absences vs
//!   failures that must reach the error sink
//! - Per-message diagnostic normalization
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hashilint_core::Gateway;
//! use hashilint_text::Document;
//!
//! let gateway = Gateway::new(ignore, permission, resolver, invoker);
//! let document = Document::new("/work/index.js", source_text);
//!
//! let diagnostics = gateway.lint(&document, None).await;
//! ```
//!
//! `lint` and `fix` never fail: every collaborator failure is absorbed
//! into the empty result, optionally after a call to the error sink.

mod collaborators;
mod error;
mod gateway;
mod normalize;

pub use collaborators::{
    AnalyzerInvoker, AnalyzerOptions, IgnorePolicy, OptionsResolver, PermissionGate,
};
pub use error::GatewayError;
pub use gateway::{ErrorSink, Gateway};
pub use normalize::normalize_message;

pub use hashilint_report::{
    Diagnostic, InvalidReport, Location, RawFileResult, RawFix, RawMessage, RawReport, Severity,
    Solution, validate_report,
};
pub use hashilint_text::{Document, Position, Range};
