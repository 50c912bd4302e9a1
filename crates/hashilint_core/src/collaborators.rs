//! Collaborator contracts consumed by the gateway.
//!
//! The analyzer itself, its configuration, the permission subsystem, and
//! the ignore policy all live outside this crate; the gateway reaches them
//! through these traits. Each async method is a suspension point; the
//! gateway holds no lock across them.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

use hashilint_text::Document;

use crate::error::GatewayError;

/// Resolved analyzer configuration, passed opaquely from the options
/// resolver to the invoker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Path of the config file that applies to the document, if any.
    pub config_path: Option<PathBuf>,
    /// Extra arguments for the analyzer invocation.
    pub extra_args: Vec<String>,
}

/// Path-based exclusion policy. Checked before anything else runs.
pub trait IgnorePolicy: Send + Sync {
    fn is_ignored(&self, path: &Path) -> bool;
}

/// Opt-in gate: decides whether analysis is allowed for a document.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    async fn check_permission(&self, document: &Document) -> bool;
}

/// Locates applicable analyzer configuration for a document.
///
/// The two distinguished failure kinds, [`GatewayError::MissingLinter`]
/// and [`GatewayError::MissingPackage`], are suppressed by the gateway;
/// anything else is forwarded to the error sink.
#[async_trait]
pub trait OptionsResolver: Send + Sync {
    async fn resolve_options(&self, document: &Document) -> Result<AnalyzerOptions, GatewayError>;
}

/// Runs the external analyzer and returns its raw, unvalidated output.
#[async_trait]
pub trait AnalyzerInvoker: Send + Sync {
    async fn invoke(
        &self,
        document: &Document,
        options: &AnalyzerOptions,
    ) -> Result<Value, GatewayError>;
}
