//! Gateway error types and classification.

use thiserror::Error;

/// Substituted when a reported failure carries no message text.
const DEFAULT_DESCRIPTION: &str = "Unknown analyzer error";

/// Failures the gateway can encounter while driving the pipeline.
///
/// Classification is by variant, never by runtime type identity:
/// [`GatewayError::is_suppressible`] decides whether a failure is treated
/// as "no findings" or forwarded to the error sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No analyzer configuration applies to this file type. Suppressible.
    #[error("no linter is configured for this file type")]
    MissingLinter,

    /// A required supporting package is not installed. Suppressible.
    #[error("required package '{0}' is not installed")]
    MissingPackage(String),

    /// The analyzer's output did not have the expected shape.
    #[error(transparent)]
    InvalidReport(#[from] hashilint_report::InvalidReport),

    /// Any other resolver or invocation failure.
    #[error("{0}")]
    Analyzer(String),
}

impl GatewayError {
    /// Creates a missing-package error.
    pub fn missing_package(name: impl Into<String>) -> Self {
        Self::MissingPackage(name.into())
    }

    /// Creates a generic analyzer failure.
    pub fn analyzer(message: impl Into<String>) -> Self {
        Self::Analyzer(message.into())
    }

    /// Whether this failure is an expected configuration absence that the
    /// pipeline swallows instead of surfacing.
    pub fn is_suppressible(&self) -> bool {
        matches!(self, Self::MissingLinter | Self::MissingPackage(_))
    }

    /// Replaces an empty failure message with a default description so the
    /// error sink never receives a blank payload.
    pub fn ensure_description(self) -> Self {
        match self {
            Self::Analyzer(message) if message.trim().is_empty() => {
                Self::Analyzer(DEFAULT_DESCRIPTION.to_string())
            }
            other => other,
        }
    }
}
