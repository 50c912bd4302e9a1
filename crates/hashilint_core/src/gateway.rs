//! Pipeline orchestrator and failure classifier.

use std::sync::Arc;

use tracing::{debug, warn};

use hashilint_report::{Diagnostic, RawFileResult, validate_report};
use hashilint_text::Document;

use crate::collaborators::{AnalyzerInvoker, IgnorePolicy, OptionsResolver, PermissionGate};
use crate::error::GatewayError;
use crate::normalize::normalize_message;

/// Caller-supplied sink for non-suppressed failures.
///
/// Reporting is a side channel: after a failure reaches the sink, the
/// pipeline still resolves to its empty value.
pub type ErrorSink = dyn Fn(GatewayError) + Send + Sync;

/// Sequences the lint pipeline: ignore check, permission check, options
/// resolution, analyzer invocation, validation, normalization.
///
/// Both public operations are total: they never fail, and concurrent calls
/// share no mutable state. Each call operates on its own [`Document`]
/// snapshot.
pub struct Gateway {
    ignore: Arc<dyn IgnorePolicy>,
    permission: Arc<dyn PermissionGate>,
    resolver: Arc<dyn OptionsResolver>,
    invoker: Arc<dyn AnalyzerInvoker>,
}

impl Gateway {
    /// Creates a gateway over the four injected collaborators.
    pub fn new(
        ignore: Arc<dyn IgnorePolicy>,
        permission: Arc<dyn PermissionGate>,
        resolver: Arc<dyn OptionsResolver>,
        invoker: Arc<dyn AnalyzerInvoker>,
    ) -> Self {
        Self {
            ignore,
            permission,
            resolver,
            invoker,
        }
    }

    /// Lints a document, returning normalized diagnostics in the
    /// analyzer's message order.
    ///
    /// Resolves to an empty vector when the document is ignored,
    /// permission is denied, a suppressible configuration absence occurs,
    /// or any other failure was routed to the sink.
    pub async fn lint(&self, document: &Document, sink: Option<&ErrorSink>) -> Vec<Diagnostic> {
        match self.analyze(document, sink).await {
            Some(result) => result
                .messages
                .iter()
                .map(|message| normalize_message(message, document))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Runs the analyzer in fix mode and returns the fully-fixed text.
    ///
    /// Resolves to `None` when no fixes were applicable or under any of
    /// the conditions that make [`Gateway::lint`] resolve to an empty
    /// vector.
    pub async fn fix(&self, document: &Document, sink: Option<&ErrorSink>) -> Option<String> {
        self.analyze(document, sink).await.and_then(|result| result.output)
    }

    /// Shared pipeline up to the lint/fix branch point.
    async fn analyze(
        &self,
        document: &Document,
        sink: Option<&ErrorSink>,
    ) -> Option<RawFileResult> {
        if self.ignore.is_ignored(document.path()) {
            debug!("Skipping ignored document {}", document.path().display());
            return None;
        }

        if !self.permission.check_permission(document).await {
            debug!(
                "Analysis not permitted for {}",
                document.path().display()
            );
            return None;
        }

        let options = classify(self.resolver.resolve_options(document).await, sink)?;
        let raw = classify(self.invoker.invoke(document, &options).await, sink)?;

        match validate_report(raw) {
            Ok(result) => Some(result),
            Err(err) => {
                report(sink, err.into());
                None
            }
        }
    }
}

/// Classifies a collaborator result: suppressible failures are swallowed,
/// everything else is forwarded to the sink.
fn classify<T>(result: Result<T, GatewayError>, sink: Option<&ErrorSink>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_suppressible() => {
            debug!("Suppressed configuration absence: {}", err);
            None
        }
        Err(err) => {
            report(sink, err);
            None
        }
    }
}

/// Routes a non-suppressed failure to the sink, substituting a default
/// description for an empty message first.
fn report(sink: Option<&ErrorSink>, err: GatewayError) {
    let err = err.ensure_description();
    warn!("Analyzer failure: {}", err);
    if let Some(sink) = sink {
        sink(err);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    fn collecting_sink() -> (Arc<Mutex<Vec<GatewayError>>>, Box<ErrorSink>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink: Box<ErrorSink> = {
            let seen = Arc::clone(&seen);
            Box::new(move |err: GatewayError| seen.lock().unwrap().push(err))
        };
        (seen, sink)
    }

    #[test]
    fn test_classify_passes_success_through() {
        let (seen, sink) = collecting_sink();
        let value = classify(Ok::<_, GatewayError>(7), Some(&*sink));

        assert_eq!(value, Some(7));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_classify_swallows_suppressible_failures() {
        let (seen, sink) = collecting_sink();

        let value = classify::<()>(Err(GatewayError::MissingLinter), Some(&*sink));
        assert_eq!(value, None);

        let value = classify::<()>(
            Err(GatewayError::missing_package("analyzer-core")),
            Some(&*sink),
        );
        assert_eq!(value, None);

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_classify_reports_other_failures() {
        let (seen, sink) = collecting_sink();

        let value = classify::<()>(Err(GatewayError::analyzer("spawn failed")), Some(&*sink));
        assert_eq!(value, None);
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[GatewayError::analyzer("spawn failed")]
        );
    }

    #[test]
    fn test_report_substitutes_default_description() {
        let (seen, sink) = collecting_sink();

        report(Some(&*sink), GatewayError::analyzer(""));
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[GatewayError::analyzer("Unknown analyzer error")]
        );
    }

    #[test]
    fn test_report_without_sink_drops_silently() {
        report(None, GatewayError::analyzer("nowhere to go"));
    }
}
