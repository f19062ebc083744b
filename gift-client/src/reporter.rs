//! Failure reporting for degraded paths
//!
//! Failures that are swallowed instead of returned (the points lookup) are
//! handed to a [`FailureReporter`] so they still surface somewhere.

use crate::ClientError;

/// Receives failures that the caller does not see
pub trait FailureReporter: Send + Sync {
    fn report(&self, operation: &'static str, error: &ClientError);
}

/// Logs reported failures with `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, operation: &'static str, error: &ClientError) {
        tracing::warn!(operation, error = %error, status = ?error.status(), "Request failed");
    }
}
