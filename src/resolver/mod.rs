//! Maps an inbound human decision back onto the workflow engine's
//! continuation. One invocation is one attempt: the resolver holds no state,
//! and a duplicate callback is reported as a failure by the engine's own
//! idempotency check.

use std::sync::Arc;
use std::time::Duration;

use crate::engine::WorkflowEngine;
use crate::model::approval::{ApprovalAction, ResolutionOutcome};

/// Fixed output payload delivered to the engine on approval.
const APPROVAL_OUTPUT: &str = r#"{"status":"OK"}"#;

/// Fixed error code and cause delivered to the engine on rejection.
const REJECTION_ERROR_CODE: &str = "ApprovalRejected";
const REJECTION_CAUSE: &str = "The request was rejected by the approver";

pub const MISSING_TOKEN_MESSAGE: &str = "missing continuation token";

#[derive(Clone)]
pub struct ApprovalResolver {
    engine: Arc<dyn WorkflowEngine + Sync + Send>,
    signal_timeout: Duration,
}

impl ApprovalResolver {
    pub fn new(engine: Arc<dyn WorkflowEngine + Sync + Send>, signal_timeout: Duration) -> Self {
        Self {
            engine,
            signal_timeout,
        }
    }

    /// Resolves the continuation exactly once. Every engine fault, including
    /// a rejection of an already resolved token, is converted into a
    /// `FAILURE` outcome; nothing propagates to the caller as an unhandled
    /// fault.
    pub async fn resolve(&self, task_token: &str, action: ApprovalAction) -> ResolutionOutcome {
        if task_token.trim().is_empty() {
            return ResolutionOutcome::failure(MISSING_TOKEN_MESSAGE);
        }

        let signal = match action {
            ApprovalAction::Approve => self.engine.signal_success(task_token, APPROVAL_OUTPUT),
            ApprovalAction::Reject => {
                self.engine
                    .signal_failure(task_token, REJECTION_ERROR_CODE, REJECTION_CAUSE)
            }
        };

        match tokio::time::timeout(self.signal_timeout, signal).await {
            Ok(Ok(())) => match action {
                ApprovalAction::Approve => ResolutionOutcome::success("approved"),
                ApprovalAction::Reject => ResolutionOutcome::success("rejected"),
            },
            Ok(Err(e)) => {
                tracing::error!(error = ?e, "unable to resolve continuation: {e}");
                ResolutionOutcome::failure(e.to_string())
            }
            Err(_) => {
                tracing::error!(
                    timeout = ?self.signal_timeout,
                    "workflow engine call timed out"
                );
                ResolutionOutcome::failure(format!(
                    "workflow engine call timed out after {:?}",
                    self.signal_timeout
                ))
            }
        }
    }
}
