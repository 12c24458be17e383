use serde::{Deserialize, Serialize};

/// Query string parameter that carries the continuation token on both action
/// routes. The same name is used when building the links and when reading
/// them back on the callback side.
pub const TASK_TOKEN_PARAM: &str = "taskToken";

/// Queue message payload produced by the workflow engine when an execution
/// suspends waiting for a human decision.
///
/// `task_token` is opaque to this system: it is URL-encoded for link
/// embedding and forwarded verbatim to the engine, never parsed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub task_token: String,
    pub request_id: String,
    #[serde(default)]
    pub recipient_email: String,
}

/// The decision taken by the approver, derived exclusively from which action
/// route was invoked. It is never inferred from request content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    /// Maps the last segment of the request path to an action. Returns `None`
    /// for anything that is not an action route.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/').rsplit('/').next() {
            Some("approve") => Some(Self::Approve),
            Some("reject") => Some(Self::Reject),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionStatus {
    Success,
    Failure,
}

/// Outcome returned synchronously to whoever invoked the callback, suitable
/// for rendering as a human-readable confirmation page.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome {
    pub status: ResolutionStatus,
    pub message: String,
}

impl ResolutionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResolutionStatus::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResolutionStatus::Failure,
            message: message.into(),
        }
    }
}
