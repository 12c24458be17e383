//! Turns one `ApprovalRequest` into one outbound notification carrying two
//! mutually exclusive action links. Stateless; safe to run with arbitrary
//! concurrency across unrelated requests.

pub mod template;

use std::sync::Arc;
use std::time::Duration;

use crate::email::{EmailSender, EmailSenderError, OutboundEmail};
use crate::model::approval::{ApprovalRequest, TASK_TOKEN_PARAM};

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    /// The queue message body could not be turned into an `ApprovalRequest`.
    /// These items are candidates for redrive / dead-lettering.
    #[error("{0}")]
    Parse(String),
    /// The request parsed but cannot be notified. These items are skipped
    /// permanently.
    #[error("{0}")]
    Validation(String),
    #[error("failed to dispatch notification: {0}")]
    Dispatch(#[from] EmailSenderError),
    #[error("notification dispatch timed out after {0:?}")]
    Timeout(Duration),
}

/// The two action URLs derived from one continuation token. Ephemeral, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLinks {
    pub approve_url: String,
    pub reject_url: String,
}

impl ActionLinks {
    pub fn build(base_url: &str, task_token: &str) -> Self {
        let encoded_token = urlencoding::encode(task_token);
        let base = base_url.trim_end_matches('/');

        Self {
            approve_url: format!("{base}/approve?{TASK_TOKEN_PARAM}={encoded_token}"),
            reject_url: format!("{base}/reject?{TASK_TOKEN_PARAM}={encoded_token}"),
        }
    }
}

pub fn parse_approval_request(body: &str) -> Result<ApprovalRequest, NotifierError> {
    let request: ApprovalRequest = serde_json::from_str(body)
        .map_err(|e| NotifierError::Parse(format!("invalid approval request body: {e}")))?;

    if request.task_token.trim().is_empty() {
        return Err(NotifierError::Parse("missing task token".to_owned()));
    }
    if request.request_id.trim().is_empty() {
        return Err(NotifierError::Parse("missing request id".to_owned()));
    }

    Ok(request)
}

#[derive(Clone)]
pub struct ApprovalNotifier {
    email_sender: Arc<dyn EmailSender + Sync + Send>,
    base_url: String,
    sender_address: String,
    send_timeout: Duration,
}

impl ApprovalNotifier {
    pub fn new(
        email_sender: Arc<dyn EmailSender + Sync + Send>,
        base_url: String,
        sender_address: String,
        send_timeout: Duration,
    ) -> Self {
        Self {
            email_sender,
            base_url,
            sender_address,
            send_timeout,
        }
    }

    pub async fn notify(&self, request: ApprovalRequest) -> Result<(), NotifierError> {
        if request.recipient_email.trim().is_empty() {
            return Err(NotifierError::Validation(format!(
                "missing recipient email for request {}",
                request.request_id
            )));
        }

        let links = ActionLinks::build(&self.base_url, &request.task_token);
        let email = OutboundEmail {
            sender: self.sender_address.clone(),
            recipient: request.recipient_email.clone(),
            subject: template::render_subject(&request.request_id),
            html_body: template::render_html_body(&request.request_id, &links),
            text_body: template::render_text_body(&request.request_id, &links),
        };

        match tokio::time::timeout(self.send_timeout, self.email_sender.send(email)).await {
            Ok(Ok(())) => {
                tracing::info!(
                    request_id = %request.request_id,
                    recipient = %request.recipient_email,
                    "approval notification sent"
                );
                Ok(())
            }
            Ok(Err(e)) => Err(NotifierError::Dispatch(e)),
            Err(_) => Err(NotifierError::Timeout(self.send_timeout)),
        }
    }
}
