//! Email collaborator interface. The Notifier talks to this trait only; the
//! SES backed implementation lives next to it so any provider satisfying the
//! contract is substitutable in tests.

use std::sync::Arc;

use async_trait::async_trait;
use rusoto_core::RusotoError;
use rusoto_ses::{Body, Content, Destination, Message, SendEmailRequest, Ses};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailSenderError {
    /// The provider completed the call but refused the message.
    #[error("email provider rejected the message: {0}")]
    Rejection(String),
    /// The call to the provider did not complete.
    #[error("email provider call failed: {0}")]
    Transport(#[source] anyhow::Error),
}

#[async_trait]
pub trait EmailSender {
    async fn send(&self, email: OutboundEmail) -> Result<(), EmailSenderError>;
}

pub struct SesEmailSender {
    client: Arc<dyn Ses + Sync + Send>,
}

impl SesEmailSender {
    pub fn new(client: Arc<dyn Ses + Sync + Send>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, email: OutboundEmail) -> Result<(), EmailSenderError> {
        let request = SendEmailRequest {
            source: email.sender,
            destination: Destination {
                to_addresses: Some(vec![email.recipient]),
                ..Destination::default()
            },
            message: Message {
                subject: Content {
                    data: email.subject,
                    charset: None,
                },
                body: Body {
                    html: Some(Content {
                        data: email.html_body,
                        charset: None,
                    }),
                    text: Some(Content {
                        data: email.text_body,
                        charset: None,
                    }),
                },
            },
            ..SendEmailRequest::default()
        };

        self.client
            .send_email(request)
            .await
            .map(|_| ())
            .map_err(into_email_sender_error)
    }
}

fn into_email_sender_error<E>(error: RusotoError<E>) -> EmailSenderError
where
    E: std::error::Error + Send + Sync + 'static,
{
    match error {
        RusotoError::Service(e) => EmailSenderError::Rejection(e.to_string()),
        e => EmailSenderError::Transport(e.into()),
    }
}
