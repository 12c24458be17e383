mod config;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent};
use common::aws_clients::ses::get_ses_client;
use common::config::ConfigLoader;
use human_approval_sm::email::SesEmailSender;
use human_approval_sm::notifier::{parse_approval_request, ApprovalNotifier, NotifierError};
use human_approval_sm::{
    lambda_main, lambda_structure::lambda_trait::Lambda, result::error::LambdaError,
};

use crate::config::Config;

pub struct Persisted {
    pub notifier: ApprovalNotifier,
}

pub struct SendApprovalEmail;

#[async_trait]
impl Lambda for SendApprovalEmail {
    type PersistedMemory = Persisted;
    type InputBody = SqsEvent;
    type Output = SqsBatchResponse;
    type Error = LambdaError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<Config>();
        let email_sender = Arc::new(SesEmailSender::new(Arc::new(get_ses_client())));
        let notifier = ApprovalNotifier::new(
            email_sender,
            config.base_url,
            config.sender_address,
            Duration::from_secs(config.send_email_timeout_seconds),
        );

        Ok(Persisted { notifier })
    }

    async fn run(
        event: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let mut batch_item_failures = Vec::new();
        let mut tasks = Vec::new();

        // Spawn a tokio task per well-formed record so the whole batch is
        // notified concurrently. Malformed records are reported back to the
        // queue for redrive; they are the only ones eligible for retry.
        for record in event.records {
            let message_id = record.message_id.unwrap_or_default();
            let body = record.body.unwrap_or_default();

            match parse_approval_request(&body) {
                Ok(request) => {
                    let notifier = state.notifier.clone();
                    tasks.push(tokio::spawn(async move { notifier.notify(request).await }));
                }
                Err(e) => {
                    tracing::error!(
                        message_id = %message_id,
                        error = ?e,
                        "rejecting malformed approval request: {e}"
                    );
                    batch_item_failures.push(BatchItemFailure {
                        item_identifier: message_id,
                    });
                }
            }
        }

        // Await them all. A failed item never aborts its siblings and is not
        // redriven: validation failures are skipped by design and transport
        // failures are retried upstream, if at all, by the queue itself.
        for task in tasks {
            match task.await {
                Ok(Ok(())) => (),
                Ok(Err(NotifierError::Validation(message))) => {
                    tracing::warn!("skipping approval request: {message}");
                }
                Ok(Err(e)) => {
                    tracing::error!(error = ?e, "failed to notify approver: {e}");
                }
                Err(e) => {
                    tracing::error!(error = ?e, "notification task panicked: {e}");
                }
            }
        }

        Ok(SqsBatchResponse {
            batch_item_failures,
        })
    }
}

lambda_main!(SendApprovalEmail);
