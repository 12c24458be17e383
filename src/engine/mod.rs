//! Workflow engine collaborator interface. The Callback Resolver signals the
//! continuation through this trait; the Step Functions implementation maps
//! the task token callback API (`SendTaskSuccess`/`SendTaskFailure`) onto it.

use std::sync::Arc;

use async_trait::async_trait;
use rusoto_core::RusotoError;
use rusoto_stepfunctions::{SendTaskFailureInput, SendTaskSuccessInput, StepFunctions};

#[derive(Debug, thiserror::Error)]
pub enum WorkflowEngineError {
    /// The engine completed the call but refused the token: unknown, expired
    /// or already resolved. Expected on duplicate callbacks.
    #[error("workflow engine rejected the task token: {0}")]
    Rejection(String),
    /// The call to the engine did not complete.
    #[error("workflow engine call failed: {0}")]
    Transport(#[source] anyhow::Error),
}

#[async_trait]
pub trait WorkflowEngine {
    async fn signal_success(&self, task_token: &str, output: &str)
        -> Result<(), WorkflowEngineError>;

    async fn signal_failure(
        &self,
        task_token: &str,
        error_code: &str,
        cause: &str,
    ) -> Result<(), WorkflowEngineError>;
}

pub struct StepFunctionsWorkflowEngine {
    client: Arc<dyn StepFunctions + Sync + Send>,
}

impl StepFunctionsWorkflowEngine {
    pub fn new(client: Arc<dyn StepFunctions + Sync + Send>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WorkflowEngine for StepFunctionsWorkflowEngine {
    async fn signal_success(
        &self,
        task_token: &str,
        output: &str,
    ) -> Result<(), WorkflowEngineError> {
        self.client
            .send_task_success(SendTaskSuccessInput {
                task_token: task_token.to_owned(),
                output: output.to_owned(),
            })
            .await
            .map(|_| ())
            .map_err(into_engine_error)
    }

    async fn signal_failure(
        &self,
        task_token: &str,
        error_code: &str,
        cause: &str,
    ) -> Result<(), WorkflowEngineError> {
        self.client
            .send_task_failure(SendTaskFailureInput {
                task_token: task_token.to_owned(),
                error: Some(error_code.to_owned()),
                cause: Some(cause.to_owned()),
            })
            .await
            .map(|_| ())
            .map_err(into_engine_error)
    }
}

fn into_engine_error<E>(error: RusotoError<E>) -> WorkflowEngineError
where
    E: std::error::Error + Send + Sync + 'static,
{
    match error {
        RusotoError::Service(e) => WorkflowEngineError::Rejection(e.to_string()),
        e => WorkflowEngineError::Transport(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusoto_core::HttpDispatchError;
    use rusoto_stepfunctions::{SendTaskFailureError, SendTaskSuccessError};

    #[test]
    fn task_does_not_exist_maps_to_rejection() {
        let error = into_engine_error(RusotoError::Service(
            SendTaskSuccessError::TaskDoesNotExist("task already resolved".to_owned()),
        ));

        assert!(matches!(error, WorkflowEngineError::Rejection(_)));
        assert!(error.to_string().contains("task already resolved"));
    }

    #[test]
    fn task_timed_out_maps_to_rejection() {
        let error = into_engine_error(RusotoError::Service(SendTaskFailureError::TaskTimedOut(
            "token expired".to_owned(),
        )));

        assert!(matches!(error, WorkflowEngineError::Rejection(_)));
    }

    #[test]
    fn dispatch_error_maps_to_transport() {
        let error = into_engine_error::<SendTaskSuccessError>(RusotoError::HttpDispatch(
            HttpDispatchError::new("timeout".to_owned()),
        ));

        assert!(matches!(error, WorkflowEngineError::Transport(_)));
        assert!(error.to_string().contains("timeout"));
    }
}
