mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use common::aws_clients::step_functions::get_step_functions_client;
use common::config::ConfigLoader;
use http::StatusCode;
use human_approval_sm::engine::StepFunctionsWorkflowEngine;
use human_approval_sm::http::errors::{unknown_error_response, validation_error_response};
use human_approval_sm::http::lambda_proxy::LambdaProxyHttpResponse;
use human_approval_sm::http_lambda_main;
use human_approval_sm::lambda_structure::http_lambda_main::HttpLambdaResponse;
use human_approval_sm::model::approval::{ApprovalAction, TASK_TOKEN_PARAM};
use human_approval_sm::resolver::ApprovalResolver;
use human_approval_sm::result::error::LambdaError;
use lambda_http::{run, service_fn, Error, Request, RequestExt};

use crate::config::Config;

pub struct State {
    pub resolver: ApprovalResolver,
}

http_lambda_main!(
    {
        let config = ConfigLoader::load_default::<Config>();
        let engine = Arc::new(StepFunctionsWorkflowEngine::new(Arc::new(
            get_step_functions_client(),
        )));

        State {
            resolver: ApprovalResolver::new(
                engine,
                Duration::from_secs(config.signal_timeout_seconds),
            ),
        }
    },
    resolve_approval
);

async fn resolve_approval(request: Request, state: &State) -> HttpLambdaResponse {
    // The action is structurally tied to which link was clicked: it is
    // derived from the route, never from request content.
    let action = ApprovalAction::from_path(request.uri().path()).ok_or_else(|| {
        validation_error_response(
            format!("unknown action route: {}", request.uri().path()),
            None,
        )
    })?;

    // An absent token is handled by the resolver itself so the caller still
    // receives a structured outcome.
    let task_token = request
        .query_string_parameters()
        .first(TASK_TOKEN_PARAM)
        .unwrap_or_default()
        .to_owned();

    let outcome = state.resolver.resolve(&task_token, action).await;

    let body = serde_json::to_string(&outcome)
        .map_err(|e| unknown_error_response(LambdaError::Unknown(anyhow!(e))))?;

    LambdaProxyHttpResponse {
        status_code: StatusCode::OK,
        body: Some(body),
        ..LambdaProxyHttpResponse::default()
    }
    .try_into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use common::test_tools::constants::TASK_TOKEN_FOR_MOCK_REQUESTS;
    use human_approval_sm::engine::{WorkflowEngine, WorkflowEngineError};
    use human_approval_sm::http::errors::VALIDATION_ERROR_CODE;
    use lambda_http::Body;
    use mockall::{mock, predicate::eq};
    use std::collections::HashMap;

    mock! {
        Engine {}
        #[async_trait]
        impl WorkflowEngine for Engine {
            async fn signal_success(
                &self,
                task_token: &str,
                output: &str,
            ) -> Result<(), WorkflowEngineError>;
            async fn signal_failure(
                &self,
                task_token: &str,
                error_code: &str,
                cause: &str,
            ) -> Result<(), WorkflowEngineError>;
        }
    }

    fn state_with(engine: MockEngine) -> State {
        State {
            resolver: ApprovalResolver::new(Arc::new(engine), Duration::from_secs(3)),
        }
    }

    fn request_for(path: &str, task_token: Option<&str>) -> Request {
        let request = http::Request::builder()
            .uri(format!("https://callbacks.example.com{path}"))
            .body(Body::Empty)
            .expect("Should build request");

        match task_token {
            Some(token) => request.with_query_string_parameters::<HashMap<_, _>>(HashMap::from([
                (TASK_TOKEN_PARAM.to_owned(), vec![token.to_owned()]),
            ])),
            None => request,
        }
    }

    async fn call(state: &State, request: Request) -> lambda_http::Response<String> {
        match resolve_approval(request, state).await {
            Ok(response) => response,
            Err(response) => response,
        }
    }

    #[tokio::test]
    async fn approve_route_returns_success_outcome() {
        let mut engine = MockEngine::new();
        engine
            .expect_signal_success()
            .with(eq(TASK_TOKEN_FOR_MOCK_REQUESTS), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Ok(()));

        let state = state_with(engine);
        let request = request_for("/approve", Some(TASK_TOKEN_FOR_MOCK_REQUESTS));

        let response = call(&state, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains(r#""status":"SUCCESS""#));
        assert!(response.body().contains("approved"));
    }

    #[tokio::test]
    async fn reject_route_returns_success_outcome() {
        let mut engine = MockEngine::new();
        engine
            .expect_signal_failure()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let state = state_with(engine);
        let request = request_for("/reject", Some(TASK_TOKEN_FOR_MOCK_REQUESTS));

        let response = call(&state, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains("rejected"));
    }

    #[tokio::test]
    async fn missing_token_returns_structured_failure_without_engine_call() {
        // No expectations: any engine call fails the test.
        let state = state_with(MockEngine::new());
        let request = request_for("/approve", None);

        let response = call(&state, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains(r#""status":"FAILURE""#));
        assert!(response.body().contains("missing continuation token"));
    }

    #[tokio::test]
    async fn engine_rejection_returns_structured_failure() {
        let mut engine = MockEngine::new();
        engine.expect_signal_success().times(1).returning(|_, _| {
            Err(WorkflowEngineError::Rejection(
                "Task Does Not Exist".to_owned(),
            ))
        });

        let state = state_with(engine);
        let request = request_for("/approve", Some(TASK_TOKEN_FOR_MOCK_REQUESTS));

        let response = call(&state, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains(r#""status":"FAILURE""#));
        assert!(response.body().contains("Task Does Not Exist"));
    }

    #[tokio::test]
    async fn unknown_route_returns_validation_error() {
        let state = state_with(MockEngine::new());
        let request = request_for("/cancel", Some(TASK_TOKEN_FOR_MOCK_REQUESTS));

        let response = call(&state, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.body().contains(VALIDATION_ERROR_CODE));
    }
}
