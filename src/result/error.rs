//! LambdaError is the boundary error type that every handler in this
//! workspace can fail with. Component level errors are mapped into it before
//! they reach the Lambda runtime.

use lambda_runtime::Error as LambdaRuntimeError;

pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
    #[error("{0}")]
    Validation(String),
}
