use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use lambda_runtime::{Diagnostic, Error as LambdaError};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    /// Failure reported by DescribeCluster or UpdateItem, passed through as is.
    #[error(transparent)]
    UpstreamFailure(#[from] LambdaError),
}

impl Error {
    /// Reported to the invoker as the Lambda `errorType`.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "InvalidInput",
            Error::NotFound(_) => "NotFound",
            Error::UpstreamFailure(_) => "UpstreamFailure",
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(err: Error) -> Self {
        Diagnostic {
            error_type: err.kind().into(),
            error_message: err.to_string(),
        }
    }
}

/// Unwraps an SDK failure so its message is the service's own, e.g.
/// `InvalidRequestException: Cluster id 'x' is not valid.`
pub fn upstream_error<E, R>(err: SdkError<E, R>) -> LambdaError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(context) => context.into_err().into(),
        err => DisplayErrorContext(err).to_string().into(),
    }
}
