// Request extractors
//
// Wrap axum's Path and Json extractors so that every rejection is rendered as
// an ApiError (422 with a "detail" list) instead of axum's plain-text bodies.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use wfhub_core::WorkflowKey;

use super::common::{ApiError, ValidationIssue};

/// Workflow key taken from the `workflow_key` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowKeyPath(pub WorkflowKey);

#[axum::async_trait]
impl<S> FromRequestParts<S> for WorkflowKeyPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        raw.parse::<WorkflowKey>().map(WorkflowKeyPath).map_err(|e| {
            tracing::debug!(input = %e.input, "Unknown workflow key in path");
            ApiError::validation(ValidationIssue::unknown_workflow_key(&[
                "path",
                "workflow_key",
            ]))
        })
    }
}

/// JSON body whose rejections are reported as validation errors
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ValidatedJson(value))
    }
}
