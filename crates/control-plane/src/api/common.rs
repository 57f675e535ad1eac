// Common DTOs and error handling for the public API
//
// Error bodies use a "detail" field: a string for 404/501/500 and a list of
// issues for 422, matching what existing clients of this API already parse.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wfhub_core::{CatalogError, ExecutionError, ParseWorkflowKeyError};

/// Error message returned when a workflow has no description
pub const WORKFLOW_NOT_FOUND: &str = "Workflow not found";

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    #[schema(example = "Workflow not found")]
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    /// Location of the offending input, e.g. ["path", "workflow_key"].
    pub loc: Vec<String>,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable error type.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Input at `loc` is not one of the workflow key tokens
    pub fn unknown_workflow_key(loc: &[&str]) -> Self {
        Self::new(loc, ParseWorkflowKeyError::expected_message(), "enum")
    }
}

/// Response body for 422 Unprocessable Entity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// All validation failures found in the request.
    pub detail: Vec<ValidationIssue>,
}

/// Errors returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed validation (422)
    Validation(Vec<ValidationIssue>),
    /// Referenced workflow has no description (404)
    NotFound,
    /// Workflow key is valid but cannot be executed (501)
    NotExecutable(String),
    /// Unexpected failure (500)
    Internal(String),
}

impl ApiError {
    pub fn validation(issue: ValidationIssue) -> Self {
        ApiError::Validation(vec![issue])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NotExecutable(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(issues) => {
                (status, Json(ValidationErrorResponse { detail: issues })).into_response()
            }
            ApiError::NotFound => (status, Json(ErrorResponse::new(WORKFLOW_NOT_FOUND))).into_response(),
            ApiError::NotExecutable(message) => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (status, Json(ErrorResponse::new("Internal Server Error"))).into_response()
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ApiError::NotFound,
            // Load errors abort startup, so handlers only ever see NotFound
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ExecutionError> for ApiError {
    fn from(err: ExecutionError) -> Self {
        tracing::error!("Workflow execution failed: {}", err);
        ApiError::NotExecutable(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::MissingJsonContentType(_) => "missing_content_type",
            _ => "body_error",
        };
        tracing::debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
        ApiError::validation(ValidationIssue::new(&["body"], rejection.body_text(), kind))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(ValidationIssue::new(
            &["path"],
            rejection.body_text(),
            "path_error",
        ))
    }
}
