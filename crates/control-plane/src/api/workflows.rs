// Workflow HTTP routes
//
// Design Decision: Workflows are a closed set defined in wfhub-core. Listing never
// depends on the catalog file; descriptions do. Execution goes through the stub
// executor, which reports missing handlers instead of returning an empty list.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use wfhub_core::{ExecuteResultItem, Parameters, WorkflowDescription, WorkflowKey, WorkflowOption};

use super::common::{ApiError, ErrorResponse, ValidationErrorResponse, ValidationIssue};
use super::extract::{ValidatedJson, WorkflowKeyPath};
use crate::services::WorkflowService;

/// App state for workflow routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WorkflowService>,
}

impl AppState {
    pub fn new(service: Arc<WorkflowService>) -> Self {
        Self { service }
    }
}

/// Request to execute a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExecuteRequest {
    /// Workflow to execute.
    pub workflow_key: WorkflowKey,
    /// Free-form parameters, echoed into the text result.
    #[schema(value_type = Object)]
    pub parameters: Parameters,
}

/// Wire form of ExecuteRequest; the key is checked after parsing so an unknown
/// key is reported against `body.workflow_key`
#[derive(Debug, Deserialize)]
pub struct ExecuteBody {
    workflow_key: String,
    parameters: Parameters,
}

impl TryFrom<ExecuteBody> for ExecuteRequest {
    type Error = ApiError;

    fn try_from(body: ExecuteBody) -> Result<Self, Self::Error> {
        let workflow_key = body.workflow_key.parse::<WorkflowKey>().map_err(|e| {
            tracing::debug!(input = %e.input, "Unknown workflow key in body");
            ApiError::validation(ValidationIssue::unknown_workflow_key(&[
                "body",
                "workflow_key",
            ]))
        })?;

        Ok(Self {
            workflow_key,
            parameters: body.parameters,
        })
    }
}

/// Create workflow routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/workflow", get(list_workflows))
        .route("/description/:workflow_key", get(get_description))
        .route("/execute", post(execute_workflow))
        .with_state(state)
}

/// GET /workflow - List all workflows
#[utoipa::path(
    get,
    path = "/workflow",
    responses(
        (status = 200, description = "Workflows in declaration order", body = Vec<WorkflowOption>),
    ),
    tag = "workflows"
)]
pub async fn list_workflows(State(state): State<AppState>) -> Json<Vec<WorkflowOption>> {
    Json(state.service.list())
}

/// GET /description/{workflow_key} - Get the description of a workflow
#[utoipa::path(
    get,
    path = "/description/{workflow_key}",
    params(
        ("workflow_key" = WorkflowKey, Path, description = "Workflow key")
    ),
    responses(
        (status = 200, description = "Workflow description", body = WorkflowDescription),
        (status = 404, description = "Workflow not found", body = ErrorResponse),
        (status = 422, description = "Unknown workflow key", body = ValidationErrorResponse),
    ),
    tag = "workflows"
)]
pub async fn get_description(
    State(state): State<AppState>,
    WorkflowKeyPath(key): WorkflowKeyPath,
) -> Result<Json<WorkflowDescription>, ApiError> {
    let description = state.service.describe(key).map_err(|e| {
        tracing::debug!(workflow = %key, "{}", e);
        ApiError::from(e)
    })?;

    Ok(Json(description))
}

/// POST /execute - Execute a workflow
#[utoipa::path(
    post,
    path = "/execute",
    request_body = ExecuteRequest,
    responses(
        (status = 200, description = "Result items in display order", body = Vec<ExecuteResultItem>),
        (status = 422, description = "Invalid request body", body = ValidationErrorResponse),
        (status = 501, description = "Workflow has no executor", body = ErrorResponse),
    ),
    tag = "workflows"
)]
pub async fn execute_workflow(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ExecuteBody>,
) -> Result<Json<Vec<ExecuteResultItem>>, ApiError> {
    let req = ExecuteRequest::try_from(body)?;
    let items = state.service.execute(req.workflow_key, &req.parameters)?;

    tracing::info!(
        workflow = %req.workflow_key,
        items = items.len(),
        "Workflow executed"
    );

    Ok(Json(items))
}
