// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the Workflow Hub API.
// It can be used by both the API server (for Swagger UI)
// and the export-openapi binary (for static spec generation).

use crate::api;
use crate::api::{ErrorResponse, ValidationErrorResponse, ValidationIssue};
use utoipa::OpenApi;
use wfhub_core::{ExecuteResultItem, ResultKind, WorkflowDescription, WorkflowKey, WorkflowOption};

/// OpenAPI documentation for the Workflow Hub API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::workflows::list_workflows,
        api::workflows::get_description,
        api::workflows::execute_workflow,
    ),
    components(
        schemas(
            WorkflowKey, WorkflowOption, WorkflowDescription,
            ExecuteResultItem, ResultKind,
            api::workflows::ExecuteRequest,
            ErrorResponse, ValidationErrorResponse, ValidationIssue,
        )
    ),
    tags(
        (name = "workflows", description = "Workflow catalog and execution endpoints")
    ),
    info(
        title = "Workflow Hub API",
        version = "0.1.0",
        description = "API for listing, describing and executing catalog workflows",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> serde_json::Result<String> {
        Self::openapi().to_pretty_json()
    }
}
