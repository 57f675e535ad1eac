// Workflow Hub core
//
// This crate holds everything the HTTP layer delegates to:
// - WorkflowKey: the closed set of workflows and their display names
// - WorkflowCatalog: description metadata loaded once from a JSON file
// - StubExecutor: key -> handler dispatch producing canned result items
//
// Nothing in here knows about HTTP. The control plane builds a catalog and an
// executor at startup and shares them read-only across requests.

pub mod catalog;
pub mod error;
pub mod executor;
pub mod params;
pub mod workflow;

pub use catalog::{WorkflowCatalog, WorkflowDescription};
pub use error::{CatalogError, ExecutionError};
pub use executor::{
    CannedWorkflow, ExecuteResultItem, Parameters, ResultKind, StubExecutor, WorkflowHandler,
};
pub use params::render_parameters;
pub use workflow::{ParseWorkflowKeyError, WorkflowKey, WorkflowOption};
