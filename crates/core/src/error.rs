// Error types for catalog loading and workflow execution

use std::path::PathBuf;
use thiserror::Error;

use crate::workflow::WorkflowKey;

/// Errors raised while loading or querying the workflow catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read workflow catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("Failed to parse workflow catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog JSON is valid but the top level is not an object
    #[error("Workflow catalog must be a JSON object keyed by workflow key, found {0}")]
    NotAnObject(&'static str),

    /// Key is valid but has no description in the loaded data
    #[error("Workflow not found: {0}")]
    NotFound(WorkflowKey),
}

impl CatalogError {
    /// Create a read error for the given path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Read {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the stub executor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// No handler is registered for the key
    #[error("No executor registered for workflow '{0}'")]
    InvalidWorkflow(WorkflowKey),
}
