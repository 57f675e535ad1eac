// Workflow service - catalog lookups and stub execution
//
// Both the catalog and the executor are built once at startup and never
// mutated, so the service is shared behind an Arc without locking.

use std::sync::Arc;
use wfhub_core::{
    CatalogError, ExecuteResultItem, ExecutionError, Parameters, StubExecutor, WorkflowCatalog,
    WorkflowDescription, WorkflowKey, WorkflowOption,
};

pub struct WorkflowService {
    catalog: Arc<WorkflowCatalog>,
    executor: Arc<StubExecutor>,
}

impl WorkflowService {
    pub fn new(catalog: Arc<WorkflowCatalog>, executor: Arc<StubExecutor>) -> Self {
        Self { catalog, executor }
    }

    /// Service over a catalog with the built-in canned handlers
    pub fn with_builtin_executor(catalog: WorkflowCatalog) -> Self {
        Self::new(Arc::new(catalog), Arc::new(StubExecutor::with_builtins()))
    }

    /// List all workflows in declaration order
    pub fn list(&self) -> Vec<WorkflowOption> {
        self.catalog.list()
    }

    /// Get the description of a workflow
    pub fn describe(&self, key: WorkflowKey) -> Result<WorkflowDescription, CatalogError> {
        self.catalog.describe(key).cloned()
    }

    /// Run the stub executor for a workflow
    pub fn execute(
        &self,
        key: WorkflowKey,
        params: &Parameters,
    ) -> Result<Vec<ExecuteResultItem>, ExecutionError> {
        self.executor.execute(key, params)
    }

    /// Number of descriptions loaded from the catalog file
    pub fn descriptions_loaded(&self) -> usize {
        self.catalog.len()
    }
}
