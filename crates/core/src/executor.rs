// Stub executor
//
// Execution is a dispatch from WorkflowKey to a WorkflowHandler. The built-in
// handlers return a fixed pair of items: a text line echoing the parameters and
// an image URL. A key without a handler is an error, never an empty result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ExecutionError;
use crate::params::render_parameters;
use crate::workflow::WorkflowKey;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Free-form execution parameters
pub type Parameters = Map<String, Value>;

const IMAGE_LAPTOP_DESK: &str = "https://images.unsplash.com/photo-1613616631374-121ea711cc3d?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const IMAGE_TEAM_MEETING: &str = "https://images.unsplash.com/photo-1542744173-05336fcc7ad4?q=80&w=2002&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

/// Kind of a result item, drives how clients render it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Text,
    Image,
}

/// One item of an execution result, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ExecuteResultItem {
    /// Item kind ("text" or "image").
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Text content or image URL.
    pub value: String,
}

impl ExecuteResultItem {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Text,
            value: value.into(),
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Image,
            value: url.into(),
        }
    }
}

/// Produces the result items for one workflow
pub trait WorkflowHandler: Send + Sync {
    /// Run the workflow with the supplied parameters
    fn run(&self, params: &Parameters) -> Vec<ExecuteResultItem>;
}

/// Handler returning a text echo of the parameters followed by a fixed image
#[derive(Debug, Clone)]
pub struct CannedWorkflow {
    label: &'static str,
    image_url: &'static str,
}

impl CannedWorkflow {
    pub const fn new(label: &'static str, image_url: &'static str) -> Self {
        Self { label, image_url }
    }

    /// Built-in canned output for a key
    pub fn builtin(key: WorkflowKey) -> Self {
        let image_url = match key {
            WorkflowKey::Workflow1 | WorkflowKey::Workflow2 => IMAGE_LAPTOP_DESK,
            WorkflowKey::Workflow3 => IMAGE_TEAM_MEETING,
        };
        Self::new(key.display_name(), image_url)
    }

    pub fn image_url(&self) -> &'static str {
        self.image_url
    }
}

impl WorkflowHandler for CannedWorkflow {
    fn run(&self, params: &Parameters) -> Vec<ExecuteResultItem> {
        vec![
            ExecuteResultItem::text(format!(
                "Executing {} with params: {}",
                self.label,
                render_parameters(params)
            )),
            ExecuteResultItem::image(self.image_url),
        ]
    }
}

/// Dispatch table from workflow key to handler
#[derive(Clone, Default)]
pub struct StubExecutor {
    handlers: HashMap<WorkflowKey, Arc<dyn WorkflowHandler>>,
}

impl StubExecutor {
    /// Create an executor with no handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor with a canned handler for every key
    pub fn with_builtins() -> Self {
        let mut executor = Self::new();
        for key in WorkflowKey::iter() {
            executor.register(key, CannedWorkflow::builtin(key));
        }
        executor
    }

    /// Register (or replace) the handler for a key
    pub fn register(&mut self, key: WorkflowKey, handler: impl WorkflowHandler + 'static) {
        self.handlers.insert(key, Arc::new(handler));
    }

    /// Whether a handler is registered for the key
    pub fn has(&self, key: WorkflowKey) -> bool {
        self.handlers.contains_key(&key)
    }

    /// Execute a workflow
    pub fn execute(
        &self,
        key: WorkflowKey,
        params: &Parameters,
    ) -> Result<Vec<ExecuteResultItem>, ExecutionError> {
        let handler = self
            .handlers
            .get(&key)
            .ok_or(ExecutionError::InvalidWorkflow(key))?;

        tracing::debug!(workflow = %key, param_count = params.len(), "Executing workflow");
        Ok(handler.run(params))
    }
}

impl std::fmt::Debug for StubExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&WorkflowKey> = self.handlers.keys().collect();
        keys.sort_by_key(|k| k.as_str());
        f.debug_struct("StubExecutor")
            .field("handlers", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Parameters {
        match value {
            Value::Object(map) => map,
            _ => panic!("parameters must be an object"),
        }
    }

    #[test]
    fn test_every_builtin_returns_text_then_image() {
        let executor = StubExecutor::with_builtins();

        for key in WorkflowKey::iter() {
            let items = executor.execute(key, &Parameters::new()).unwrap();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].kind, ResultKind::Text);
            assert!(items[0].value.contains(key.display_name()));
            assert_eq!(items[1].kind, ResultKind::Image);
            assert!(url::Url::parse(&items[1].value).is_ok());
        }
    }

    #[test]
    fn test_text_echoes_parameters() {
        let executor = StubExecutor::with_builtins();
        let items = executor
            .execute(WorkflowKey::Workflow1, &params(json!({"x": 1})))
            .unwrap();

        assert_eq!(items[0].value, "Executing Workflow 1 with params: {'x': 1}");
        assert!(items[1]
            .value
            .starts_with("https://images.unsplash.com/photo-1613616631374-121ea711cc3d?"));
    }

    #[test]
    fn test_workflow_3_uses_its_own_image() {
        let executor = StubExecutor::with_builtins();
        let one = executor
            .execute(WorkflowKey::Workflow1, &Parameters::new())
            .unwrap();
        let two = executor
            .execute(WorkflowKey::Workflow2, &Parameters::new())
            .unwrap();
        let three = executor
            .execute(WorkflowKey::Workflow3, &Parameters::new())
            .unwrap();

        assert_eq!(one[1], two[1]);
        assert_ne!(one[1], three[1]);
        assert!(three[1].value.contains("photo-1542744173-05336fcc7ad4"));
    }

    #[test]
    fn test_missing_handler_is_an_error() {
        let mut executor = StubExecutor::new();
        executor.register(WorkflowKey::Workflow1, CannedWorkflow::builtin(WorkflowKey::Workflow1));

        assert!(executor.has(WorkflowKey::Workflow1));
        assert!(!executor.has(WorkflowKey::Workflow2));
        assert_eq!(
            executor.execute(WorkflowKey::Workflow2, &Parameters::new()),
            Err(ExecutionError::InvalidWorkflow(WorkflowKey::Workflow2))
        );
    }

    #[test]
    fn test_register_replaces_handler() {
        struct Silent;
        impl WorkflowHandler for Silent {
            fn run(&self, _params: &Parameters) -> Vec<ExecuteResultItem> {
                vec![ExecuteResultItem::text("quiet")]
            }
        }

        let mut executor = StubExecutor::with_builtins();
        executor.register(WorkflowKey::Workflow2, Silent);

        let items = executor
            .execute(WorkflowKey::Workflow2, &Parameters::new())
            .unwrap();
        assert_eq!(items, vec![ExecuteResultItem::text("quiet")]);
    }

    #[test]
    fn test_execution_is_repeatable() {
        let executor = StubExecutor::with_builtins();
        let p = params(json!({"a": [1, 2], "b": "c"}));

        let first = serde_json::to_string(&executor.execute(WorkflowKey::Workflow3, &p).unwrap())
            .unwrap();
        let second = serde_json::to_string(&executor.execute(WorkflowKey::Workflow3, &p).unwrap())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_item_wire_format() {
        let item = ExecuteResultItem::image("https://example.com/a.png");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({"type": "image", "value": "https://example.com/a.png"}));
    }
}
