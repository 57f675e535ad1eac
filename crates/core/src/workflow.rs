// Workflow key definitions
//
// The set of workflows is closed: every key is known at compile time and carries
// a display name. Declaration order is the order clients see in listings.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Identifier of a built-in workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum WorkflowKey {
    #[serde(rename = "workflow_1")]
    Workflow1,
    #[serde(rename = "workflow_2")]
    Workflow2,
    #[serde(rename = "workflow_3")]
    Workflow3,
}

impl WorkflowKey {
    /// All keys in declaration order
    pub const ALL: [WorkflowKey; 3] = [
        WorkflowKey::Workflow1,
        WorkflowKey::Workflow2,
        WorkflowKey::Workflow3,
    ];

    /// Wire token for this key (e.g. "workflow_1")
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowKey::Workflow1 => "workflow_1",
            WorkflowKey::Workflow2 => "workflow_2",
            WorkflowKey::Workflow3 => "workflow_3",
        }
    }

    /// Human-readable name shown in listings and execution output
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkflowKey::Workflow1 => "Workflow 1",
            WorkflowKey::Workflow2 => "Workflow 2",
            WorkflowKey::Workflow3 => "Workflow 3",
        }
    }

    /// Iterate over every key in declaration order
    pub fn iter() -> impl Iterator<Item = WorkflowKey> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for WorkflowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkflowKey {
    type Err = ParseWorkflowKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseWorkflowKeyError {
                input: s.to_string(),
            })
    }
}

/// Returned when a string is not one of the workflow key tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWorkflowKeyError {
    pub input: String,
}

impl ParseWorkflowKeyError {
    /// Message listing the accepted tokens, e.g.
    /// "Input should be 'workflow_1', 'workflow_2' or 'workflow_3'"
    pub fn expected_message() -> String {
        let quoted: Vec<String> = WorkflowKey::iter()
            .map(|key| format!("'{}'", key.as_str()))
            .collect();
        match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("Input should be {} or {}", rest.join(", "), last)
            }
            Some((last, _)) => format!("Input should be {}", last),
            None => "Input should be a workflow key".to_string(),
        }
    }
}

impl std::fmt::Display for ParseWorkflowKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Self::expected_message())
    }
}

impl std::error::Error for ParseWorkflowKeyError {}

/// Entry of the workflow listing: key token plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WorkflowOption {
    /// Workflow key token.
    #[cfg_attr(feature = "openapi", schema(example = "workflow_1"))]
    pub key: String,
    /// Display name of the workflow.
    #[cfg_attr(feature = "openapi", schema(example = "Workflow 1"))]
    pub value: String,
}

impl From<WorkflowKey> for WorkflowOption {
    fn from(key: WorkflowKey) -> Self {
        Self {
            key: key.as_str().to_string(),
            value: key.display_name().to_string(),
        }
    }
}
