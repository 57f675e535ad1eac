// Workflow catalog
//
// Descriptions are read once from a JSON file shaped like
//   { "workflow_1": { ... }, "workflow_2": { ... } }
// and never change afterwards. The list of workflows does not depend on the
// file at all: it always reflects WorkflowKey::ALL.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::workflow::{WorkflowKey, WorkflowOption};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Opaque description blob for a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema), schema(value_type = Object))]
#[serde(transparent)]
pub struct WorkflowDescription(Value);

impl WorkflowDescription {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Read-only catalog of workflow descriptions
#[derive(Debug, Clone, Default)]
pub struct WorkflowCatalog {
    descriptions: HashMap<WorkflowKey, WorkflowDescription>,
}

impl WorkflowCatalog {
    /// Load the catalog from a JSON file
    ///
    /// Fails if the file is missing, is not valid JSON, or its top level is not
    /// an object. Entries whose key is not a known workflow token are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::info!("Loading workflow catalog from: {}", path.display());

        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))?;
        let catalog = Self::from_json_str(&contents)?;

        tracing::info!(
            "Loaded {} workflow description(s) from catalog",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }

    /// Build a catalog from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let entries = match value {
            Value::Object(map) => map,
            other => return Err(CatalogError::NotAnObject(json_type_name(&other))),
        };

        let mut descriptions = HashMap::new();
        for (raw_key, description) in entries {
            let key = match raw_key.parse::<WorkflowKey>() {
                Ok(key) => key,
                Err(_) => {
                    tracing::warn!(key = %raw_key, "Ignoring unknown workflow key in catalog");
                    continue;
                }
            };
            if is_blank(&description) {
                tracing::debug!(key = %key, "Catalog entry is empty, treating as absent");
                continue;
            }
            descriptions.insert(key, WorkflowDescription::new(description));
        }

        Ok(Self { descriptions })
    }

    /// All workflows in declaration order, independent of loaded descriptions
    pub fn list(&self) -> Vec<WorkflowOption> {
        WorkflowKey::iter().map(WorkflowOption::from).collect()
    }

    /// Description for a workflow
    pub fn describe(&self, key: WorkflowKey) -> Result<&WorkflowDescription, CatalogError> {
        self.descriptions
            .get(&key)
            .ok_or(CatalogError::NotFound(key))
    }

    /// Whether a description was loaded for the key
    pub fn contains(&self, key: WorkflowKey) -> bool {
        self.descriptions.contains_key(&key)
    }

    /// Number of loaded descriptions
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

/// Empty entries (null, false, 0, "", [], {}) count as missing
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
