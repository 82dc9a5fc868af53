//! Extracted model records
//!
//! Detached from any document; safe to hand to external aggregation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serializable projection of one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub namespace: String,

    /// Evaluated state; absent when the model declares none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,

    #[serde(default)]
    pub reducers: Vec<PropertyEntry>,

    #[serde(default)]
    pub effects: Vec<FlowEntry>,

    #[serde(default)]
    pub subscriptions: Vec<FlowEntry>,
}

impl ModelInfo {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            state: None,
            reducers: Vec::new(),
            effects: Vec::new(),
            subscriptions: Vec::new(),
        }
    }
}

/// One reducer: entry name and the printed value expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub name: String,
    pub source: String,
}

/// One effect or subscription, with the action types it dispatches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEntry {
    pub name: String,
    pub source: String,
    /// Source order, duplicates kept
    pub dispatches: Vec<String>,
}
