//! Attribute mutations

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeAction {
    Set,
    Remove,
}

/// Pending attribute edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeUpdate {
    pub action: AttributeAction,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl AttributeUpdate {
    pub fn set(key: impl Into<String>, value: impl Into<Value>, timestamp: DateTime<Utc>) -> Self {
        Self { action: AttributeAction::Set, key: key.into(), value: Some(value.into()), timestamp }
    }

    pub fn remove(key: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self { action: AttributeAction::Remove, key: key.into(), value: None, timestamp }
    }

    /// Keep only the latest update per key, in the order those updates were
    /// made.
    pub fn collapse(updates: &[AttributeUpdate]) -> Vec<AttributeUpdate> {
        let mut seen = HashSet::new();
        let mut collapsed: Vec<AttributeUpdate> = updates
            .iter()
            .rev()
            .filter(|update| seen.insert(update.key.as_str()))
            .cloned()
            .collect();
        collapsed.reverse();
        collapsed
    }
}
