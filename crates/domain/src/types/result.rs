//! Decision payload returned by the deferred schedule endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resolved decision for a deferred schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredScheduleResult {
    /// Whether the channel matches the schedule's audience.
    pub is_audience_match: bool,
    /// Actions the schedule should run.
    #[serde(default)]
    pub actions: Vec<Value>,
    /// Message to display, for schedules that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl DeferredScheduleResult {
    pub fn new(is_audience_match: bool, actions: Vec<Value>) -> Self {
        Self { is_audience_match, actions, message: None }
    }
}
