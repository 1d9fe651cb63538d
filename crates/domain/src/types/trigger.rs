//! Trigger context
//!
//! The event that caused a deferred schedule to be evaluated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of trigger that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Foreground,
    Background,
    RegionEnter,
    RegionExit,
    CustomEventCount,
    CustomEventValue,
    Screen,
    AppInit,
    ActiveSession,
    Version,
    FeatureFlagInteraction,
}

/// Trigger descriptor sent with a resolution request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerContext {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub goal: f64,
    /// Event payload that satisfied the trigger. `null` when the trigger has
    /// no associated event.
    #[serde(default)]
    pub event: Value,
}

impl TriggerContext {
    pub fn new(trigger_type: TriggerType, goal: f64, event: Value) -> Self {
        Self { trigger_type, goal, event }
    }
}
