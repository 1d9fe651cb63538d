//! Device state snapshot sent with each resolution request

use serde::{Deserialize, Serialize};

/// Ambient device state the decision endpoint evaluates audiences against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,
    pub notification_opt_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_country: Option<String>,
}
