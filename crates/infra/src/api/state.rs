//! Device state from configuration

use deferral_core::StateOverridesProvider;
use deferral_domain::{StateConfig, StateOverrides};

/// State provider that reports a fixed snapshot taken from [`StateConfig`]
#[derive(Debug, Clone)]
pub struct StaticStateOverrides {
    platform: String,
    overrides: StateOverrides,
}

impl StaticStateOverrides {
    pub fn new(config: &StateConfig) -> Self {
        Self {
            platform: config.platform.clone(),
            overrides: StateOverrides {
                app_version: config.app_version.clone(),
                sdk_version: config.sdk_version.clone(),
                notification_opt_in: config.notification_opt_in,
                locale_language: config.locale_language.clone(),
                locale_country: config.locale_country.clone(),
            },
        }
    }
}

impl From<&StateConfig> for StaticStateOverrides {
    fn from(config: &StateConfig) -> Self {
        Self::new(config)
    }
}

impl StateOverridesProvider for StaticStateOverrides {
    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn state_overrides(&self) -> StateOverrides {
        self.overrides.clone()
    }
}
