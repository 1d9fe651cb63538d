//! Resolution request

use crate::errors::{DeferralError, Result};
use crate::types::attributes::AttributeUpdate;
use crate::types::tags::TagGroupsMutation;
use crate::types::trigger::TriggerContext;

/// Everything needed to resolve one deferred schedule
///
/// Built once per resolve call through [`ResolutionRequest::builder`] and not
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionRequest {
    url: String,
    channel_id: String,
    trigger_context: Option<TriggerContext>,
    tag_overrides: Vec<TagGroupsMutation>,
    attribute_overrides: Vec<AttributeUpdate>,
}

impl ResolutionRequest {
    pub fn builder(url: impl Into<String>, channel_id: impl Into<String>) -> ResolutionRequestBuilder {
        ResolutionRequestBuilder {
            url: url.into(),
            channel_id: channel_id.into(),
            trigger_context: None,
            tag_overrides: Vec::new(),
            attribute_overrides: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn trigger_context(&self) -> Option<&TriggerContext> {
        self.trigger_context.as_ref()
    }

    pub fn tag_overrides(&self) -> &[TagGroupsMutation] {
        &self.tag_overrides
    }

    pub fn attribute_overrides(&self) -> &[AttributeUpdate] {
        &self.attribute_overrides
    }
}

/// Builder for [`ResolutionRequest`]
#[derive(Debug, Clone)]
pub struct ResolutionRequestBuilder {
    url: String,
    channel_id: String,
    trigger_context: Option<TriggerContext>,
    tag_overrides: Vec<TagGroupsMutation>,
    attribute_overrides: Vec<AttributeUpdate>,
}

impl ResolutionRequestBuilder {
    pub fn trigger_context(mut self, context: TriggerContext) -> Self {
        self.trigger_context = Some(context);
        self
    }

    pub fn tag_overrides(mut self, overrides: Vec<TagGroupsMutation>) -> Self {
        self.tag_overrides = overrides;
        self
    }

    pub fn attribute_overrides(mut self, overrides: Vec<AttributeUpdate>) -> Self {
        self.attribute_overrides = overrides;
        self
    }

    /// Build the request
    ///
    /// # Errors
    ///
    /// Returns `DeferralError::InvalidInput` if the URL or channel ID is empty.
    pub fn build(self) -> Result<ResolutionRequest> {
        if self.url.trim().is_empty() {
            return Err(DeferralError::InvalidInput("resolution URL is empty".into()));
        }
        if self.channel_id.trim().is_empty() {
            return Err(DeferralError::InvalidInput("channel ID is empty".into()));
        }

        Ok(ResolutionRequest {
            url: self.url,
            channel_id: self.channel_id,
            trigger_context: self.trigger_context,
            tag_overrides: self.tag_overrides,
            attribute_overrides: self.attribute_overrides,
        })
    }
}
