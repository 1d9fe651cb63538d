//! Wire encoding for resolution requests and decisions

use deferral_domain::constants::{
    ACCEPT_AIRSHIP_JSON, CONTENT_TYPE_JSON, HEADER_ACCEPT, HEADER_AUTHORIZATION,
    HEADER_CONTENT_TYPE,
};
use deferral_domain::{
    AttributeUpdate, AuthToken, ClientError, DeferredScheduleResult, HttpMethod, HttpRequest,
    ResolutionRequest, StateOverrides, TagGroupsMutation, TriggerContext,
};
use serde::Serialize;

use super::ports::StateOverridesProvider;

#[derive(Debug, Serialize)]
struct ResolutionBody<'a> {
    platform: String,
    channel_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger: Option<&'a TriggerContext>,
    tag_overrides: Vec<TagGroupsMutation>,
    attribute_overrides: Vec<AttributeUpdate>,
    state_overrides: StateOverrides,
}

/// Serialize the request body
///
/// Overrides are collapsed before encoding; the device state is read from
/// `state` at call time.
///
/// # Errors
///
/// Returns `ClientError::InvalidRequest` if the body cannot be encoded.
pub fn encode_body(
    request: &ResolutionRequest,
    state: &dyn StateOverridesProvider,
) -> Result<Vec<u8>, ClientError> {
    let body = ResolutionBody {
        platform: state.platform(),
        channel_id: request.channel_id(),
        trigger: request.trigger_context(),
        tag_overrides: TagGroupsMutation::collapse(request.tag_overrides()),
        attribute_overrides: AttributeUpdate::collapse(request.attribute_overrides()),
        state_overrides: state.state_overrides(),
    };

    serde_json::to_vec(&body)
        .map_err(|e| ClientError::InvalidRequest(format!("failed to encode body: {e}")))
}

/// Outbound request for one attempt
pub fn build_request(url: &str, token: &AuthToken, body: Vec<u8>) -> HttpRequest {
    HttpRequest::new(HttpMethod::Post, url)
        .header(HEADER_AUTHORIZATION, token.bearer())
        .header(HEADER_ACCEPT, ACCEPT_AIRSHIP_JSON)
        .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
        .body(body)
}

/// Parse a success body into a decision
///
/// # Errors
///
/// Returns `ClientError::InvalidResponse` if the body is not a valid decision.
pub fn decode_result(body: &[u8]) -> Result<DeferredScheduleResult, ClientError> {
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to parse decision: {e}")))
}
