//! Domain types

pub mod attributes;
pub mod http;
pub mod request;
pub mod result;
pub mod state;
pub mod tags;
pub mod token;
pub mod trigger;

pub use attributes::{AttributeAction, AttributeUpdate};
pub use http::{HttpMethod, HttpRequest, RawResponse};
pub use request::{ResolutionRequest, ResolutionRequestBuilder};
pub use result::DeferredScheduleResult;
pub use state::StateOverrides;
pub use tags::TagGroupsMutation;
pub use token::AuthToken;
pub use trigger::{TriggerContext, TriggerType};
