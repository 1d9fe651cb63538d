//! Protocol constants
//!
//! Wire-level values shared by the request builder, the default adapters and
//! the tests.

// Headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_APP_KEY: &str = "X-UA-App-Key";
pub const HEADER_CHANNEL_ID: &str = "X-UA-Channel-ID";

pub const ACCEPT_AIRSHIP_JSON: &str = "application/vnd.urbanairship+json; version=3;";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Status codes the resolution protocol cares about
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Total attempts per resolve call (initial send + one retry after an auth
/// rejection).
pub const MAX_RESOLVE_ATTEMPTS: u32 = 2;

// Client defaults
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "deferral/0.1";

/// Cached device tokens are refreshed this long before their stated expiry.
pub const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 30;
