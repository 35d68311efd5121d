//! Application constants

/// API gateway base URL. Overridable at compile time for non-local deployments.
pub const API_BASE: &str = match option_env!("INFRAMIND_API_BASE") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

// localStorage keys
pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const AUTH_USER_KEY: &str = "auth_user";
pub const OAUTH_STATE_KEY: &str = "oauth_state";
pub const OAUTH_PROVIDER_KEY: &str = "oauth_provider";

// UI constants
pub const RESOURCE_PAGE_SIZE: u32 = 25;
pub const FILTER_DEBOUNCE_MS: u32 = 400;
pub const TOAST_DISMISS_MS: u32 = 5000;

/// Cloud providers the connect form offers.
pub const SUPPORTED_PROVIDERS: &[&str] = &["aws", "azure", "gcp"];

/// OAuth identity providers offered on the sign-in page.
pub const OAUTH_PROVIDERS: &[&str] = &["google", "github"];
