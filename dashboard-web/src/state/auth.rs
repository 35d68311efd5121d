//! Session state management.
//!
//! Two states: Anonymous (`user` and `token` both absent) and Authenticated
//! (both present). Login, registration and the OAuth exchange are the only
//! transitions in; logout and a failed hydration are the transitions out.
//! The session is mirrored to localStorage so a reload keeps the user
//! signed in; there is no refresh or expiry timer, a stale token surfaces
//! as a 401 on the next call.

use leptos::prelude::*;
use shared::dto::auth::{
    AuthPayload, LoginRequest, OAuthCallbackRequest, RegisterRequest, User,
};

use crate::api::{ApiClient, ApiError};
use crate::services::storage;
use crate::utils::constants::{
    AUTH_TOKEN_KEY, AUTH_USER_KEY, OAUTH_PROVIDER_KEY, OAUTH_STATE_KEY,
};
use crate::utils::url::redirect_to;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Global auth context: the session signal plus the API client the session
/// feeds its token into.
#[derive(Clone)]
pub struct AuthContext {
    client: ApiClient,
    session: RwSignal<Session>,
}

impl AuthContext {
    pub fn new(client: ApiClient) -> Self {
        let session = hydrate_session();
        if let Some(token) = &session.token {
            client.set_token(token);
        }
        Self {
            client,
            session: RwSignal::new(session),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub async fn login(&self, request: LoginRequest) -> Result<(), ApiError> {
        let payload = self.client.login(&request).await?;
        self.establish(payload)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        let payload = self.client.register(&request).await?;
        self.establish(payload)
    }

    /// Start the OAuth hop: stash the CSRF state, then leave the SPA for the
    /// provider's authorization page. The session transition happens later,
    /// in [`AuthContext::complete_oauth`], once the provider redirects back.
    pub async fn login_with_oauth(&self, provider: &str) -> Result<(), ApiError> {
        let authorize = self.client.oauth_authorize(provider).await?;
        storage::save_raw(OAUTH_STATE_KEY, &authorize.state).map_err(ApiError::Storage)?;
        storage::save_raw(OAUTH_PROVIDER_KEY, provider).map_err(ApiError::Storage)?;
        log::info!("redirecting to {} authorization", provider);
        redirect_to(&authorize.authorization_url);
        Ok(())
    }

    /// Consume the provider redirect on the callback route.
    pub async fn complete_oauth(&self, code: &str, state: &str) -> Result<(), ApiError> {
        let stored_state = storage::load_raw(OAUTH_STATE_KEY);
        if stored_state.as_deref() != Some(state) {
            return Err(ApiError::Backend("OAuth state mismatch".to_string()));
        }
        let provider = storage::load_raw(OAUTH_PROVIDER_KEY)
            .ok_or_else(|| ApiError::Backend("no OAuth flow in progress".to_string()))?;

        let request = OAuthCallbackRequest {
            provider,
            code: code.to_string(),
            state: state.to_string(),
        };
        let mut payload = self.client.oauth_callback(&request).await?;

        // Some identity backends return only the token from the exchange;
        // fetch the profile with it before establishing the session.
        if payload.user.is_none() {
            if let Some(token) = &payload.access_token {
                self.client.set_token(token);
                payload.user = Some(self.client.profile().await?);
            }
        }

        storage::remove(OAUTH_STATE_KEY);
        storage::remove(OAUTH_PROVIDER_KEY);
        self.establish(payload)
    }

    /// Unconditional transition to Anonymous.
    pub fn logout(&self) {
        storage::remove(AUTH_TOKEN_KEY);
        storage::remove(AUTH_USER_KEY);
        self.client.clear_token();
        self.session.set(Session::default());
        log::info!("session cleared");
    }

    /// Persist a validated payload and flip to Authenticated. A payload
    /// missing token or user fails without touching existing state.
    fn establish(&self, payload: AuthPayload) -> Result<(), ApiError> {
        let (token, user) = payload
            .into_session_parts()
            .map_err(|reason| ApiError::Decode(reason.to_string()))?;

        storage::save_raw(AUTH_TOKEN_KEY, &token).map_err(ApiError::Storage)?;
        storage::save_json(AUTH_USER_KEY, &user).map_err(ApiError::Storage)?;
        self.client.set_token(&token);
        self.session.set(Session {
            user: Some(user),
            token: Some(token),
        });
        Ok(())
    }
}

/// Decide whether a persisted `(token, user_json)` pair still forms a valid
/// session. Any missing piece or parse failure reads as Anonymous.
fn parse_stored_session(token: Option<String>, user_json: Option<String>) -> Option<(String, User)> {
    let token = token.filter(|t| !t.is_empty())?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some((token, user))
}

/// Rebuild the session from localStorage at startup. Corrupt or partial
/// state self-heals: the keys are cleared and the app starts Anonymous.
fn hydrate_session() -> Session {
    let token = storage::load_raw(AUTH_TOKEN_KEY);
    let user_json = storage::load_raw(AUTH_USER_KEY);
    let had_stored_state = token.is_some() || user_json.is_some();

    match parse_stored_session(token, user_json) {
        Some((token, user)) => {
            log::info!("restored session for {}", user.email);
            Session {
                user: Some(user),
                token: Some(token),
            }
        }
        None => {
            if had_stored_state {
                log::warn!("stored session unreadable, resetting to anonymous");
                storage::remove(AUTH_TOKEN_KEY);
                storage::remove(AUTH_USER_KEY);
            }
            Session::default()
        }
    }
}

pub fn provide_auth_context(client: ApiClient) -> AuthContext {
    let context = AuthContext::new(client);
    provide_context(context.clone());
    context
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::auth::UserRole;

    fn stored_user_json() -> String {
        r#"{"id":"u1","email":"admin@demo.com","name":"admin","role":"admin","organization":"org1"}"#
            .to_string()
    }

    #[test]
    fn valid_stored_pair_restores_session() {
        let (token, user) =
            parse_stored_session(Some("t1".into()), Some(stored_user_json())).unwrap();
        assert_eq!(token, "t1");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.organization.as_deref(), Some("org1"));
    }

    #[test]
    fn corrupted_user_json_reads_as_anonymous() {
        assert!(parse_stored_session(Some("t1".into()), Some("{not json".into())).is_none());
        assert!(parse_stored_session(Some("t1".into()), Some(String::new())).is_none());
    }

    #[test]
    fn missing_either_key_reads_as_anonymous() {
        assert!(parse_stored_session(None, Some(stored_user_json())).is_none());
        assert!(parse_stored_session(Some("t1".into()), None).is_none());
        assert!(parse_stored_session(Some(String::new()), Some(stored_user_json())).is_none());
    }

    #[test]
    fn session_authentication_requires_both_parts() {
        let anonymous = Session::default();
        assert!(!anonymous.is_authenticated());

        let token_only = Session {
            user: None,
            token: Some("t1".into()),
        };
        assert!(!token_only.is_authenticated());

        let (token, user) =
            parse_stored_session(Some("t1".into()), Some(stored_user_json())).unwrap();
        let full = Session {
            user: Some(user),
            token: Some(token),
        };
        assert!(full.is_authenticated());
    }
}
