use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// User record as the auth service reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendUser {
    pub user_id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Login / registration / OAuth-exchange response body.
///
/// Both fields are optional on the wire; [`AuthPayload::into_session_parts`]
/// rejects a payload missing either one so no partial session can form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<BackendUser>,
}

impl AuthPayload {
    /// Split into `(token, user)` or report what was missing.
    pub fn into_session_parts(self) -> Result<(String, User), &'static str> {
        let token = match self.access_token {
            Some(t) if !t.is_empty() => t,
            _ => return Err("auth response missing access_token"),
        };
        let user = match self.user {
            Some(u) => User::from_backend(u),
            None => return Err("auth response missing user"),
        };
        Ok((token, user))
    }
}

/// Role granted to the signed-in user, as the dashboard understands it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Viewer,
}

impl UserRole {
    /// Collapse the auth service's role list to a single dashboard role.
    /// Any admin-flavored role wins, then viewer, then plain user.
    pub fn from_backend_roles(roles: &[String]) -> Self {
        if roles.iter().any(|r| r == "admin" || r == "super_admin") {
            UserRole::Admin
        } else if roles.iter().any(|r| r == "viewer") {
            UserRole::Viewer
        } else {
            UserRole::User
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
            UserRole::Viewer => "Viewer",
        }
    }
}

/// User identity as held by the dashboard session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    pub fn from_backend(backend: BackendUser) -> Self {
        Self {
            id: backend.user_id,
            email: backend.email,
            name: backend.username,
            role: UserRole::from_backend_roles(&backend.roles),
            organization: backend.org_id,
            created_at: backend.created_at,
        }
    }
}

/// Response to `GET /auth/oauth/{provider}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthAuthorizeResponse {
    pub authorization_url: String,
    pub state: String,
}

/// Body for `POST /auth/oauth/callback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthCallbackRequest {
    pub provider: String,
    pub code: String,
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_backend_user() -> BackendUser {
        BackendUser {
            user_id: "u1".into(),
            email: "admin@demo.com".into(),
            username: "admin".into(),
            roles: vec!["super_admin".into()],
            org_id: Some("org1".into()),
            created_at: None,
        }
    }

    #[test]
    fn payload_maps_to_session_parts() {
        let payload = AuthPayload {
            access_token: Some("t1".into()),
            user: Some(demo_backend_user()),
        };
        let (token, user) = payload.into_session_parts().unwrap();
        assert_eq!(token, "t1");
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "admin");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.organization.as_deref(), Some("org1"));
    }

    #[test]
    fn payload_without_token_is_rejected() {
        let payload = AuthPayload {
            access_token: None,
            user: Some(demo_backend_user()),
        };
        assert!(payload.into_session_parts().is_err());

        let payload = AuthPayload {
            access_token: Some(String::new()),
            user: Some(demo_backend_user()),
        };
        assert!(payload.into_session_parts().is_err());
    }

    #[test]
    fn payload_without_user_is_rejected() {
        let payload = AuthPayload {
            access_token: Some("t1".into()),
            user: None,
        };
        assert!(payload.into_session_parts().is_err());
    }

    #[test]
    fn role_mapping() {
        let roles = |rs: &[&str]| rs.iter().map(|r| r.to_string()).collect::<Vec<_>>();
        assert_eq!(
            UserRole::from_backend_roles(&roles(&["super_admin"])),
            UserRole::Admin
        );
        assert_eq!(
            UserRole::from_backend_roles(&roles(&["viewer", "admin"])),
            UserRole::Admin
        );
        assert_eq!(
            UserRole::from_backend_roles(&roles(&["viewer"])),
            UserRole::Viewer
        );
        assert_eq!(UserRole::from_backend_roles(&roles(&["ops"])), UserRole::User);
        assert_eq!(UserRole::from_backend_roles(&[]), UserRole::User);
    }

    #[test]
    fn user_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
    }
}
