//! Authentication endpoints: login, registration, current-user hydration.
//!
//! There is no logout endpoint; ending a session is purely client-side
//! (the session store is cleared and the token simply stops being sent).

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;
use store::UserInfo;

/// Response to a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl Client {
    /// Authenticate with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", &Credentials { email, password })
            .await
    }

    /// Create a new account. New accounts start unverified and land on the
    /// pending-approval page until an admin verifies them.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        self.post_json(
            "/auth/register",
            &Registration {
                name,
                email,
                password,
            },
        )
        .await
    }

    /// Fetch the current user for the attached token.
    ///
    /// This is the hydration call the auth guard makes on every protected
    /// mount; its result overwrites the cached snapshot.
    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.get_json("/auth/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    #[test]
    fn test_login_response_shape() {
        let body = r#"{
            "token": "tok-1",
            "user": {
                "id": "u-1",
                "name": "Jane Doe",
                "email": "jane@agency.com",
                "role": "moderator",
                "is_verified": true,
                "is_suspended": false,
                "is_active": true
            }
        }"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.token, "tok-1");
        assert_eq!(parsed.user.role, Role::Moderator);
        assert!(parsed.user.is_verified);
    }

    #[test]
    fn test_user_without_role_defaults_to_user() {
        let body = r#"{"id":"u-2","name":null,"email":"a@b.co","is_verified":false}"#;
        let parsed: UserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.role, Role::User);
        assert!(!parsed.is_verified);
    }
}
