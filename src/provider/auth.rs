//! Identity operations (`/auth/v1`)

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::models::auth::{SignIn, SignUp};
use crate::provider::client::{read_json, ScopedClient};
use crate::provider::error::ProviderResult;

/// Result of sign-up or sign-in, forwarded to the client as-is.
///
/// The provider answers either with a session (which embeds the user) or, when
/// email confirmation is pending, with the bare user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthPayload {
    pub user: Option<Value>,
    pub session: Option<Value>,
}

impl AuthPayload {
    pub fn from_body(body: Value) -> Self {
        if body.get("access_token").is_some() {
            let user = body.get("user").filter(|user| !user.is_null()).cloned();
            Self {
                user,
                session: Some(body),
            }
        } else if body.get("id").is_some() {
            Self {
                user: Some(body),
                session: None,
            }
        } else {
            Self {
                user: None,
                session: None,
            }
        }
    }
}

/// The caller as resolved from a bearer credential
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl ScopedClient<'_> {
    /// Register with email/password. `username` and `role` travel as profile
    /// metadata, and `username` doubles as `full_name`.
    pub async fn sign_up(&self, signup: &SignUp) -> ProviderResult<AuthPayload> {
        let body = json!({
            "email": signup.email,
            "password": signup.password,
            "data": {
                "username": signup.username,
                "full_name": signup.username,
                "role": signup.role,
            },
        });

        debug!(email = %signup.email, "registering user with provider");
        let response = self
            .request(Method::POST, &self.auth_url("signup"))
            .json(&body)
            .send()
            .await?;

        let body: Value = read_json(response).await?;
        Ok(AuthPayload::from_body(body))
    }

    pub async fn sign_in_with_password(&self, signin: &SignIn) -> ProviderResult<AuthPayload> {
        let body = json!({
            "email": signin.email,
            "password": signin.password,
        });

        debug!(email = %signin.email, "password sign-in with provider");
        let response = self
            .request(Method::POST, &self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&body)
            .send()
            .await?;

        let body: Value = read_json(response).await?;
        Ok(AuthPayload::from_body(body))
    }

    /// Resolve the user behind the bound credential.
    ///
    /// Any rejection by the provider means "no user"; only transport failures are errors.
    pub async fn get_user(&self) -> ProviderResult<Option<User>> {
        let response = self
            .request(Method::GET, &self.auth_url("user"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "provider could not resolve a user");
            return Ok(None);
        }

        Ok(response.json::<User>().await.ok())
    }
}
