use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::send_json;
use crate::backend::{AuthBackend, BackendError, BackendResult};
use crate::config::FirebaseConfig;
use crate::models::Session;

/// Email/password auth against the Identity Toolkit REST API.
pub struct FirebaseAuth {
    http: reqwest::Client,
    api_key: String,
    auth_base_url: String,
    token_base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    id_token: String,
    refresh_token: String,
    local_id: String,
    email: Option<String>,
    expires_in: String,
}

/// Secure Token API uses snake_case field names.
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    user_id: String,
    expires_in: String,
}

impl FirebaseAuth {
    pub fn new(config: &FirebaseConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            auth_base_url: config.effective_auth_base_url(),
            token_base_url: config.effective_token_base_url(),
        }
    }

    async fn password_flow(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        let url = format!("{}/v1/accounts:{endpoint}", self.auth_base_url);
        tracing::debug!(endpoint, "identity toolkit request");
        let response: PasswordResponse = send_json(
            self.http
                .post(url)
                .query(&[("key", self.api_key.as_str())])
                .json(&PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                }),
        )
        .await?;

        Ok(Session {
            uid: response.local_id,
            email: response.email.or_else(|| Some(email.to_string())),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at: expires_at(&response.expires_in)?,
        })
    }
}

fn expires_at(expires_in: &str) -> BackendResult<Instant> {
    let secs: u64 = expires_in
        .trim()
        .parse()
        .map_err(|e| BackendError::parse(format!("Invalid expiresIn {expires_in:?}: {e}")))?;
    Ok(Instant::now() + Duration::from_secs(secs))
}

#[async_trait]
impl AuthBackend for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        self.password_flow("signInWithPassword", email, password).await
    }

    async fn register(&self, email: &str, password: &str) -> BackendResult<Session> {
        self.password_flow("signUp", email, password).await
    }

    async fn refresh(&self, refresh_token: &str) -> BackendResult<Session> {
        let url = format!("{}/v1/token", self.token_base_url);
        let response: RefreshResponse = send_json(
            self.http
                .post(url)
                .query(&[("key", self.api_key.as_str())])
                .form(&[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh_token),
                ]),
        )
        .await?;

        Ok(Session {
            uid: response.user_id,
            email: None,
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at: expires_at(&response.expires_in)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_at_parses_seconds() {
        let at = expires_at("3600").unwrap();
        assert!(at > Instant::now() + Duration::from_secs(3500));
    }

    #[test]
    fn test_expires_at_rejects_garbage() {
        assert!(expires_at("soon").is_err());
    }
}
