//! Firebase backend: Identity Toolkit auth and Cloud Firestore item store.
//!
//! Both clients speak the public REST APIs with `reqwest`. Base URLs come
//! from `FirebaseConfig` so tests and emulators can point them elsewhere.

mod auth;
mod firestore;
mod values;

pub use auth::FirebaseAuth;
pub use firestore::FirestoreStore;
use serde::de::DeserializeOwned;

use super::{BackendError, BackendResult, classify_reqwest_error};

const USER_AGENT: &str = concat!("stockroom/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client for both Firebase clients.
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialized.
pub fn http_client() -> anyhow::Result<reqwest::Client> {
    use anyhow::Context;

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

async fn send(builder: reqwest::RequestBuilder) -> BackendResult<reqwest::Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| classify_reqwest_error(&e))?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::http_status(status.as_u16(), &body));
    }
    Ok(response)
}

async fn send_json<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> BackendResult<T> {
    send(builder)
        .await?
        .json::<T>()
        .await
        .map_err(|e| classify_reqwest_error(&e))
}
