//! Backend collaborator contract.
//!
//! The managed backend is a black box behind two narrow traits:
//! - `AuthBackend`: credential verification and token refresh
//! - `ItemStore`: a flat document collection with create/list/update/delete
//!
//! `AuthGateway` wraps an `AuthBackend` and owns the process-wide session
//! state, notifying subscribers on sign-in and sign-out.
//!
//! ## Module Structure
//!
//! - `error.rs`: `BackendError` and result alias
//! - `gateway.rs`: `AuthGateway` session hub and `AuthSubscription` handle
//! - `firebase/`: Identity Toolkit and Firestore REST implementations

mod error;
pub mod firebase;
mod gateway;

use async_trait::async_trait;
pub use error::{BackendError, BackendErrorKind, BackendResult};
pub(crate) use error::classify_reqwest_error;
pub use gateway::{AuthGateway, AuthSubscription, TOKEN_REFRESH_MARGIN};

use crate::models::{Item, ItemFields, ItemId, Session};

/// Credential verification backend.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session>;
    async fn register(&self, email: &str, password: &str) -> BackendResult<Session>;
    /// Exchanges a refresh token for a new session with the same uid.
    async fn refresh(&self, refresh_token: &str) -> BackendResult<Session>;
}

/// Document collection holding inventory items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list_all(&self, collection: &str) -> BackendResult<Vec<Item>>;
    async fn create(&self, collection: &str, fields: &ItemFields) -> BackendResult<ItemId>;
    async fn update(&self, collection: &str, id: &ItemId, fields: &ItemFields)
    -> BackendResult<()>;
    async fn delete(&self, collection: &str, id: &ItemId) -> BackendResult<()>;
}
