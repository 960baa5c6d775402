//! Effect handlers for the TUI runtime.
//!
//! Handlers perform I/O and never touch UI state. Each one is a pure
//! async function returning the `UiEvent` that reports its outcome; the
//! runtime spawns it and posts the event to the inbox.
//!
//! ```ignore
//! // Handler: pure async, returns UiEvent
//! pub async fn load_items(store: Arc<dyn ItemStore>, ...) -> UiEvent { ... }
//!
//! // Runtime: spawns and sends to inbox
//! self.spawn_effect(move || handlers::load_items(store, ...));
//! ```

pub mod auth;
pub mod store;

pub use auth::*;
pub use store::*;
