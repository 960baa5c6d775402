//! Credential screen feature slice.
//!
//! Email/password form with a sign-in and a registration mode. Submitting
//! emits an auth effect; the screen switch itself is driven by the session
//! subscription, not by the result of that effect.

mod render;
mod state;
mod update;

pub use render::render_credentials;
pub use state::{AuthMode, CredentialField, CredentialState};
pub use update::{handle_auth_completed, handle_key, handle_paste};
