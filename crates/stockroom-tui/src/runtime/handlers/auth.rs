//! Sign-in and registration handlers.
//!
//! A successful call publishes the session through the gateway; the inbox
//! only receives the completion so the form can report it.

use stockroom_core::backend::AuthGateway;

use crate::common::RequestId;
use crate::credentials::AuthMode;
use crate::events::UiEvent;

/// Runs a sign-in or registration.
pub async fn authenticate(
    gateway: AuthGateway,
    req: RequestId,
    mode: AuthMode,
    email: String,
    password: String,
) -> UiEvent {
    let result = match mode {
        AuthMode::SignIn => gateway.sign_in(&email, &password).await,
        AuthMode::Register => gateway.register(&email, &password).await,
    };
    let result = result.map(|_| ()).map_err(|error| {
        tracing::warn!(
            op = mode.title(),
            kind = %error.kind,
            error = %error,
            "Authentication failed"
        );
        error.to_string()
    });
    UiEvent::AuthCompleted { req, mode, result }
}
