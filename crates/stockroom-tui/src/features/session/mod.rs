//! Session controller.
//!
//! The only code that switches between the credential and inventory
//! screens. It reacts to values reported by the auth gateway subscription
//! and never calls the gateway itself.

use stockroom_core::models::Session;

use crate::credentials::CredentialState;
use crate::effects::UiEffect;
use crate::inventory::{self, InventoryState};
use crate::state::{Screen, TuiState};

/// Records the reported session and mounts the matching screen.
///
/// A republished session for the same user (token refresh) keeps the
/// current inventory screen. Any other change mounts a fresh screen, so
/// results still in flight for the previous one are dropped by mount id.
pub fn apply_session(tui: &mut TuiState, session: Option<Session>) -> Vec<UiEffect> {
    let same_user = match (&tui.session, &session) {
        (Some(old), Some(new)) => old.uid == new.uid,
        _ => false,
    };
    tui.session = session;

    let on_inventory = matches!(tui.screen, Screen::Inventory(_));
    match (tui.session.as_ref(), on_inventory) {
        (None, false) => vec![],
        (None, true) => {
            tracing::info!("Signed out");
            tui.screen = Screen::Credentials(CredentialState::new());
            vec![]
        }
        (Some(_), true) if same_user => vec![],
        (Some(session), _) => {
            tracing::info!(uid = %session.uid, "Session started");
            let mut state = InventoryState::new(tui.task_seq.next_mount());
            let load = inventory::initial_load(&mut state, &mut tui.task_seq);
            tui.screen = Screen::Inventory(state);
            vec![load]
        }
    }
}
