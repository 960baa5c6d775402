//! UI event types.
//!
//! All external inputs (terminal, session changes, async results) are
//! converted to `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async handlers send their result events directly to the runtime's inbox.
//! Store results carry the `MountId` and `RequestId` of the effect that
//! produced them; the reducer decides whether they still apply.

use crossterm::event::Event as CrosstermEvent;
use stockroom_core::models::{Item, ItemFields, ItemId, Session};

use crate::common::{MountId, RequestId};
use crate::credentials::AuthMode;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (redraw, notice expiry, spinner).
    Tick,

    /// Terminal size for this frame.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// The auth gateway reported a (possibly absent) session.
    SessionChanged(Option<Session>),

    /// Sign-in or registration finished.
    AuthCompleted {
        req: RequestId,
        mode: AuthMode,
        result: Result<(), String>,
    },

    /// Item store call finished.
    Store(StoreUiEvent),
}

/// Results of item store effects.
#[derive(Debug)]
pub enum StoreUiEvent {
    ItemsLoaded {
        mount: MountId,
        req: RequestId,
        items: Vec<Item>,
    },
    LoadFailed {
        mount: MountId,
        req: RequestId,
        error: String,
    },
    ItemCreated {
        mount: MountId,
        req: RequestId,
        item: Item,
    },
    CreateFailed {
        mount: MountId,
        req: RequestId,
        error: String,
    },
    ItemUpdated {
        mount: MountId,
        req: RequestId,
        id: ItemId,
        fields: ItemFields,
    },
    UpdateFailed {
        mount: MountId,
        req: RequestId,
        error: String,
    },
    ItemDeleted {
        mount: MountId,
        req: RequestId,
        id: ItemId,
    },
    DeleteFailed {
        mount: MountId,
        req: RequestId,
        error: String,
    },
}

impl StoreUiEvent {
    pub fn mount(&self) -> MountId {
        match self {
            StoreUiEvent::ItemsLoaded { mount, .. }
            | StoreUiEvent::LoadFailed { mount, .. }
            | StoreUiEvent::ItemCreated { mount, .. }
            | StoreUiEvent::CreateFailed { mount, .. }
            | StoreUiEvent::ItemUpdated { mount, .. }
            | StoreUiEvent::UpdateFailed { mount, .. }
            | StoreUiEvent::ItemDeleted { mount, .. }
            | StoreUiEvent::DeleteFailed { mount, .. } => *mount,
        }
    }
}
