//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! Remote effects are stamped with a `RequestId` (and, for store calls, the
//! issuing `MountId`) which the result event echoes back.

use stockroom_core::models::{ItemFields, ItemId};

use crate::common::{MountId, RequestId};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Verify credentials through the auth gateway.
    SignIn {
        req: RequestId,
        email: String,
        password: String,
    },

    /// Create an account through the auth gateway.
    Register {
        req: RequestId,
        email: String,
        password: String,
    },

    /// Clear the session.
    SignOut,

    /// Fetch the whole item collection.
    LoadItems { mount: MountId, req: RequestId },

    CreateItem {
        mount: MountId,
        req: RequestId,
        fields: ItemFields,
    },

    UpdateItem {
        mount: MountId,
        req: RequestId,
        id: ItemId,
        fields: ItemFields,
    },

    DeleteItem {
        mount: MountId,
        req: RequestId,
        id: ItemId,
    },
}

impl UiEffect {
    /// Returns true for effects that call the item store.
    pub fn is_store_call(&self) -> bool {
        matches!(
            self,
            UiEffect::LoadItems { .. }
                | UiEffect::CreateItem { .. }
                | UiEffect::UpdateItem { .. }
                | UiEffect::DeleteItem { .. }
        )
    }
}
