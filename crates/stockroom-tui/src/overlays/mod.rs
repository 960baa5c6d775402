//! Modal UI components that temporarily take over keyboard input.
//!
//! ## Module Structure
//!
//! - `alert.rs`: Blocking alert (validation and auth failures)
//! - `item_editor.rs`: Add/edit item form shown over the inventory list
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod alert;
pub mod item_editor;
pub mod render_utils;

pub use alert::Alert;
pub use item_editor::{EditorField, ItemEditorState};

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
    /// The user confirmed the form; the owner decides what happens next.
    Submit,
}
