//! Feature slices for the TUI (state/update/render per slice).

pub mod credentials;
pub mod inventory;
pub mod session;
pub mod statusline;
