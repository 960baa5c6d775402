//! Cross-slice state mutations.
//!
//! Feature reducers return these mutations to request changes outside their
//! own slice (the alert and the status line). The main reducer applies them
//! in order.

use crate::overlays::Alert;

#[derive(Debug, PartialEq, Eq)]
pub enum StateMutation {
    /// Open the blocking alert.
    ShowAlert(Alert),
    Status(StatusMutation),
}

/// Status line mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum StatusMutation {
    Info(String),
    Error(String),
    Clear,
}
