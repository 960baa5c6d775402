//! Shared leaf types for TUI features.
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod task;
pub mod text;

pub use task::{MountId, RequestId, TaskSeq};
pub use text::{mask, truncate_start_with_ellipsis, truncate_with_ellipsis};
