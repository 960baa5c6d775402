//! Status line feature slice.
//!
//! A single row at the bottom of the screen: the latest notice on the left
//! (auth success, remote failures), activity and account on the right.
//! Notices expire on the tick after their time-to-live.

mod render;
mod state;

pub use render::{StatusContext, render_status_line};
pub use state::{NOTICE_TTL, Notice, NoticeKind, StatusLine};
