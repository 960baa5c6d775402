//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::state::{AppState, Screen};
use crate::statusline::{StatusContext, render_status_line};
use crate::{credentials, inventory};

/// Height of the status line below the screen body.
const STATUS_HEIGHT: u16 = 1;

/// Rows available to the screen body for a terminal of `height` rows.
pub fn body_height(height: u16) -> u16 {
    height.saturating_sub(STATUS_HEIGHT)
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let state = &app.tui;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    match &state.screen {
        Screen::Credentials(form) => credentials::render_credentials(frame, form, chunks[0]),
        Screen::Inventory(inventory_state) => inventory::render_inventory(
            frame,
            inventory_state,
            chunks[0],
            state.settings.report_remote_failures,
        ),
    }

    let account = state
        .session
        .as_ref()
        .and_then(|session| session.email.as_deref());
    render_status_line(
        &state.status,
        &StatusContext {
            pending: state.pending_requests(),
            spinner_frame: state.spinner_frame,
            account,
        },
        frame,
        chunks[1],
    );

    // Alert draws last so it sits above any editor.
    if let Some(alert) = &app.alert {
        alert.render(frame, area);
    }
}
