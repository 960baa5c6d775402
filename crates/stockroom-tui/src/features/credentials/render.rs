//! Credential screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AuthMode, CredentialField, CredentialState};
use crate::overlays::render_utils::{
    FieldLine, InputHint, OverlayConfig, render_field_line, render_overlay, render_separator,
};

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 9;
const LABEL_WIDTH: usize = 8;

/// Renders the sign-in/registration form centered in `area`.
pub fn render_credentials(frame: &mut Frame, state: &CredentialState, area: Rect) {
    let switch_action = match state.mode {
        AuthMode::SignIn => "register instead",
        AuthMode::Register => "sign in instead",
    };
    let hints = [
        InputHint::new("Enter", state.mode.title()),
        InputHint::new("Tab", "next field"),
        InputHint::new("Ctrl+R", switch_action),
        InputHint::new("Esc", "quit"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: state.mode.title(),
            border_color: Color::Cyan,
            width: FORM_WIDTH,
            height: FORM_HEIGHT,
            hints: &hints,
        },
    );
    let body = layout.body;

    let fields = [
        (CredentialField::Email, "Email", state.email.as_str(), "you@example.com", false),
        (CredentialField::Password, "Password", state.password.as_str(), "", true),
    ];
    for (row, (field, label, value, placeholder, masked)) in fields.into_iter().enumerate() {
        if row as u16 >= body.height {
            break;
        }
        let line_area = Rect::new(body.x, body.y + row as u16, body.width, 1);
        render_field_line(
            frame,
            line_area,
            &FieldLine {
                label,
                value,
                placeholder,
                focused: state.focus == field,
                masked,
                accent: Color::Cyan,
            },
            LABEL_WIDTH,
        );
    }

    render_separator(frame, body, 2);

    if body.height > 3 {
        let status = if state.is_pending() {
            let text = match state.mode {
                AuthMode::SignIn => "Signing in…",
                AuthMode::Register => "Creating account…",
            };
            Span::styled(text, Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "Use the email and password of your stockroom account",
                Style::default().fg(Color::DarkGray),
            )
        };
        let status_area = Rect::new(body.x, body.y + 3, body.width, 1);
        frame.render_widget(Paragraph::new(Line::from(status)), status_area);
    }
}
