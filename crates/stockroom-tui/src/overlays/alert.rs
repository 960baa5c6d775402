//! Blocking alert overlay.
//!
//! While an alert is open the next key press only dismisses it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use stockroom_core::validation::ValidationError;

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::credentials::AuthMode;

const ALERT_WIDTH: u16 = 56;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn validation(error: &ValidationError) -> Self {
        Self::new("Invalid input", error.to_string())
    }

    pub fn auth_failed(mode: AuthMode, error: &str) -> Self {
        let title = match mode {
            AuthMode::SignIn => "Sign-in failed",
            AuthMode::Register => "Registration failed",
        };
        Self::new(title, error)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner_width = ALERT_WIDTH.saturating_sub(4).max(1) as usize;
        let message_rows = self.message.chars().count().div_ceil(inner_width).max(1) as u16;
        let height = message_rows + 4;

        let hints = [InputHint::new("any key", "dismiss")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &self.title,
                border_color: Color::Red,
                width: ALERT_WIDTH,
                height,
                hints: &hints,
            },
        );

        let body = Paragraph::new(Line::from(Span::styled(
            self.message.as_str(),
            Style::default().fg(Color::White),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(body, layout.body);
    }
}
