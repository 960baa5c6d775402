//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::state::{NoticeKind, StatusLine};
use crate::common::truncate_with_ellipsis;

/// Spinner frames shown while requests are in flight.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// What the right-hand side of the status line shows.
pub struct StatusContext<'a> {
    pub pending: usize,
    pub spinner_frame: usize,
    pub account: Option<&'a str>,
}

pub fn render_status_line(
    status: &StatusLine,
    context: &StatusContext<'_>,
    frame: &mut Frame,
    area: Rect,
) {
    let mut right: Vec<Span<'static>> = Vec::new();
    if context.pending > 0 {
        let spinner = SPINNER_FRAMES[context.spinner_frame % SPINNER_FRAMES.len()];
        right.push(Span::styled(
            format!("{spinner} working "),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(account) = context.account {
        right.push(Span::styled(
            account.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let right_width = right.iter().map(|s| s.content.width()).sum::<usize>() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    if let Some(notice) = status.notice() {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        let text = truncate_with_ellipsis(&notice.text, chunks[0].width.saturating_sub(1) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
            chunks[0],
        );
    }
    frame.render_widget(Paragraph::new(Line::from(right)), chunks[1]);
}
