//! Add/edit item form.
//!
//! The editor only collects raw input. Validation and the store call happen
//! in the inventory reducer when the editor reports `Submit`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use stockroom_core::models::{Draft, Item};

use super::OverlayTransition;
use super::render_utils::{
    FieldLine, InputHint, OverlayConfig, render_field_line, render_overlay, render_separator,
};
use crate::common::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Name,
    Quantity,
}

impl EditorField {
    fn toggle(self) -> Self {
        match self {
            EditorField::Name => EditorField::Quantity,
            EditorField::Quantity => EditorField::Name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemEditorState {
    pub draft: Draft,
    pub focus: EditorField,
    /// Latest request submitted from this editor, if any.
    pub submitted: Option<RequestId>,
}

impl Default for ItemEditorState {
    fn default() -> Self {
        Self::new(Draft::default())
    }
}

impl ItemEditorState {
    pub fn new(draft: Draft) -> Self {
        Self {
            draft,
            focus: EditorField::Name,
            submitted: None,
        }
    }

    /// Editor prefilled with an item's current name and quantity.
    pub fn prefilled(item: &Item) -> Self {
        Self::new(Draft::from_item(item))
    }

    pub fn is_saving(&self) -> bool {
        self.submitted.is_some()
    }

    /// Returns true if `req` is the latest submission from this editor.
    pub fn is_latest(&self, req: RequestId) -> bool {
        self.submitted == Some(req)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => OverlayTransition::Close,
            KeyCode::Enter => OverlayTransition::Submit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                OverlayTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
                OverlayTransition::Stay
            }
            KeyCode::Char('u') if ctrl => {
                self.focused_mut().clear();
                OverlayTransition::Stay
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_mut().push(c);
                OverlayTransition::Stay
            }
            _ => OverlayTransition::Stay,
        }
    }

    /// Inserts pasted text into the focused field, dropping line breaks.
    pub fn paste(&mut self, text: &str) {
        self.focused_mut()
            .extend(text.chars().filter(|c| !c.is_control()));
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Name => &mut self.draft.name,
            EditorField::Quantity => &mut self.draft.quantity,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str) {
        let hints = [
            InputHint::new("Enter", "save"),
            InputHint::new("Tab", "next field"),
            InputHint::new("Esc", "cancel"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title,
                border_color: Color::Yellow,
                width: 52,
                height: 8,
                hints: &hints,
            },
        );
        let body = layout.body;

        let fields = [
            (EditorField::Name, "Name", self.draft.name.as_str(), "Widget"),
            (
                EditorField::Quantity,
                "Quantity",
                self.draft.quantity.as_str(),
                "1",
            ),
        ];
        for (row, (field, label, value, placeholder)) in fields.into_iter().enumerate() {
            let line_area = Rect::new(body.x, body.y + row as u16, body.width, 1);
            render_field_line(
                frame,
                line_area,
                &FieldLine {
                    label,
                    value,
                    placeholder,
                    focused: self.focus == field,
                    masked: false,
                    accent: Color::Yellow,
                },
                8,
            );
        }

        render_separator(frame, body, 2);

        let status = if self.is_saving() {
            Span::styled("Saving…", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "Quantity must be a positive number",
                Style::default().fg(Color::DarkGray),
            )
        };
        if body.height > 3 {
            let status_area = Rect::new(body.x, body.y + 3, body.width, 1);
            frame.render_widget(Paragraph::new(Line::from(status)), status_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut editor = ItemEditorState::default();
        for c in "Bolt".chars() {
            editor.handle_key(key(KeyCode::Char(c)));
        }
        editor.handle_key(key(KeyCode::Tab));
        editor.handle_key(key(KeyCode::Char('7')));
        assert_eq!(editor.draft.name, "Bolt");
        assert_eq!(editor.draft.quantity, "7");
    }

    #[test]
    fn test_enter_submits_and_esc_closes() {
        let mut editor = ItemEditorState::default();
        assert_eq!(
            editor.handle_key(key(KeyCode::Enter)),
            OverlayTransition::Submit
        );
        assert_eq!(editor.handle_key(key(KeyCode::Esc)), OverlayTransition::Close);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut editor = ItemEditorState::default();
        editor.paste("Hex\nNut\r");
        assert_eq!(editor.draft.name, "HexNut");
    }
}
