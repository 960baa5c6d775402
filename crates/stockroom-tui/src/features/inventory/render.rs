//! Inventory screen view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{InventoryState, LoadState, Surface};
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputHint, render_hints};

/// Rows taken by the list border and hint footer.
const CHROME_ROWS: u16 = 3;

const LIST_HINTS: &[InputHint<'static>] = &[
    InputHint::new("a", "add"),
    InputHint::new("e", "edit"),
    InputHint::new("d", "delete"),
    InputHint::new("s", "sign out"),
    InputHint::new("q", "quit"),
];

/// Number of item rows that fit in a body of `height` rows.
pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(CHROME_ROWS) as usize
}

/// Renders the item list and, on top of it, any open editor.
///
/// `show_failures` controls whether a failed load is spelled out or shown
/// as an empty list.
pub fn render_inventory(
    frame: &mut Frame,
    state: &InventoryState,
    area: Rect,
    show_failures: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let title = format!(" Inventory ({}) ", state.items.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    if state.items.is_empty() {
        let (text, color) = match &state.load {
            LoadState::Loading => ("Loading items…".to_string(), Color::Yellow),
            LoadState::Failed(error) if show_failures => {
                (format!("Could not load items: {error}"), Color::Red)
            }
            LoadState::Loaded | LoadState::Failed(_) => {
                ("No items yet. Press a to add one.".to_string(), Color::DarkGray)
            }
        };
        let text = truncate_with_ellipsis(&text, inner.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
            inner,
        );
    } else {
        render_item_list(frame, state, inner);
    }

    render_hints(frame, chunks[1], LIST_HINTS, Color::Cyan);

    match &state.surface {
        Surface::List => {}
        Surface::Add(editor) => editor.render(frame, area, "Add Item"),
        Surface::Edit { editor, .. } => editor.render(frame, area, "Edit Item"),
    }
}

fn render_item_list(frame: &mut Frame, state: &InventoryState, area: Rect) {
    let qty_width = state
        .items
        .iter()
        .map(|item| item.quantity.to_string().width())
        .max()
        .unwrap_or(1);
    let name_width = (area.width as usize).saturating_sub(qty_width + 3);

    let rows: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            let name = truncate_with_ellipsis(&item.name, name_width);
            let padding = name_width.saturating_sub(name.width());
            ListItem::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(name, Style::default().fg(Color::White)),
                Span::raw(" ".repeat(padding + 1)),
                Span::styled(
                    format!("{:>qty_width$}", item.quantity.get()),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    let list = List::new(rows).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use stockroom_core::models::{Item, ItemId, Quantity};

    use super::*;
    use crate::common::MountId;
    use crate::overlays::ItemEditorState;

    fn draw(state: &InventoryState, show_failures: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| render_inventory(frame, state, frame.area(), show_failures))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn item(id: &str, name: &str, quantity: u64) -> Item {
        Item {
            id: ItemId::new(id),
            name: name.to_string(),
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    #[test]
    fn test_visible_rows_excludes_chrome() {
        assert_eq!(visible_rows(20), 17);
        assert_eq!(visible_rows(2), 0);
    }

    #[test]
    fn test_list_shows_names_and_quantities() {
        let mut state = InventoryState::new(MountId(0));
        state.load = LoadState::Loaded;
        state.items = vec![item("a", "Widget", 5), item("b", "Bolt", 120)];

        let screen = draw(&state, true);
        assert!(screen.contains("Inventory (2)"));
        assert!(screen.contains("Widget"));
        assert!(screen.contains("Bolt"));
        assert!(screen.contains("120"));
        assert!(screen.contains("sign out"));
    }

    #[test]
    fn test_failed_load_text_follows_setting() {
        let mut state = InventoryState::new(MountId(0));
        state.load = LoadState::Failed("HTTP 403".to_string());

        assert!(draw(&state, true).contains("Could not load items: HTTP 403"));
        let quiet = draw(&state, false);
        assert!(!quiet.contains("HTTP 403"));
        assert!(quiet.contains("No items yet"));
    }

    #[test]
    fn test_edit_surface_draws_prefilled_editor() {
        let mut state = InventoryState::new(MountId(0));
        state.load = LoadState::Loaded;
        let widget = item("a", "Widget", 5);
        state.surface = Surface::Edit {
            id: widget.id.clone(),
            editor: ItemEditorState::prefilled(&widget),
        };
        state.items = vec![widget];

        let screen = draw(&state, true);
        assert!(screen.contains("Edit Item"));
        assert!(screen.contains("Quantity"));
        assert!(screen.contains("Widget"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut state = InventoryState::new(MountId(0));
        state.items = vec![item("a", "Widget", 5)];
        state.surface = Surface::Add(ItemEditorState::default());
        for (width, height) in [(1, 1), (4, 2), (12, 5), (24, 11)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| render_inventory(frame, &state, frame.area(), true))
                .unwrap();
        }
    }
}
