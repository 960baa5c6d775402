//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::{StateMutation, StatusMutation};
use crate::state::{AppState, Screen, TuiState, Viewport};
use crate::statusline::NoticeKind;
use crate::{credentials, inventory, render, session};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.status.expire(Instant::now());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.viewport = Viewport { width, height };
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SessionChanged(reported) => session::apply_session(&mut app.tui, reported),
        UiEvent::AuthCompleted { req, mode, result } => {
            let form = match &mut app.tui.screen {
                Screen::Credentials(form) => Some(form),
                Screen::Inventory(_) => None,
            };
            let mutations = credentials::handle_auth_completed(form, req, mode, result);
            apply_mutations(app, mutations);
            vec![]
        }
        UiEvent::Store(store_event) => {
            // A store result with no inventory screen belongs to a session
            // that has already ended.
            let Screen::Inventory(state) = &mut app.tui.screen else {
                return vec![];
            };
            let mutations = inventory::handle_store_event(state, store_event, &app.tui.settings);
            apply_mutations(app, mutations);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.alert.is_none() {
                handle_paste(&mut app.tui, &text);
            }
            vec![]
        }
        // Resize is picked up by the next frame.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    // An open alert swallows exactly one key press.
    if app.alert.take().is_some() {
        return vec![];
    }

    let tui = &mut app.tui;
    let (effects, mutations) = match &mut tui.screen {
        Screen::Credentials(form) => credentials::handle_key(form, &mut tui.task_seq, key),
        Screen::Inventory(state) => {
            let page = inventory::visible_rows(render::body_height(tui.viewport.height));
            inventory::handle_key(state, &mut tui.task_seq, key, page)
        }
    };
    apply_mutations(app, mutations);
    effects
}

fn handle_paste(tui: &mut TuiState, text: &str) {
    match &mut tui.screen {
        Screen::Credentials(form) => credentials::handle_paste(form, text),
        Screen::Inventory(state) => inventory::handle_paste(state, text),
    }
}

fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::ShowAlert(alert) => app.alert = Some(alert),
            StateMutation::Status(mutation) => apply_status_mutation(&mut app.tui, mutation),
        }
    }
}

fn apply_status_mutation(tui: &mut TuiState, mutation: StatusMutation) {
    let now = Instant::now();
    match mutation {
        StatusMutation::Info(text) => tui.status.push(NoticeKind::Info, text, now),
        StatusMutation::Error(text) => tui.status.push(NoticeKind::Error, text, now),
        StatusMutation::Clear => tui.status.clear(),
    }
}
