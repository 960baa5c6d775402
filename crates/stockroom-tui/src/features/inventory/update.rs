//! Inventory screen reducer.
//!
//! Key handling issues store effects; store results apply their own delta
//! to the cached items. Completions may arrive in any order.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stockroom_core::config::UiConfig;
use stockroom_core::models::{Item, ItemFields};
use stockroom_core::validation::validate_draft;

use super::state::{InventoryState, LoadState, Surface};
use crate::common::{RequestId, TaskSeq};
use crate::effects::UiEffect;
use crate::events::StoreUiEvent;
use crate::mutations::{StateMutation, StatusMutation};
use crate::overlays::{Alert, ItemEditorState, OverlayTransition};

/// Effect that fetches the collection for a freshly mounted screen.
pub fn initial_load(state: &mut InventoryState, seq: &mut TaskSeq) -> UiEffect {
    state.load = LoadState::Loading;
    state.begin_request();
    UiEffect::LoadItems {
        mount: state.mount,
        req: seq.next_request(),
    }
}

/// Handles a key press on the inventory screen.
///
/// `page` is the number of list rows visible, used for PageUp/PageDown.
pub fn handle_key(
    state: &mut InventoryState,
    seq: &mut TaskSeq,
    key: KeyEvent,
    page: usize,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if state.surface.is_list() {
        return handle_list_key(state, seq, key, page);
    }
    handle_editor_key(state, seq, key)
}

/// Inserts pasted text into the open editor, if any.
pub fn handle_paste(state: &mut InventoryState, text: &str) {
    match &mut state.surface {
        Surface::List => {}
        Surface::Add(editor) | Surface::Edit { editor, .. } => editor.paste(text),
    }
}

fn handle_list_key(
    state: &mut InventoryState,
    seq: &mut TaskSeq,
    key: KeyEvent,
    page: usize,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (vec![], vec![]);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(1),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(1),
        KeyCode::PageUp => state.select_prev(page.max(1)),
        KeyCode::PageDown => state.select_next(page.max(1)),
        KeyCode::Home | KeyCode::Char('g') => state.selected = 0,
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        KeyCode::Char('a') => state.surface = Surface::Add(ItemEditorState::default()),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(item) = state.selected_item() {
                state.surface = Surface::Edit {
                    id: item.id.clone(),
                    editor: ItemEditorState::prefilled(item),
                };
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(item) = state.selected_item() {
                let id = item.id.clone();
                state.begin_request();
                return (
                    vec![UiEffect::DeleteItem {
                        mount: state.mount,
                        req: seq.next_request(),
                        id,
                    }],
                    vec![],
                );
            }
        }
        KeyCode::Char('s') => return (vec![UiEffect::SignOut], vec![]),
        KeyCode::Char('q') => return (vec![UiEffect::Quit], vec![]),
        _ => {}
    }
    (vec![], vec![])
}

fn handle_editor_key(
    state: &mut InventoryState,
    seq: &mut TaskSeq,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    let mount = state.mount;
    let transition = match &mut state.surface {
        Surface::List => return (vec![], vec![]),
        Surface::Add(editor) | Surface::Edit { editor, .. } => editor.handle_key(key),
    };

    match transition {
        OverlayTransition::Stay => (vec![], vec![]),
        OverlayTransition::Close => {
            state.surface = Surface::List;
            (vec![], vec![])
        }
        OverlayTransition::Submit => {
            let effect = match &mut state.surface {
                Surface::List => return (vec![], vec![]),
                Surface::Add(editor) => match submit(editor, seq) {
                    Ok(Some((req, fields))) => UiEffect::CreateItem { mount, req, fields },
                    Ok(None) => return (vec![], vec![]),
                    Err(alert) => return (vec![], vec![alert]),
                },
                Surface::Edit { id, editor } => match submit(editor, seq) {
                    Ok(Some((req, fields))) => UiEffect::UpdateItem {
                        mount,
                        req,
                        id: id.clone(),
                        fields,
                    },
                    Ok(None) => return (vec![], vec![]),
                    Err(alert) => return (vec![], vec![alert]),
                },
            };
            state.begin_request();
            (vec![effect], vec![])
        }
    }
}

/// Validates the editor draft and stamps a new request on success.
///
/// Returns `Ok(None)` while the previous submission is still in flight.
fn submit(
    editor: &mut ItemEditorState,
    seq: &mut TaskSeq,
) -> Result<Option<(RequestId, ItemFields)>, StateMutation> {
    if editor.is_saving() {
        return Ok(None);
    }
    let fields = validate_draft(&editor.draft)
        .map_err(|error| StateMutation::ShowAlert(Alert::validation(&error)))?;
    let req = seq.next_request();
    editor.submitted = Some(req);
    Ok(Some((req, fields)))
}

/// Applies a store result to the screen it was issued from.
///
/// Results stamped with another mount belong to an earlier session and are
/// ignored entirely.
pub fn handle_store_event(
    state: &mut InventoryState,
    event: StoreUiEvent,
    settings: &UiConfig,
) -> Vec<StateMutation> {
    if event.mount() != state.mount {
        return vec![];
    }
    state.finish_request();

    match event {
        StoreUiEvent::ItemsLoaded { items, .. } => {
            state.items = items;
            state.load = LoadState::Loaded;
            state.clamp_selection();
            vec![]
        }
        StoreUiEvent::LoadFailed { error, .. } => {
            state.load = LoadState::Failed(error.clone());
            report(settings, format!("Could not load items: {error}"))
        }
        StoreUiEvent::ItemCreated { req, item, .. } => {
            state.items.push(item);
            if let Surface::Add(editor) = &state.surface
                && editor.is_latest(req)
            {
                state.surface = Surface::List;
            }
            vec![]
        }
        StoreUiEvent::ItemUpdated { req, id, fields, .. } => {
            // An item deleted meanwhile stays deleted.
            if let Some(item) = state.find_mut(&id) {
                item.apply(&fields);
            }
            if let Surface::Edit { editor, .. } = &state.surface
                && editor.is_latest(req)
            {
                state.surface = Surface::List;
            }
            vec![]
        }
        StoreUiEvent::ItemDeleted { id, .. } => {
            state.items.retain(|item: &Item| item.id != id);
            state.clamp_selection();
            vec![]
        }
        StoreUiEvent::CreateFailed { req, error, .. } => {
            if let Surface::Add(editor) = &mut state.surface
                && editor.is_latest(req)
            {
                editor.submitted = None;
            }
            report(settings, format!("Could not add item: {error}"))
        }
        StoreUiEvent::UpdateFailed { req, error, .. } => {
            if let Surface::Edit { editor, .. } = &mut state.surface
                && editor.is_latest(req)
            {
                editor.submitted = None;
            }
            report(settings, format!("Could not update item: {error}"))
        }
        StoreUiEvent::DeleteFailed { error, .. } => {
            report(settings, format!("Could not delete item: {error}"))
        }
    }
}

fn report(settings: &UiConfig, message: String) -> Vec<StateMutation> {
    if settings.report_remote_failures {
        vec![StateMutation::Status(StatusMutation::Error(message))]
    } else {
        vec![]
    }
}
