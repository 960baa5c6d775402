//! Credential screen reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stockroom_core::validation::validate_credentials;

use super::state::{AuthMode, CredentialState};
use crate::common::{RequestId, TaskSeq};
use crate::effects::UiEffect;
use crate::mutations::{StateMutation, StatusMutation};
use crate::overlays::Alert;

/// Handles a key press on the credential form.
pub fn handle_key(
    state: &mut CredentialState,
    seq: &mut TaskSeq,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => (vec![UiEffect::Quit], vec![]),
        KeyCode::Char('r') if ctrl => {
            // Fields are kept across mode switches.
            state.mode = state.mode.toggle();
            (vec![], vec![])
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.focus = state.focus.toggle();
            (vec![], vec![])
        }
        KeyCode::Enter => submit(state, seq),
        KeyCode::Backspace => {
            state.focused_mut().pop();
            (vec![], vec![])
        }
        KeyCode::Char('u') if ctrl => {
            state.focused_mut().clear();
            (vec![], vec![])
        }
        KeyCode::Char(c) if !ctrl => {
            state.focused_mut().push(c);
            (vec![], vec![])
        }
        _ => (vec![], vec![]),
    }
}

pub fn handle_paste(state: &mut CredentialState, text: &str) {
    state
        .focused_mut()
        .extend(text.chars().filter(|c| !c.is_control()));
}

fn submit(state: &mut CredentialState, seq: &mut TaskSeq) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if state.is_pending() {
        return (vec![], vec![]);
    }
    if let Err(error) = validate_credentials(&state.email, &state.password) {
        return (
            vec![],
            vec![StateMutation::ShowAlert(Alert::validation(&error))],
        );
    }

    let req = seq.next_request();
    state.pending = Some(req);
    let email = state.email.clone();
    let password = state.password.clone();
    let effect = match state.mode {
        AuthMode::SignIn => UiEffect::SignIn {
            req,
            email,
            password,
        },
        AuthMode::Register => UiEffect::Register {
            req,
            email,
            password,
        },
    };
    (vec![effect], vec![StateMutation::Status(StatusMutation::Clear)])
}

/// Handles a finished sign-in or registration.
///
/// `state` is `None` when the credential screen has already been replaced
/// (the session change arrived first). Fields are left intact on failure.
pub fn handle_auth_completed(
    state: Option<&mut CredentialState>,
    req: RequestId,
    mode: AuthMode,
    result: Result<(), String>,
) -> Vec<StateMutation> {
    if let Some(state) = state
        && state.pending == Some(req)
    {
        state.pending = None;
    }

    match result {
        Ok(()) => vec![StateMutation::Status(StatusMutation::Info(
            mode.success_message().to_string(),
        ))],
        Err(error) => vec![StateMutation::ShowAlert(Alert::auth_failed(mode, &error))],
    }
}
