//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Option<Session>  (last value reported by the gateway)
//! │   ├── screen: Screen            (credentials xor inventory)
//! │   ├── task_seq: TaskSeq         (request/mount id generator)
//! │   └── status: StatusLine        (transient notices)
//! └── alert: Option<Alert>          (blocking alert)
//! ```
//!
//! The alert lives beside `TuiState` so feature reducers can take `&mut`
//! to their slice while the main reducer decides whether input reaches
//! them at all.

use stockroom_core::config::UiConfig;
use stockroom_core::models::Session;

use crate::common::TaskSeq;
use crate::credentials::CredentialState;
use crate::inventory::InventoryState;
use crate::overlays::Alert;
use crate::statusline::StatusLine;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub alert: Option<Alert>,
}

impl AppState {
    pub fn new(settings: UiConfig) -> Self {
        Self {
            tui: TuiState::new(settings),
            alert: None,
        }
    }
}

/// Top-level screen. Which one is shown depends only on the session.
#[derive(Debug)]
pub enum Screen {
    Credentials(CredentialState),
    Inventory(InventoryState),
}

impl Screen {
    pub fn credentials(&self) -> Option<&CredentialState> {
        match self {
            Screen::Credentials(state) => Some(state),
            Screen::Inventory(_) => None,
        }
    }

    pub fn inventory(&self) -> Option<&InventoryState> {
        match self {
            Screen::Inventory(state) => Some(state),
            Screen::Credentials(_) => None,
        }
    }
}

/// Terminal dimensions observed on the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Non-modal UI state.
pub struct TuiState {
    pub should_quit: bool,
    pub session: Option<Session>,
    pub screen: Screen,
    pub task_seq: TaskSeq,
    pub status: StatusLine,
    pub settings: UiConfig,
    pub spinner_frame: usize,
    pub viewport: Viewport,
}

impl TuiState {
    pub fn new(settings: UiConfig) -> Self {
        Self {
            should_quit: false,
            session: None,
            screen: Screen::Credentials(CredentialState::new()),
            task_seq: TaskSeq::default(),
            status: StatusLine::new(),
            settings,
            spinner_frame: 0,
            viewport: Viewport::default(),
        }
    }

    /// Store calls and auth requests still in flight.
    pub fn pending_requests(&self) -> usize {
        match &self.screen {
            Screen::Credentials(state) => usize::from(state.is_pending()),
            Screen::Inventory(state) => state.pending,
        }
    }
}
