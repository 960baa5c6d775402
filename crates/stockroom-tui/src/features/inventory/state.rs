//! Inventory screen state.

use stockroom_core::models::{Item, ItemId};

use crate::common::MountId;
use crate::overlays::ItemEditorState;

/// Progress of the initial collection fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// What currently owns keyboard input on the inventory screen.
#[derive(Debug, Clone)]
pub enum Surface {
    List,
    Add(ItemEditorState),
    Edit { id: ItemId, editor: ItemEditorState },
}

impl Surface {
    pub fn is_list(&self) -> bool {
        matches!(self, Surface::List)
    }
}

/// Inventory screen state.
///
/// `items` is a local projection of the remote collection. It is replaced by
/// the initial load and afterwards only changed by the delta of each
/// successful mutation; nothing re-fetches.
#[derive(Debug, Clone)]
pub struct InventoryState {
    /// Identifies this screen instance; results for other mounts are dropped.
    pub mount: MountId,
    pub items: Vec<Item>,
    pub selected: usize,
    pub load: LoadState,
    pub surface: Surface,
    /// Store calls issued from this mount that have not completed yet.
    pub pending: usize,
}

impl InventoryState {
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            items: Vec::new(),
            selected: 0,
            load: LoadState::Loading,
            surface: Surface::List,
            pending: 0,
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn find_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn select_next(&mut self, step: usize) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + step).min(self.items.len() - 1);
    }

    pub fn select_prev(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// Keeps the selection inside the list after removals.
    pub fn clamp_selection(&mut self) {
        if self.selected >= self.items.len() {
            self.select_last();
        }
    }

    pub(crate) fn begin_request(&mut self) {
        self.pending += 1;
    }

    pub(crate) fn finish_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}
