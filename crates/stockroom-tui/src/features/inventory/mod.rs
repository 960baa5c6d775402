//! Inventory screen feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: cached items, selection, load progress, open surface
//! - `update.rs`: key handling and store result deltas
//! - `render.rs`: item list and editor overlay

mod render;
mod state;
mod update;

pub use render::{render_inventory, visible_rows};
pub use state::{InventoryState, LoadState, Surface};
pub use update::{handle_key, handle_paste, handle_store_event, initial_load};
