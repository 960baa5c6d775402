//! Inventory data model.
//!
//! The item store owns the documents; the UI keeps an ordered projection of
//! `Item`s mirroring the store at last sync.

use std::fmt;
use std::time::Instant;

/// Opaque document identifier assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A positive item count.
///
/// Always in `1..=i64::MAX` so it round-trips through Firestore's int64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u64);

impl Quantity {
    pub const MAX: u64 = i64::MAX as u64;

    /// Returns `None` for zero or values beyond int64 range.
    pub fn new(value: u64) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Document body for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub quantity: Quantity,
}

/// An item as mirrored in the local cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
}

impl Item {
    pub fn from_fields(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            quantity: fields.quantity,
        }
    }

    /// Merges updated fields into this item, keeping the id.
    pub fn apply(&mut self, fields: &ItemFields) {
        self.name.clone_from(&fields.name);
        self.quantity = fields.quantity;
    }
}

/// Raw editor input for an add or edit, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    /// Prefills a draft from an existing item (edit surface).
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Authenticated user identity reported by the auth gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: String,
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: Instant,
}

impl Session {
    /// Returns true if the id token expires within `margin`.
    pub fn expires_within(&self, margin: std::time::Duration) -> bool {
        self.expires_at
            .checked_duration_since(Instant::now())
            .is_none_or(|left| left <= margin)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("id_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
