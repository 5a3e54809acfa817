//! Player data structure.

use crate::models::raw::RawNumber;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player (assigned monotonically by the session).
pub type PlayerId = u64;

/// One entry in the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    /// Display name, user-editable; no uniqueness constraint.
    pub name: String,
    /// Buy-ins purchased; may hold raw input text mid-edit.
    pub entries: RawNumber,
    /// Chip count at game end; may hold raw input text mid-edit.
    pub final_chips: RawNumber,
}

impl Player {
    /// Create a player with the roster defaults: one entry, no chips.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            entries: RawNumber::Value(1.0),
            final_chips: RawNumber::Value(0.0),
        }
    }
}
