//! Session aggregate: buy-in, roster, and id counter.

use crate::models::player::{Player, PlayerId};
use crate::models::raw::RawNumber;
use serde::{Deserialize, Serialize};

/// Errors that can occur during session operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// The roster must keep at least one player.
    LastPlayer,
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::LastPlayer => write!(f, "Cannot remove the last player"),
            SessionError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
        }
    }
}

/// Full session state: buy-in per entry, the roster, and the id counter.
/// This is the whole persisted/exported aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Monetary value of one entry.
    pub buy_in: f64,
    /// Roster in insertion order (display order only).
    pub players: Vec<Player>,
    /// Next id to assign; strictly greater than every existing id.
    pub next_id: PlayerId,
}

impl Default for Session {
    /// First-load state: four players with one entry each, buy-in 100.
    fn default() -> Self {
        Self {
            buy_in: 100.0,
            players: (1..=4)
                .map(|i| Player::new(i, format!("Player {i}")))
                .collect(),
            next_id: 5,
        }
    }
}

impl Session {
    /// Append a new player named after its id. Returns the assigned id.
    pub fn add_player(&mut self) -> PlayerId {
        let id = self.next_id;
        self.players.push(Player::new(id, format!("Player {id}")));
        self.next_id += 1;
        id
    }

    /// Remove a player by id. Rejected when only one player remains, so the
    /// roster is never empty.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        if self.players.len() <= 1 {
            return Err(SessionError::LastPlayer);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Set the buy-in per entry.
    pub fn set_buy_in(&mut self, buy_in: f64) {
        self.buy_in = buy_in;
    }

    /// Reference to a player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_player_mut(&mut self, id: PlayerId) -> Result<&mut Player, SessionError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SessionError::PlayerNotFound(id))
    }

    /// Rename a player.
    pub fn rename_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.get_player_mut(id)?.name = name.into();
        Ok(())
    }

    /// Store the entries field as typed. Raw text (including `""`) is kept
    /// verbatim; it is coerced only when the settlement is computed.
    pub fn set_entries(&mut self, id: PlayerId, entries: RawNumber) -> Result<(), SessionError> {
        self.get_player_mut(id)?.entries = entries;
        Ok(())
    }

    /// Store the final-chips field as typed, same raw-text rule as entries.
    pub fn set_final_chips(
        &mut self,
        id: PlayerId,
        final_chips: RawNumber,
    ) -> Result<(), SessionError> {
        self.get_player_mut(id)?.final_chips = final_chips;
        Ok(())
    }
}
