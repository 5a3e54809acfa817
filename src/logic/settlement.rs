//! Settlement engine: pot, chips, chip value, and per-player results.

use crate::models::{Player, PlayerId, Session};
use serde::Serialize;

/// Computed settlement figures for one player.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResult {
    pub id: PlayerId,
    pub name: String,
    /// Entries as coerced for computation.
    pub entries: f64,
    /// Final chips as coerced for computation.
    pub final_chips: f64,
    /// Cash paid in: entries times buy-in.
    pub invested: f64,
    /// Pot-proportional net: share of the redistributed pot minus investment.
    pub net: f64,
    /// Face-value net: chips counted as currency minus investment.
    pub face_value_net: f64,
}

/// Aggregate settlement over a session snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub buy_in: f64,
    pub total_pot: f64,
    pub total_chips: f64,
    /// Cash value of one chip. `None` while no chips are reported (the
    /// division is undefined then).
    pub chip_value: Option<f64>,
    pub results: Vec<PlayerResult>,
}

/// Total cash collected: sum of entries times buy-in over the roster.
pub fn total_pot(session: &Session) -> f64 {
    session
        .players
        .iter()
        .map(|p| p.entries.coerce() * session.buy_in)
        .sum()
}

/// Total chips in play at game end.
pub fn total_chips(session: &Session) -> f64 {
    session.players.iter().map(|p| p.final_chips.coerce()).sum()
}

/// Face-value result: chips counted as currency, minus investment.
/// Informational only (shown while editing); does not sum to zero across the
/// roster and must not be mixed up with [`pot_share_result`].
pub fn face_value_result(player: &Player, buy_in: f64) -> f64 {
    player.final_chips.coerce() - player.entries.coerce() * buy_in
}

/// Pot-proportional result: the player's share of the redistributed pot minus
/// investment. With `chip_value` of `None` (zero chips reported) every result
/// is defined as exactly 0. Sums to zero across the roster otherwise, since
/// the pot is fully paid back out.
pub fn pot_share_result(player: &Player, buy_in: f64, chip_value: Option<f64>) -> f64 {
    match chip_value {
        Some(value) => player.final_chips.coerce() * value - player.entries.coerce() * buy_in,
        None => 0.0,
    }
}

/// Compute the full settlement for a session snapshot.
///
/// 1. Sum the pot and the chips.
/// 2. Chip value = pot / chips; undefined while the chip total is zero.
/// 3. Per player: pot-proportional net (authoritative) plus the face-value
///    figure, alongside the coerced inputs.
pub fn settle(session: &Session) -> Settlement {
    let pot = total_pot(session);
    let chips = total_chips(session);
    let chip_value = if chips == 0.0 { None } else { Some(pot / chips) };

    let results = session
        .players
        .iter()
        .map(|p| {
            let entries = p.entries.coerce();
            let final_chips = p.final_chips.coerce();
            PlayerResult {
                id: p.id,
                name: p.name.clone(),
                entries,
                final_chips,
                invested: entries * session.buy_in,
                net: pot_share_result(p, session.buy_in, chip_value),
                face_value_net: face_value_result(p, session.buy_in),
            }
        })
        .collect();

    Settlement {
        buy_in: session.buy_in,
        total_pot: pot,
        total_chips: chips,
        chip_value,
        results,
    }
}
