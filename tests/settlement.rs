//! Integration tests for the settlement engine: totals, chip value, results.

use poker_night_web::{
    face_value_result, pot_share_result, settle, total_chips, total_pot, Player, RawNumber,
    Session,
};

/// Session with the given (entries, final_chips) pairs, numeric fields.
fn session_with(buy_in: f64, pairs: &[(f64, f64)]) -> Session {
    let players = pairs
        .iter()
        .enumerate()
        .map(|(i, &(entries, chips))| {
            let mut p = Player::new(i as u64 + 1, format!("P{}", i + 1));
            p.entries = RawNumber::Value(entries);
            p.final_chips = RawNumber::Value(chips);
            p
        })
        .collect();
    Session {
        buy_in,
        players,
        next_id: pairs.len() as u64 + 1,
    }
}

#[test]
fn even_game_redistributes_pot_exactly() {
    // buy-in 100, chips 150/50: pot 200 over 200 chips, chip value 1.0
    let s = session_with(100.0, &[(1.0, 150.0), (1.0, 50.0)]);
    let settlement = settle(&s);
    assert_eq!(settlement.total_pot, 200.0);
    assert_eq!(settlement.total_chips, 200.0);
    assert_eq!(settlement.chip_value, Some(1.0));
    assert_eq!(settlement.results[0].net, 50.0);
    assert_eq!(settlement.results[1].net, -50.0);
}

#[test]
fn zero_chips_short_circuits_to_zero_results() {
    let s = session_with(50.0, &[(2.0, 0.0), (1.0, 0.0)]);
    let settlement = settle(&s);
    assert_eq!(settlement.total_pot, 150.0);
    assert_eq!(settlement.total_chips, 0.0);
    assert_eq!(settlement.chip_value, None);
    assert!(settlement.results.iter().all(|r| r.net == 0.0));
}

#[test]
fn single_player_breaks_even() {
    let s = session_with(20.0, &[(3.0, 60.0)]);
    let settlement = settle(&s);
    assert_eq!(settlement.total_pot, 60.0);
    assert_eq!(settlement.chip_value, Some(1.0));
    assert_eq!(settlement.results[0].net, 0.0);
}

#[test]
fn results_sum_to_zero_when_chips_reported() {
    // Uneven roster with a fractional chip value.
    let s = session_with(
        25.0,
        &[(2.0, 700.0), (1.0, 150.0), (3.0, 400.0), (1.0, 80.0)],
    );
    let settlement = settle(&s);
    let sum: f64 = settlement.results.iter().map(|r| r.net).sum();
    assert!(sum.abs() < 1e-9, "net results should cancel out, got {sum}");
}

#[test]
fn face_value_and_pot_share_are_distinct() {
    // 200 chips in play but only 100 in the pot: at face value the table
    // appears to mint money, pot-proportional does not.
    let s = session_with(50.0, &[(1.0, 120.0), (1.0, 80.0)]);
    let settlement = settle(&s);
    let p = &s.players[0];
    assert_eq!(face_value_result(p, s.buy_in), 70.0);
    assert_eq!(pot_share_result(p, s.buy_in, settlement.chip_value), 10.0);
}

#[test]
fn raw_text_fields_coerce_for_computation() {
    let mut s = session_with(100.0, &[(1.0, 150.0), (1.0, 50.0)]);
    s.players[0].entries = RawNumber::Text("1".into());
    s.players[1].final_chips = RawNumber::Text(String::new());
    assert_eq!(total_pot(&s), 200.0);
    assert_eq!(total_chips(&s), 150.0);
}

#[test]
fn coercion_defaults_for_empty_and_malformed_text() {
    assert_eq!(RawNumber::Text(String::new()).coerce(), 0.0);
    assert_eq!(RawNumber::Text(String::new()).coerce_or(7.0), 7.0);
    assert_eq!(RawNumber::Text("12.5".into()).coerce(), 12.5);
    assert_eq!(RawNumber::Value(3.0).coerce(), 3.0);
    // Malformed text clamps to the default instead of poisoning the totals.
    assert_eq!(RawNumber::Text("abc".into()).coerce(), 0.0);
}

#[test]
fn coercion_is_idempotent() {
    for raw in [
        RawNumber::Value(4.25),
        RawNumber::Text("4.25".into()),
        RawNumber::Text(String::new()),
        RawNumber::Text("abc".into()),
    ] {
        let once = raw.coerce();
        assert_eq!(RawNumber::Value(once).coerce(), once);
    }
}
