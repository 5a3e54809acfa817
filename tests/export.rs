//! Integration tests for report export: filenames, HTML content, CSV table.

use chrono::NaiveDate;
use poker_night_web::{
    csv_filename, render_csv_report, render_html_report, report_filename, Lang, Player, RawNumber,
    Session,
};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn sample_session() -> Session {
    let mut winner = Player::new(1, "Alice");
    winner.final_chips = RawNumber::Value(150.0);
    let mut loser = Player::new(2, "Bob & Carol <guests>");
    loser.final_chips = RawNumber::Value(50.0);
    Session {
        buy_in: 100.0,
        players: vec![winner, loser],
        next_id: 3,
    }
}

#[test]
fn filenames_embed_the_iso_date() {
    assert_eq!(
        report_filename(report_date()),
        "poker-night-results-2026-08-07.html"
    );
    assert_eq!(
        csv_filename(report_date()),
        "poker-night-results-2026-08-07.csv"
    );
}

#[test]
fn html_report_contains_totals_and_player_rows() {
    let html = render_html_report(&sample_session(), Lang::En, report_date());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Poker Night Calculator"));
    assert!(html.contains("Generated on 2026-08-07"));
    assert!(html.contains("$ 200.00")); // total pot
    assert!(html.contains("Alice"));
    // Face value: 150 - 100 = +50 profit, 50 - 100 = -50 loss
    assert!(html.contains(r#"class="player-amount profit">+$ 50.00"#));
    assert!(html.contains(r#"class="player-amount loss">-$ 50.00"#));
}

#[test]
fn html_report_escapes_player_names() {
    let html = render_html_report(&sample_session(), Lang::En, report_date());
    assert!(html.contains("Bob &amp; Carol &lt;guests&gt;"));
    assert!(!html.contains("<guests>"));
}

#[test]
fn html_report_localizes_labels_and_currency() {
    let html = render_html_report(&sample_session(), Lang::Pt, report_date());
    assert!(html.contains(r#"<html lang="pt">"#));
    assert!(html.contains("Calculadora de Poker"));
    assert!(html.contains("R$ 200.00"));
}

#[test]
fn zero_chip_session_reports_face_value_losses() {
    let mut s = sample_session();
    for p in &mut s.players {
        p.final_chips = RawNumber::Value(0.0);
    }
    // Pot-proportional nets are all zero here; the per-row line keeps the
    // face-value figure: 0 - 100 = -100 for both players.
    let html = render_html_report(&s, Lang::En, report_date());
    assert!(html.contains(r#"class="player-amount loss">-$ 100.00"#));
}

#[test]
fn csv_report_has_header_and_one_record_per_player() {
    let csv = render_csv_report(&sample_session()).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,entries,final_chips,invested,net"));
    assert_eq!(lines.clone().count(), 2);
    let alice = lines.next().unwrap();
    assert_eq!(alice, "Alice,1,150,100.00,50.00");
}
