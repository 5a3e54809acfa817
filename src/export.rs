//! Report export: self-contained HTML document and CSV table.

use crate::i18n::Lang;
use crate::logic::settle;
use crate::models::Session;
use chrono::NaiveDate;

/// Inline stylesheet for the exported report. Kept inline so the document is
/// fully self-contained; palette mirrors the app UI.
const REPORT_STYLE: &str = r#"
        body {
            font-family: 'Arial', sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background: linear-gradient(135deg, #1e3a2e, #2d5a3d);
            color: #333;
            min-height: 100vh;
        }
        .container {
            background: #fef7e0;
            border: 3px solid #f59e0b;
            border-radius: 12px;
            padding: 30px;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
        }
        h1 {
            color: #166534;
            text-align: center;
            font-size: 2.5rem;
            margin-bottom: 10px;
        }
        .date {
            text-align: center;
            color: #92400e;
            font-size: 1.1rem;
            margin-bottom: 30px;
        }
        .game-info {
            background: #f3f4f6;
            padding: 20px;
            border-radius: 8px;
            margin-bottom: 30px;
            border-left: 4px solid #10b981;
        }
        .summary-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }
        .summary-card {
            padding: 20px;
            border-radius: 8px;
            text-align: center;
            font-weight: bold;
        }
        .summary-card.players { background: #dcfce7; color: #166534; }
        .summary-card.pot { background: #dbeafe; color: #1e40af; }
        .summary-card.chips { background: #ede9fe; color: #7c3aed; }
        .summary-card .value { font-size: 1.8rem; display: block; }
        .summary-card .label { font-size: 0.9rem; opacity: 0.8; }
        .results-title {
            color: #166534;
            font-size: 1.5rem;
            margin-bottom: 20px;
            border-bottom: 2px solid #f59e0b;
            padding-bottom: 10px;
        }
        .player-result {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 15px 20px;
            margin: 10px 0;
            background: white;
            border-radius: 8px;
            border-left: 4px solid #f59e0b;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        }
        .player-name { font-weight: bold; color: #166534; font-size: 1.1rem; }
        .player-details { font-size: 0.9rem; color: #6b7280; margin-top: 4px; }
        .player-amount { font-weight: bold; font-size: 1.2rem; }
        .profit { color: #059669; }
        .loss { color: #dc2626; }
        .break-even { color: #6b7280; }
        .footer {
            margin-top: 40px;
            text-align: center;
            font-size: 0.9rem;
            color: #6b7280;
            border-top: 1px solid #d1d5db;
            padding-top: 20px;
        }
        @media print {
            body { background: white; color: black; }
            .container { box-shadow: none; border: 2px solid #333; }
        }
"#;

/// Filename for the HTML report, dated for sharing.
pub fn report_filename(date: NaiveDate) -> String {
    format!("poker-night-results-{}.html", date.format("%Y-%m-%d"))
}

/// Filename for the CSV export.
pub fn csv_filename(date: NaiveDate) -> String {
    format!("poker-night-results-{}.csv", date.format("%Y-%m-%d"))
}

/// Escape user text for embedding in the report markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the session as a self-contained HTML document (inline CSS, no
/// external resources): buy-in, player count, totals, and one row per player
/// with the face-value figure colored by sign.
pub fn render_html_report(session: &Session, lang: Lang, date: NaiveDate) -> String {
    let labels = lang.labels();
    let settlement = settle(session);

    let mut rows = String::new();
    for r in &settlement.results {
        let (class, sign) = if r.face_value_net > 0.0 {
            ("profit", "+")
        } else if r.face_value_net < 0.0 {
            ("loss", "-")
        } else {
            ("break-even", "")
        };
        let unit = if r.entries == 1.0 {
            labels.entry_singular.to_string()
        } else {
            labels.entries.to_lowercase()
        };
        rows.push_str(&format!(
            r#"            <div class="player-result">
                <div>
                    <div class="player-name">{name}</div>
                    <div class="player-details">{entries} {unit} &bull; {final_chips_label}: {final_chips}</div>
                </div>
                <div class="player-amount {class}">{sign}{amount}</div>
            </div>
"#,
            name = escape_html(&r.name),
            entries = r.entries,
            unit = unit,
            final_chips_label = labels.final_chips,
            final_chips = labels.format_currency(r.final_chips),
            class = class,
            sign = sign,
            amount = labels.format_currency(r.face_value_net.abs()),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang_code}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {date}</title>
    <style>{style}    </style>
</head>
<body>
    <div class="container">
        <h1>&#127920; {title}</h1>
        <div class="date">{generated_on} {date}</div>

        <div class="game-info">
            <h3 style="margin: 0 0 10px 0; color: #166534;">{game_settings}</h3>
            <p style="margin: 0;"><strong>{buy_in_label}:</strong> {buy_in}</p>
        </div>

        <div class="summary-grid">
            <div class="summary-card players">
                <span class="value">{player_count}</span>
                <span class="label">{total_players}</span>
            </div>
            <div class="summary-card pot">
                <span class="value">{total_pot}</span>
                <span class="label">{total_pot_label}</span>
            </div>
            <div class="summary-card chips">
                <span class="value">{total_chips}</span>
                <span class="label">{total_chips_label}</span>
            </div>
        </div>

        <div class="results-section">
            <h3 class="results-title">{final_results}</h3>
{rows}        </div>

        <div class="footer">
            <p>{generated_by}</p>
        </div>
    </div>
</body>
</html>"#,
        lang_code = lang.code(),
        title = labels.title,
        date = date.format("%Y-%m-%d"),
        style = REPORT_STYLE,
        generated_on = labels.generated_on,
        game_settings = labels.game_settings,
        buy_in_label = labels.buy_in_label,
        buy_in = labels.format_currency(session.buy_in),
        player_count = settlement.results.len(),
        total_players = labels.total_players,
        total_pot = labels.format_currency(settlement.total_pot),
        total_pot_label = labels.total_pot,
        total_chips = labels.format_currency(settlement.total_chips),
        total_chips_label = labels.total_chips,
        final_results = labels.final_results,
        rows = rows,
        generated_by = labels.generated_by,
    )
}

/// Render the settlement table as CSV: a header plus one record per player.
/// Net is the pot-proportional figure.
pub fn render_csv_report(session: &Session) -> Result<String, csv::Error> {
    let settlement = settle(session);
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["name", "entries", "final_chips", "invested", "net"])?;
    for r in &settlement.results {
        let entries = r.entries.to_string();
        let final_chips = r.final_chips.to_string();
        let invested = format!("{:.2}", r.invested);
        let net = format!("{:.2}", r.net);
        wtr.write_record([
            r.name.as_str(),
            entries.as_str(),
            final_chips.as_str(),
            invested.as_str(),
            net.as_str(),
        ])?;
    }
    let data = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
