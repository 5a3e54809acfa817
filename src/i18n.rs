//! Display-string translations: English, Portuguese, Spanish.
//! Affects labels only; computation never reads these.

use serde::Serialize;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Pt,
    Es,
}

impl Lang {
    /// Parse a language code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "pt" => Lang::Pt,
            "es" => Lang::Es,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
            Lang::Es => "es",
        }
    }

    /// Display strings for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Pt => &PT,
            Lang::Es => &ES,
        }
    }
}

/// Static table of display strings for one language.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Currency prefix for formatted amounts.
    pub currency: &'static str,
    pub game_settings: &'static str,
    pub buy_in_label: &'static str,
    pub players_title: &'static str,
    pub add_player: &'static str,
    pub player_name: &'static str,
    pub entries: &'static str,
    pub entry_singular: &'static str,
    pub final_chips: &'static str,
    pub result: &'static str,
    pub game_summary: &'static str,
    pub total_players: &'static str,
    pub total_pot: &'static str,
    pub total_chips: &'static str,
    pub final_results: &'static str,
    pub export_html: &'static str,
    pub export_csv: &'static str,
    pub generated_on: &'static str,
    pub generated_by: &'static str,
}

impl Labels {
    /// Currency-formatted amount, e.g. `R$ 12.50`.
    pub fn format_currency(&self, amount: f64) -> String {
        format!("{} {:.2}", self.currency, amount)
    }
}

static EN: Labels = Labels {
    title: "Poker Night Calculator",
    subtitle: "Settle up your poker night in seconds",
    currency: "$",
    game_settings: "Game Settings",
    buy_in_label: "Buy-in Value (per entry)",
    players_title: "Players",
    add_player: "Add Player",
    player_name: "Player Name",
    entries: "Entries",
    entry_singular: "entry",
    final_chips: "Final Chips",
    result: "Result",
    game_summary: "Game Summary",
    total_players: "Total Players",
    total_pot: "Total Pot",
    total_chips: "Total Chips",
    final_results: "Final Results",
    export_html: "Export as HTML",
    export_csv: "Export as CSV",
    generated_on: "Generated on",
    generated_by: "Generated by Poker Night Calculator",
};

static PT: Labels = Labels {
    title: "Calculadora de Poker",
    subtitle: "Acerte as contas da noite de poker em segundos",
    currency: "R$",
    game_settings: "Configura\u{e7}\u{f5}es do Jogo",
    buy_in_label: "Valor do Buy-in (por entrada)",
    players_title: "Jogadores",
    add_player: "Adicionar Jogador",
    player_name: "Nome do Jogador",
    entries: "Entradas",
    entry_singular: "entrada",
    final_chips: "Fichas Finais",
    result: "Resultado",
    game_summary: "Resumo do Jogo",
    total_players: "Total de Jogadores",
    total_pot: "Pote Total",
    total_chips: "Total de Fichas",
    final_results: "Resultados Finais",
    export_html: "Exportar como HTML",
    export_csv: "Exportar como CSV",
    generated_on: "Gerado em",
    generated_by: "Gerado pela Calculadora de Poker",
};

static ES: Labels = Labels {
    title: "Calculadora de Noche de P\u{f3}ker",
    subtitle: "Ajusta las cuentas de la noche de p\u{f3}ker en segundos",
    currency: "$",
    game_settings: "Configuraci\u{f3}n del Juego",
    buy_in_label: "Valor del Buy-in (por entrada)",
    players_title: "Jugadores",
    add_player: "Agregar Jugador",
    player_name: "Nombre del Jugador",
    entries: "Entradas",
    entry_singular: "entrada",
    final_chips: "Fichas Finales",
    result: "Resultado",
    game_summary: "Resumen del Juego",
    total_players: "Total de Jugadores",
    total_pot: "Pozo Total",
    total_chips: "Total de Fichas",
    final_results: "Resultados Finales",
    export_html: "Exportar como HTML",
    export_csv: "Exportar como CSV",
    generated_on: "Generado el",
    generated_by: "Generado por la Calculadora de P\u{f3}ker",
};
