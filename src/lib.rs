//! Poker night settlement calculator: library with models and business logic.

pub mod export;
pub mod i18n;
pub mod logic;
pub mod models;
pub mod storage;

pub use export::{csv_filename, render_csv_report, render_html_report, report_filename};
pub use i18n::{Labels, Lang};
pub use logic::{
    face_value_result, pot_share_result, settle, total_chips, total_pot, PlayerResult, Settlement,
};
pub use models::{Player, PlayerId, RawNumber, Session, SessionError};
pub use storage::{Storage, DEFAULT_DATA_FILE};
