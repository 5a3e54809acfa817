//! Best-effort JSON file persistence for the session.

use crate::models::Session;
use std::path::{Path, PathBuf};

/// Default data file. The stem is the storage key the browser version used,
/// so a payload copied out of local storage is loadable as-is.
pub const DEFAULT_DATA_FILE: &str = "pokerCalculator.json";

/// File-backed persistence adapter: load once at startup, save after every
/// mutation. Both directions are best-effort and never fail the caller.
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved session. A missing file, an unreadable file, and
    /// malformed JSON all yield `None` (the caller falls back to defaults);
    /// failures are logged, never propagated.
    pub fn load(&self) -> Option<Session> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed session data in {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Write the whole session, replacing any previous save. Failures are
    /// logged and swallowed; the in-memory session stays authoritative.
    pub fn save(&self, session: &Session) {
        let json = match serde_json::to_string_pretty(session) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::warn!("Could not save session to {}: {}", self.path.display(), e);
        }
    }
}
