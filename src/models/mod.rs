//! Data structures for the poker night session: players, raw inputs, session state.

mod player;
mod raw;
mod session;

pub use player::{Player, PlayerId};
pub use raw::RawNumber;
pub use session::{Session, SessionError};
