//! Settlement business logic.

mod settlement;

pub use settlement::{
    face_value_result, pot_share_result, settle, total_chips, total_pot, PlayerResult, Settlement,
};
