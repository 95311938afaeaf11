//! Move rules for 2048.
//!
//! Pure functions over a [`Board`](crate::core::Board):
//! - `slide_line`: compact-and-merge one line toward its leading edge
//! - `shift`: apply `slide_line` to every row or column for a direction
//! - `can_move`, `legal_moves`, `is_stuck`: move availability and terminal detection
//!
//! Nothing here spawns tiles or touches a score; the session does that.

pub mod line;
pub mod shift;

pub use line::slide_line;
pub use shift::{can_move, is_stuck, legal_moves, shift, Shifted};
