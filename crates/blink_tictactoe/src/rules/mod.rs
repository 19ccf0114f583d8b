//! Game rules for Blink Tac Toe.
//!
//! Pure functions over the board and queues, kept apart from the state they
//! evaluate so contracts and the engine can share them.

pub mod draw;
pub mod win;

pub use draw::{MAX_OCCUPIED, is_full};
pub use win::{LINES, Line, check_win};
