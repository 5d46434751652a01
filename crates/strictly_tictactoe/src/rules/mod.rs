//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Everything the engine
//! reports about a position is derived here on demand and never stored.

pub mod draw;
pub mod status;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{GameStatus, calculate_status};
pub use turn::next_mark;
pub use win::{LINES, check_winner, winning_line};
