mod board;
mod game_state;

pub use board::{BOARD_SIZE, QueensBoard};
pub use game_state::{INVALID_HIGHLIGHT_MS, Placement, PlacementError, QueensGameState};
