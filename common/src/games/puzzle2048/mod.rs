mod engine;
mod game_state;
mod grid;
mod types;

pub use engine::{
    FOUR_TILE_PROBABILITY, LineCompaction, MoveOutcome, apply_move, compact_line, is_game_over,
    slide, spawn_tile,
};
pub use game_state::Puzzle2048GameState;
pub use grid::{EMPTY, GRID_SIZE, Grid, Line};
pub use types::Direction;
