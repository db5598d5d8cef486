use std::fmt;

use crate::log;

use super::board::{BOARD_SIZE, QueensBoard};

/// How long a rejected cell stays highlighted.
pub const INVALID_HIGHLIGHT_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Placed,
    Removed,
    Solved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { row: usize, col: usize },
    UnderAttack { row: usize, col: usize },
    AlreadySolved,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { row, col } => write!(
                f,
                "Cell ({}, {}) is outside the {}x{} board",
                row, col, BOARD_SIZE, BOARD_SIZE
            ),
            PlacementError::UnderAttack { row, col } => {
                write!(f, "Cell ({}, {}) is under attack", row, col)
            }
            PlacementError::AlreadySolved => write!(f, "The puzzle is already solved"),
        }
    }
}

impl std::error::Error for PlacementError {}

#[derive(Clone, Debug, Default)]
pub struct QueensGameState {
    board: QueensBoard,
    won: bool,
    invalid_cell: Option<(usize, usize)>,
    invalid_timer_ms: u32,
}

impl QueensGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Removes the queen at `(row, col)` or places one there if no queen attacks it.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Placement, PlacementError> {
        if self.won {
            return Err(PlacementError::AlreadySolved);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PlacementError::OutOfBounds { row, col });
        }

        if self.board.has_queen(row, col) {
            self.board.set(row, col, false);
            self.invalid_cell = None;
            return Ok(Placement::Removed);
        }

        if self.board.is_under_attack(row, col) {
            self.invalid_cell = Some((row, col));
            self.invalid_timer_ms = INVALID_HIGHLIGHT_MS;
            return Err(PlacementError::UnderAttack { row, col });
        }

        self.board.set(row, col, true);
        self.invalid_cell = None;

        if self.board.queen_count() == BOARD_SIZE {
            self.won = true;
            log!("Eight queens solved");
            return Ok(Placement::Solved);
        }
        Ok(Placement::Placed)
    }

    /// Counts down the highlight on the last rejected cell.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.invalid_cell.is_none() {
            return;
        }
        self.invalid_timer_ms = self.invalid_timer_ms.saturating_sub(elapsed_ms);
        if self.invalid_timer_ms == 0 {
            self.invalid_cell = None;
        }
    }

    pub fn board(&self) -> &QueensBoard {
        &self.board
    }

    pub fn queens_placed(&self) -> usize {
        self.board.queen_count()
    }

    pub fn invalid_cell(&self) -> Option<(usize, usize)> {
        self.invalid_cell
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}
