use crate::games::session_rng::RandomSource;
use crate::log;

use super::engine::{apply_move, is_game_over, spawn_tile};
use super::grid::Grid;
use super::types::{Direction, GameStatus};

const INITIAL_TILES: usize = 2;

pub struct Puzzle2048GameState {
    grid: Grid,
    score: u64,
    best_score: u64,
    status: GameStatus,
    moves_made: u32,
}

impl Puzzle2048GameState {
    pub fn new(best_score: u64, rng: &mut impl RandomSource) -> Self {
        let mut state = Self {
            grid: Grid::empty(),
            score: 0,
            best_score,
            status: GameStatus::InProgress,
            moves_made: 0,
        };
        state.restart(rng);
        state
    }

    /// Fresh grid with two tiles; the best score survives.
    pub fn restart(&mut self, rng: &mut impl RandomSource) {
        self.grid = Grid::empty();
        for _ in 0..INITIAL_TILES {
            spawn_tile(&mut self.grid, rng);
        }
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.moves_made = 0;
    }

    /// Applies one swipe. Returns `false` when nothing moved or the game is over.
    pub fn apply_move(&mut self, direction: Direction, rng: &mut impl RandomSource) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }

        let outcome = apply_move(&self.grid, direction, rng);
        if !outcome.changed {
            return false;
        }

        self.grid = outcome.grid;
        self.score += u64::from(outcome.score_delta);
        self.best_score = self.best_score.max(self.score);
        self.moves_made += 1;

        if is_game_over(&self.grid) {
            self.status = GameStatus::Over;
            log!(
                "2048 over after {} moves, score {}, highest tile {}",
                self.moves_made,
                self.score,
                self.grid.highest_tile()
            );
        }

        true
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    #[cfg(test)]
    fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }
}
