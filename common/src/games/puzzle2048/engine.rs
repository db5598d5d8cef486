//! Move resolution for the 4×4 tile-merge grid.
//!
//! Every direction is reduced to "compact left": the grid is turned clockwise
//! by [`Direction::quarter_turns`], each row is compacted, and the grid is
//! turned back.

use crate::games::session_rng::RandomSource;

use super::grid::{EMPTY, GRID_SIZE, Grid, Line};
use super::types::Direction;

pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineCompaction {
    pub line: Line,
    pub score_delta: u32,
    pub changed: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score_delta: u32,
    pub changed: bool,
}

/// Slides a single row to the left, merging each equal pair once.
pub fn compact_line(line: Line) -> LineCompaction {
    let mut out = [EMPTY; GRID_SIZE];
    let mut merged = [false; GRID_SIZE];
    let mut cursor = 0;
    let mut score_delta = 0;
    let mut changed = false;

    for (source, &value) in line.iter().enumerate() {
        if value == EMPTY {
            continue;
        }

        if cursor > 0 && out[cursor - 1] == value && !merged[cursor - 1] {
            out[cursor - 1] = value * 2;
            merged[cursor - 1] = true;
            score_delta += out[cursor - 1];
            changed = true;
        } else {
            out[cursor] = value;
            if source != cursor {
                changed = true;
            }
            cursor += 1;
        }
    }

    LineCompaction {
        line: out,
        score_delta,
        changed,
    }
}

/// Resolves a move without spawning anything.
pub fn slide(grid: &Grid, direction: Direction) -> MoveOutcome {
    let turns = direction.quarter_turns();
    let mut working = grid.rotated(turns);
    let mut score_delta = 0;
    let mut changed = false;

    for row in 0..GRID_SIZE {
        let compaction = compact_line(working.rows()[row]);
        *working.row_mut(row) = compaction.line;
        score_delta += compaction.score_delta;
        changed |= compaction.changed;
    }

    MoveOutcome {
        grid: working.rotated((4 - turns) % 4),
        score_delta,
        changed,
    }
}

/// Places a 2 (or, with [`FOUR_TILE_PROBABILITY`], a 4) on a uniformly chosen
/// empty cell. Returns the cell used, or `None` when the grid is full.
pub fn spawn_tile(grid: &mut Grid, rng: &mut impl RandomSource) -> Option<(usize, usize)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.index(empty.len())];
    let value = if rng.chance(FOUR_TILE_PROBABILITY) { 4 } else { 2 };
    grid.set(row, col, value);
    Some((row, col))
}

/// Resolves a move and, if anything changed, spawns exactly one new tile.
pub fn apply_move(grid: &Grid, direction: Direction, rng: &mut impl RandomSource) -> MoveOutcome {
    let mut outcome = slide(grid, direction);
    if outcome.changed {
        spawn_tile(&mut outcome.grid, rng);
    }
    outcome
}

/// Game-over check over a post-spawn grid.
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_terminal()
}
