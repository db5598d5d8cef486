use std::fmt;

pub const GRID_SIZE: usize = 4;

/// Value stored in a cell with no tile.
pub const EMPTY: u32 = 0;

pub type Line = [u32; GRID_SIZE];

/// The 4×4 board. Cells hold `EMPTY` or a power-of-two tile value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Grid {
    cells: [Line; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [Line; GRID_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[Line; GRID_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut Line {
        &mut self.cells[row]
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == EMPTY {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    pub fn tile_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value != EMPTY)
            .count()
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// One clockwise quarter turn: `new[i][j] = old[N-1-j][i]`.
    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = Grid::empty();
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                rotated.cells[i][j] = self.cells[GRID_SIZE - 1 - j][i];
            }
        }
        rotated
    }

    pub fn rotated(&self, quarter_turns: usize) -> Self {
        (0..quarter_turns % 4).fold(*self, |grid, _| grid.rotate_clockwise())
    }

    /// True when no empty cell and no equal neighbour (right or below) exists.
    pub fn is_terminal(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row][col];
                if value == EMPTY {
                    return false;
                }
                if col + 1 < GRID_SIZE && value == self.cells[row][col + 1] {
                    return false;
                }
                if row + 1 < GRID_SIZE && value == self.cells[row + 1][col] {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            for (col, &value) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Grid {
        Grid::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ])
    }

    #[test]
    fn test_rotate_clockwise() {
        let rotated = numbered().rotate_clockwise();
        assert_eq!(rotated.rows()[0], [13, 9, 5, 1]);
        assert_eq!(rotated.rows()[3], [16, 12, 8, 4]);
    }

    #[test]
    fn test_four_turns_is_identity() {
        assert_eq!(numbered().rotated(4), numbered());
        assert_eq!(numbered().rotated(1).rotated(3), numbered());
    }

    #[test]
    fn test_terminal_full_grid_without_pairs() {
        let grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(grid.is_terminal());

        let mut with_gap = grid;
        with_gap.set(2, 1, EMPTY);
        assert!(!with_gap.is_terminal());
    }

    #[test]
    fn test_vertical_pair_is_not_terminal() {
        let grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [4, 2, 4, 8],
        ]);
        assert!(!grid.is_terminal());
    }

    #[test]
    fn test_counts() {
        let grid = Grid::from_rows([
            [2, 0, 0, 0],
            [0, 64, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 4],
        ]);
        assert_eq!(grid.tile_count(), 3);
        assert_eq!(grid.empty_cells().len(), 13);
        assert_eq!(grid.highest_tile(), 64);
    }
}
