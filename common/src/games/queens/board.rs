use std::fmt;

pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueensBoard {
    cells: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl QueensBoard {
    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, queen: bool) {
        self.cells[row][col] = queen;
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&q| q).count()
    }

    pub fn queens(&self) -> Vec<(usize, usize)> {
        let mut queens = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &queen) in cells.iter().enumerate() {
                if queen {
                    queens.push((row, col));
                }
            }
        }
        queens
    }

    /// True when a queen on the board shares the row, column or a diagonal
    /// with `(row, col)`.
    pub fn is_under_attack(&self, row: usize, col: usize) -> bool {
        self.queens()
            .into_iter()
            .any(|(r, c)| r == row || c == col || r.abs_diff(row) == c.abs_diff(col))
    }
}

impl fmt::Display for QueensBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|&q| if q { 'Q' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_lines() {
        let mut board = QueensBoard::default();
        board.set(3, 3, true);

        assert!(board.is_under_attack(3, 7));
        assert!(board.is_under_attack(0, 3));
        assert!(board.is_under_attack(0, 0));
        assert!(board.is_under_attack(6, 0));
        assert!(!board.is_under_attack(4, 5));
        assert!(!board.is_under_attack(0, 4));
    }

    #[test]
    fn test_empty_board_is_safe() {
        let board = QueensBoard::default();
        assert_eq!(board.queen_count(), 0);
        assert!(!board.is_under_attack(0, 0));
    }
}
