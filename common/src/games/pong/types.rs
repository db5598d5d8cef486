use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Bottom paddle.
    One,
    /// Top paddle.
    Two,
}

impl Player {
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleDirection {
    Left,
    Right,
}

impl PaddleDirection {
    pub fn sign(&self) -> f32 {
        match self {
            PaddleDirection::Left => -1.0,
            PaddleDirection::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Moved,
    Scored(Player),
    Won(Player),
    Idle,
}
