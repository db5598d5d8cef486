use std::fmt;
use std::str::FromStr;

use crate::log;

use super::settings::TugOfWarSettings;

/// Which half of the screen was tapped. The top half belongs to player 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    fn pull(self) -> i32 {
        match self {
            Side::Top => -1,
            Side::Bottom => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "Player 1"),
            Side::Bottom => write!(f, "Player 2"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "top" | "t" => Ok(Side::Top),
            "2" | "bottom" | "b" => Ok(Side::Bottom),
            other => Err(format!("Unknown side: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TugOfWarGameState {
    score: i32,
    winning_score: i32,
    winner: Option<Side>,
}

impl TugOfWarGameState {
    pub fn new(settings: &TugOfWarSettings) -> Self {
        Self {
            score: 0,
            winning_score: settings.winning_score as i32,
            winner: None,
        }
    }

    /// Pulls the rope one step towards `side`. Returns the winner once decided.
    pub fn tap(&mut self, side: Side) -> Option<Side> {
        if self.winner.is_some() {
            return self.winner;
        }

        self.score += side.pull();
        if self.score <= -self.winning_score {
            self.winner = Some(Side::Top);
        } else if self.score >= self.winning_score {
            self.winner = Some(Side::Bottom);
        }

        if let Some(winner) = self.winner {
            log!("Tug-of-war won by {}", winner);
        }
        self.winner
    }

    pub fn restart(&mut self) {
        self.score = 0;
        self.winner = None;
    }

    /// Rope marker position from 0 (top) to 100 (bottom).
    pub fn progress_percent(&self) -> f32 {
        50.0 + self.score as f32 / (self.winning_score * 2) as f32 * 100.0
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
