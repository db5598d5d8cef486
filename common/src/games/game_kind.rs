use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Puzzle2048,
    Pong,
    Wordle,
    Moles,
    TugOfWar,
    Queens,
    Snake,
}

impl GameKind {
    /// Home screen order.
    pub const ALL: [GameKind; 7] = [
        GameKind::Puzzle2048,
        GameKind::Pong,
        GameKind::Wordle,
        GameKind::Moles,
        GameKind::TugOfWar,
        GameKind::Queens,
        GameKind::Snake,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Puzzle2048 => "2048",
            GameKind::Pong => "Pong",
            GameKind::Wordle => "Wordle",
            GameKind::Moles => "Whack-a-Mole",
            GameKind::TugOfWar => "Tug of War",
            GameKind::Queens => "N-Queens",
            GameKind::Snake => "Snake",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            GameKind::Puzzle2048 => "2048",
            GameKind::Pong => "pong",
            GameKind::Wordle => "wordle",
            GameKind::Moles => "moles",
            GameKind::TugOfWar => "tugofwar",
            GameKind::Queens => "nqueens",
            GameKind::Snake => "snake",
        }
    }

    pub fn player_count(&self) -> u32 {
        match self {
            GameKind::Pong | GameKind::TugOfWar => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        GameKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.route() == needle || kind.title().to_ascii_lowercase() == needle
            })
            .ok_or_else(|| format!("Unknown game: {}", s))
    }
}
