use std::fmt;

use super::words::WORD_LENGTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterScore {
    Correct,
    Present,
    Absent,
}

impl LetterScore {
    pub fn symbol(&self) -> char {
        match self {
            LetterScore::Correct => '#',
            LetterScore::Present => '+',
            LetterScore::Absent => '.',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: String,
    pub scores: [LetterScore; WORD_LENGTH],
}

impl ScoredGuess {
    pub fn is_solved(&self) -> bool {
        self.scores.iter().all(|s| *s == LetterScore::Correct)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Continue { attempts_left: usize },
    Won { attempts: usize },
    Lost { target: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacter(char),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::InvalidLength { expected, .. } => {
                write!(f, "Word must be {} letters long", expected)
            }
            GuessError::InvalidCharacter(c) => write!(f, "'{}' is not a letter", c),
            GuessError::GameOver => write!(f, "The game is over, start a new one"),
        }
    }
}

impl std::error::Error for GuessError {}
