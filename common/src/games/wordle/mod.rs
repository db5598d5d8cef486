mod game_state;
mod settings;
mod types;
mod words;

pub use game_state::{WordleGameState, score_guess};
pub use settings::WordleSettings;
pub use types::{GuessError, GuessOutcome, LetterScore, ScoredGuess};
pub use words::{WORD_LENGTH, WORDS};
