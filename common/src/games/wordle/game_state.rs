use crate::games::session_rng::RandomSource;
use crate::log;

use super::types::{GuessError, GuessOutcome, LetterScore, ScoredGuess};
use super::words::{WORD_LENGTH, WORDS};

const USED: u8 = b'*';

/// Scores `guess` against `target`. Exact matches are claimed first, then
/// each remaining guess letter takes the first unclaimed equal target letter,
/// so a doubled letter is only marked present as often as the target has it.
pub fn score_guess(guess: &[u8; WORD_LENGTH], target: &[u8; WORD_LENGTH]) -> [LetterScore; WORD_LENGTH] {
    let mut scores = [LetterScore::Absent; WORD_LENGTH];
    let mut remaining = *target;
    let mut pending = *guess;

    for i in 0..WORD_LENGTH {
        if pending[i] == remaining[i] {
            scores[i] = LetterScore::Correct;
            remaining[i] = USED;
            pending[i] = USED;
        }
    }

    for i in 0..WORD_LENGTH {
        if pending[i] == USED {
            continue;
        }
        if let Some(j) = remaining.iter().position(|&c| c == pending[i]) {
            scores[i] = LetterScore::Present;
            remaining[j] = USED;
        }
    }

    scores
}

pub struct WordleGameState {
    target: [u8; WORD_LENGTH],
    guesses: Vec<ScoredGuess>,
    max_attempts: usize,
    won: bool,
}

impl WordleGameState {
    pub fn new(max_attempts: usize, rng: &mut impl RandomSource) -> Self {
        let mut state = Self {
            target: [b'A'; WORD_LENGTH],
            guesses: Vec::new(),
            max_attempts: max_attempts.max(1),
            won: false,
        };
        state.restart(rng);
        state
    }

    pub fn with_target(target: &str, max_attempts: usize) -> Result<Self, GuessError> {
        let target = Self::normalize(target)?;
        Ok(Self {
            target,
            guesses: Vec::new(),
            max_attempts: max_attempts.max(1),
            won: false,
        })
    }

    pub fn restart(&mut self, rng: &mut impl RandomSource) {
        let word = WORDS[rng.index(WORDS.len())];
        let mut target = [b'A'; WORD_LENGTH];
        target.copy_from_slice(word.as_bytes());
        self.target = target;
        self.guesses.clear();
        self.won = false;
    }

    fn normalize(input: &str) -> Result<[u8; WORD_LENGTH], GuessError> {
        let trimmed = input.trim();
        let actual = trimmed.chars().count();
        if actual != WORD_LENGTH {
            return Err(GuessError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }
        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GuessError::InvalidCharacter(bad));
        }

        let mut word = [0u8; WORD_LENGTH];
        for (slot, byte) in word.iter_mut().zip(trimmed.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(word)
    }

    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = Self::normalize(input)?;
        let scores = score_guess(&guess, &self.target);
        let scored = ScoredGuess {
            word: String::from_utf8_lossy(&guess).into_owned(),
            scores,
        };
        let solved = scored.is_solved();
        self.guesses.push(scored);

        if solved {
            self.won = true;
            log!("Wordle solved in {} attempts", self.guesses.len());
            return Ok(GuessOutcome::Won {
                attempts: self.guesses.len(),
            });
        }

        if self.guesses.len() >= self.max_attempts {
            log!("Wordle lost, the word was {}", self.target_word());
            return Ok(GuessOutcome::Lost {
                target: self.target_word(),
            });
        }

        Ok(GuessOutcome::Continue {
            attempts_left: self.attempts_left(),
        })
    }

    pub fn target_word(&self) -> String {
        String::from_utf8_lossy(&self.target).into_owned()
    }

    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.won || self.guesses.len() >= self.max_attempts
    }
}
