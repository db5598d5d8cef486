mod moles_runner;
mod pong_runner;
mod puzzle2048_runner;
mod queens_runner;
mod snake_runner;
mod tug_of_war_runner;
mod wordle_runner;

use std::io::Write;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

use common::games::{GameKind, GameSession, GameSettings, SessionRng};
use common::{HighScoreStore, log};

/// How often timed runners wake up to feed their schedulers.
const FRAME_INTERVAL: Duration = Duration::from_millis(20);

pub struct ArcadeContext {
    pub settings: GameSettings,
    pub high_scores: HighScoreStore,
    pub rng: SessionRng,
}

impl ArcadeContext {
    pub fn best_score(&self, kind: GameKind) -> u64 {
        match self.high_scores.get(kind) {
            Ok(score) => score,
            Err(e) => {
                log!("Failed to load {} high score: {}", kind.title(), e);
                0
            }
        }
    }

    /// Stores `score` if it is a record. Returns whether it was.
    pub fn submit_score(&self, kind: GameKind, score: u64) -> bool {
        match self.high_scores.submit(kind, score) {
            Ok(is_record) => is_record,
            Err(e) => {
                log!("Failed to save {} high score: {}", kind.title(), e);
                false
            }
        }
    }
}

#[cfg(test)]
impl ArcadeContext {
    /// Default settings, a fixed seed and scores kept in `score_file`.
    pub(crate) fn with_score_file(score_file: std::path::PathBuf) -> Self {
        Self {
            settings: GameSettings::default(),
            high_scores: HighScoreStore::from_yaml_file(score_file),
            rng: SessionRng::new(42),
        }
    }
}

#[cfg(test)]
pub(crate) fn get_temp_score_path() -> std::path::PathBuf {
    let random_number: u32 = rand::random();
    std::env::temp_dir().join(format!("temp_pocket_arcade_runner_scores_{}.yaml", random_number))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunnerExit {
    Menu,
    Quit,
}

pub async fn run_session(
    session: GameSession,
    ctx: &mut ArcadeContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> RunnerExit {
    log!("Starting {}", session.kind().title());
    let exit = match session {
        GameSession::Puzzle2048(state) => puzzle2048_runner::run(state, ctx, lines).await,
        GameSession::Pong(state) => pong_runner::run(state, ctx, lines).await,
        GameSession::Wordle(state) => wordle_runner::run(state, ctx, lines).await,
        GameSession::Moles(state) => moles_runner::run(state, ctx, lines).await,
        GameSession::TugOfWar(state) => tug_of_war_runner::run(state, lines).await,
        GameSession::Queens(state) => queens_runner::run(state, lines).await,
        GameSession::Snake(state) => snake_runner::run(state, ctx, lines).await,
    };
    log!("Left game with {:?}", exit);
    exit
}

pub(crate) fn present(frame: &str) {
    // clear screen, cursor home
    print!("\x1b[2J\x1b[H{}", frame);
    let _ = std::io::stdout().flush();
}

pub(crate) fn frame_timer() -> Interval {
    let mut timer = tokio::time::interval(FRAME_INTERVAL);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}
