pub mod config;
pub mod games;
pub mod high_scores;
pub mod logger;
pub mod version;

pub use games::{GameKind, RandomSource, SessionRng, TickScheduler};
pub use high_scores::HighScoreStore;
