mod game_kind;
mod game_session;
mod game_settings;
mod scheduler;
mod session_rng;

pub mod moles;
pub mod pong;
pub mod puzzle2048;
pub mod queens;
pub mod snake;
pub mod tug_of_war;
pub mod wordle;

pub use game_kind::GameKind;
pub use game_session::GameSession;
pub use game_settings::GameSettings;
pub use scheduler::TickScheduler;
pub use session_rng::{RandomSource, SessionRng};
