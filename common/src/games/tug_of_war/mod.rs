mod game_state;
mod settings;

pub use game_state::{Side, TugOfWarGameState};
pub use settings::TugOfWarSettings;
