mod game_state;
mod settings;

pub use game_state::{HOLE_COUNT, MolesGameState, MolesUpdate};
pub use settings::MolesSettings;
