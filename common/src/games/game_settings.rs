use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::moles::MolesSettings;
use super::pong::PongSettings;
use super::snake::SnakeSettings;
use super::tug_of_war::TugOfWarSettings;
use super::wordle::WordleSettings;

/// Tunables for every game that has any. 2048 and the queens puzzle have none.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub snake: SnakeSettings,
    #[serde(default)]
    pub pong: PongSettings,
    #[serde(default)]
    pub wordle: WordleSettings,
    #[serde(default)]
    pub moles: MolesSettings,
    #[serde(default)]
    pub tug_of_war: TugOfWarSettings,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.pong.validate()?;
        self.wordle.validate()?;
        self.moles.validate()?;
        self.tug_of_war.validate()?;
        Ok(())
    }
}
