use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordleSettings {
    pub max_attempts: u32,
}

impl Default for WordleSettings {
    fn default() -> Self {
        Self { max_attempts: 6 }
    }
}

impl Validate for WordleSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("Wordle attempts", self.max_attempts, 1, 12)
    }
}
