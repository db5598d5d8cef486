use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TugOfWarSettings {
    pub winning_score: u32,
}

impl Default for TugOfWarSettings {
    fn default() -> Self {
        Self { winning_score: 20 }
    }
}

impl Validate for TugOfWarSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("Tug-of-war winning score", self.winning_score, 5, 100)
    }
}
