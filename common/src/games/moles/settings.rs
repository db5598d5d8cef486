use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MolesSettings {
    pub round_seconds: u32,
    pub initial_interval_ms: u32,
    pub interval_step_ms: u32,
    pub min_interval_ms: u32,
}

impl Default for MolesSettings {
    fn default() -> Self {
        Self {
            round_seconds: 20,
            initial_interval_ms: 1000,
            interval_step_ms: 50,
            min_interval_ms: 300,
        }
    }
}

impl Validate for MolesSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("Round length", self.round_seconds, 5, 300)?;
        check_range("Initial mole interval", self.initial_interval_ms, 100, 5000)?;
        check_range("Mole interval step", self.interval_step_ms, 0, 1000)?;
        check_range("Minimum mole interval", self.min_interval_ms, 100, 5000)?;
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(format!(
                "Minimum mole interval ({}) must not exceed the initial interval ({})",
                self.min_interval_ms, self.initial_interval_ms
            ));
        }
        Ok(())
    }
}
