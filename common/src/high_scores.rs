use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, MemoryContentConfigProvider,
    Validate, YamlConfigSerializer,
};
use crate::games::GameKind;
use crate::log;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    pub scores: BTreeMap<GameKind, u64>,
}

impl Validate for HighScores {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// One best score per game, kept in a YAML file.
pub struct HighScoreStore<TProvider: ConfigContentProvider = FileContentConfigProvider> {
    manager: ConfigManager<TProvider, HighScores, YamlConfigSerializer>,
}

impl HighScoreStore<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl HighScoreStore<MemoryContentConfigProvider> {
    pub fn in_memory() -> Self {
        Self {
            manager: ConfigManager::in_memory(None),
        }
    }
}

impl<TProvider: ConfigContentProvider> HighScoreStore<TProvider> {
    pub fn get(&self, kind: GameKind) -> Result<u64, String> {
        let high_scores = self.manager.get_config()?;
        Ok(high_scores.scores.get(&kind).copied().unwrap_or(0))
    }

    /// Records `score` if it beats the stored one. Returns whether it did.
    pub fn submit(&self, kind: GameKind, score: u64) -> Result<bool, String> {
        if score <= self.get(kind)? {
            return Ok(false);
        }
        self.manager.update_config(|high_scores| {
            high_scores.scores.insert(kind, score);
        })?;
        log!("New {} high score: {}", kind.title(), score);
        Ok(true)
    }

    pub fn reset(&self, kind: GameKind) -> Result<(), String> {
        self.manager.update_config(|high_scores| {
            high_scores.scores.remove(&kind);
        })?;
        log!("{} high score reset", kind.title());
        Ok(())
    }
}
