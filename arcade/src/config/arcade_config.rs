use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::{GameKind, GameSettings};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "pocket_arcade_config.yaml";
const HIGH_SCORES_FILE_NAME: &str = "pocket_arcade_scores.yaml";

/// Config path given on the command line, otherwise next to the executable.
pub fn resolve_config_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    config_path: &Path,
) -> ConfigManager<FileContentConfigProvider, ArcadeConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(config_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ArcadeConfig {
    #[serde(default)]
    pub games: GameSettings,
    pub high_scores_file: String,
    #[serde(default)]
    pub last_game: Option<GameKind>,
}

impl ArcadeConfig {
    /// A relative high score file lives next to the config file.
    pub fn high_scores_path(&self, config_path: &Path) -> PathBuf {
        let file = Path::new(&self.high_scores_file);
        if file.is_absolute() {
            return file.to_path_buf();
        }
        match config_path.parent() {
            Some(dir) => dir.join(file),
            None => file.to_path_buf(),
        }
    }
}

impl Validate for ArcadeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.high_scores_file.trim().is_empty() {
            return Err("High score file name must not be empty".to_string());
        }
        self.games.validate()
    }
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            games: GameSettings::default(),
            high_scores_file: HIGH_SCORES_FILE_NAME.to_string(),
            last_game: None,
        }
    }
}
