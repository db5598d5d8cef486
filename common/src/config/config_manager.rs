use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, MemoryContentConfigProvider,
};
use super::config_serializer::{ConfigSerializer, YamlConfigSerializer};
use super::validate::Validate;

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfig> ConfigManager<MemoryContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn in_memory(initial_yaml: Option<String>) -> Self {
        Self::new(MemoryContentConfigProvider::new(initial_yaml), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    /// Returns the cached config, loading it on first use. A missing file
    /// yields `TConfig::default()`.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.lock_cache()?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.lock_cache()?;
        *current = Some(config.clone());
        Ok(())
    }

    /// Loads, mutates and saves the config in one step.
    pub fn update_config<F>(&self, update: F) -> Result<TConfig, String>
    where
        F: FnOnce(&mut TConfig),
    {
        let mut config = self.get_config()?;
        update(&mut config);
        self.set_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        tick_interval_ms: u32,
        name: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                tick_interval_ms: 150,
                name: "default".to_string(),
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.tick_interval_ms == 0 {
                return Err("tick interval must be positive".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::in_memory(None);
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_loads_yaml_content() {
        let yaml = "tick_interval_ms: 90\nname: fast\n".to_string();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::in_memory(Some(yaml));
        let config = manager.get_config().unwrap();
        assert_eq!(config.tick_interval_ms, 90);
        assert_eq!(config.name, "fast");
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let yaml = "tick_interval_ms: 0\nname: broken\n".to_string();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::in_memory(Some(yaml));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_set_config_refuses_invalid_values() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::in_memory(None);
        let bad = TestConfig {
            tick_interval_ms: 0,
            name: "bad".to_string(),
        };
        assert!(manager.set_config(&bad).is_err());
        assert_eq!(manager.content_provider().get_config_content().unwrap(), None);
    }

    #[test]
    fn test_update_config_persists() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::in_memory(None);
        manager
            .update_config(|c| c.name = "updated".to_string())
            .unwrap();

        let stored = manager.content_provider().get_config_content().unwrap().unwrap();
        assert!(stored.contains("updated"));
        assert_eq!(manager.get_config().unwrap().name, "updated");
    }

    #[test]
    fn test_file_round_trip() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_arcade_config_{}.yaml", random_number));

        let manager: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(path.clone());
        let config = TestConfig {
            tick_interval_ms: 200,
            name: "file".to_string(),
        };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(path.clone());
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(path);
    }
}
