mod arcade_config;

pub use arcade_config::{ArcadeConfig, get_config_manager, resolve_config_path};
