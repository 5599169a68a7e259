mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_CONFIG_PATH, DEFAULT_TARGET_LANGUAGE, ResolveOptions,
    ResolvedConfig, TargetSource, resolve_config,
};
