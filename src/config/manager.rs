use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::translation::{DEFAULT_ENDPOINT, Language, resolve_language};

/// Config file name, looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Target language used when neither the CLI nor the config names one.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Flat `key = value` settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    entries: HashMap<String, String>,
}

impl ConfigFile {
    /// Parses config file contents.
    ///
    /// Blank lines, `#` comments and `[section]` headers are skipped. A line
    /// counts only when it splits into exactly three tokens with `=` in the
    /// middle; anything else is ignored. Later keys overwrite earlier ones.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter(|line| !line.starts_with('#') && !line.starts_with('['))
            .filter_map(|line| {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                match tokens.as_slice() {
                    [key, "=", value] => Some(((*key).to_string(), (*value).to_string())),
                    _ => None,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` only when the value is exactly `True`.
    pub fn is_true(&self, key: &str) -> bool {
        self.get(key) == Some("True")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigFile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Where the target language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    Cli,
    ConfigFile,
    Default,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The destination language.
    pub target_language: Language,
    /// Where `target_language` came from.
    pub target_source: TargetSource,
    /// Print the detected `src => dst` line.
    pub verbose: bool,
    /// Print pronunciation alongside the translation.
    pub pronunciation: bool,
    /// Translation endpoint URL.
    pub endpoint: String,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Destination language code or name override.
    pub dst: Option<String>,
    /// `-v` was passed.
    pub verbose: bool,
    /// `-p` was passed.
    pub pronunciation: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// The destination comes from the CLI, then the `dst` key, then
/// [`DEFAULT_TARGET_LANGUAGE`]. Whichever source wins, the value is checked
/// against the supported language table. Boolean options are enabled by
/// either the CLI flag or a config value of `True`.
///
/// # Errors
///
/// Returns an error if the destination is neither a known code nor a known name.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    // An empty `--dst` counts as unset.
    let cli_dst = options.dst.as_deref().filter(|dst| !dst.trim().is_empty());

    let (dst, target_source) = match (cli_dst, config_file.get("dst")) {
        (Some(dst), _) => (dst, TargetSource::Cli),
        (None, Some(dst)) => (dst, TargetSource::ConfigFile),
        (None, None) => (DEFAULT_TARGET_LANGUAGE, TargetSource::Default),
    };

    let target_language = resolve_language(dst)?;

    Ok(ResolvedConfig {
        target_language,
        target_source,
        verbose: options.verbose || config_file.is_true("v"),
        pronunciation: options.pronunciation || config_file.is_true("p"),
        endpoint: config_file
            .get("endpoint")
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string(),
    })
}

/// Loads the config file from disk.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        Ok(ConfigFile::parse(&contents))
    }
}
