//! Configuration for the quotes & facts client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/quotidian/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::error::Error;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The placeholder users must replace with a real API Ninjas key
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

/// Minimum plausible API key length
const MIN_API_KEY_LEN: usize = 10;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the quotes/facts API
    pub api_url: String,

    /// API Ninjas key, sent as the X-Api-Key header
    pub api_key: String,

    /// Quote category requested on refresh
    pub category: String,

    /// Theme name: "dark", "light", "mono"
    pub theme: String,

    /// Optional external share command; when unset, share falls back
    /// to copying the formatted text to the clipboard
    pub share_command: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.api-ninjas.com/v1".to_string(),
            api_key: API_KEY_PLACEHOLDER.to_string(),
            category: "inspirational".to_string(),
            theme: "dark".to_string(),
            share_command: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter for the quotidian target
    pub level: String,
    /// Whether to also write logs to rotating files
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file name prefix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "quotidian".to_string(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    api_url: Option<String>,
    api_key: Option<String>,
    category: Option<String>,
    theme: Option<String>,
    share_command: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

/// [logging] section as loaded from the config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

impl Config {
    /// Get the config file path: ~/.config/quotidian/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("quotidian").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Render the effective configuration as a TOML template
    pub fn to_toml(&self) -> String {
        format!(
            "# quotidian configuration\n\
             #\n\
             # api_key: your API Ninjas key (https://api-ninjas.com)\n\
             # Environment variables override these values:\n\
             #   QUOTIDIAN_API_KEY, QUOTIDIAN_API_URL, QUOTIDIAN_CATEGORY, QUOTIDIAN_THEME\n\
             \n\
             api_url = {:?}\n\
             api_key = {:?}\n\
             category = {:?}\n\
             theme = {:?}\n\
             \n\
             [logging]\n\
             level = {:?}\n\
             file_enabled = {}\n\
             file_dir = {:?}\n\
             file_prefix = {:?}\n",
            self.api_url,
            self.api_key,
            self.category,
            self.theme,
            self.logging.level,
            self.logging.file_enabled,
            self.logging.file_dir.display().to_string(),
            self.logging.file_prefix,
        )
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!("  {}", e);
                    eprintln!("  To reset, delete the file and restart quotidian.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        let api_url = std::env::var("QUOTIDIAN_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        let api_key = std::env::var("QUOTIDIAN_API_KEY")
            .ok()
            .or(file.api_key)
            .unwrap_or(defaults.api_key);

        let category = std::env::var("QUOTIDIAN_CATEGORY")
            .ok()
            .or(file.category)
            .unwrap_or(defaults.category);

        let theme = std::env::var("QUOTIDIAN_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Share command: file only
        let share_command = file.share_command.filter(|s| !s.trim().is_empty());

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            api_key,
            category,
            theme,
            share_command,
            logging,
        }
    }

    /// Check that the configured API key is plausible
    ///
    /// Rejects an empty key, the template placeholder, and anything too
    /// short to be a real key. An invalid key means the session starts
    /// with the error banner and never dispatches a fetch.
    pub fn validate_api_key(&self) -> Result<(), Error> {
        let key = self.api_key.trim();

        if key.is_empty() || key == API_KEY_PLACEHOLDER || key.len() < MIN_API_KEY_LEN {
            return Err(Error::Config(
                "Please set your API Ninjas key (QUOTIDIAN_API_KEY or config file)".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            api_key: key.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_key_is_rejected() {
        assert!(Config::default().validate_api_key().is_err());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(config_with_key("").validate_api_key().is_err());
        assert!(config_with_key("   ").validate_api_key().is_err());
    }

    #[test]
    fn test_short_key_is_rejected() {
        assert!(config_with_key("abc123").validate_api_key().is_err());
    }

    #[test]
    fn test_plausible_key_is_accepted() {
        assert!(config_with_key("k3y0000000000000000000")
            .validate_api_key()
            .is_ok());
    }

    #[test]
    fn test_validation_error_is_config_variant() {
        let err = Config::default().validate_api_key().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_template_round_trips_through_toml() {
        let template = Config::default().to_toml();
        let parsed: FileConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed.api_key.as_deref(), Some(API_KEY_PLACEHOLDER));
        assert_eq!(parsed.category.as_deref(), Some("inspirational"));
        assert!(parsed.logging.is_some());
    }
}
