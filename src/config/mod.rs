//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the display length, theme, alert and log preferences, and hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{CalculatorHotkeys, Hotkey, HotkeyAction};

use crate::engine::DEFAULT_MAX_LENGTH;
use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/calc-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub max_length: usize,
    pub bell: bool,
    pub show_log: bool,
    pub log_level: LevelFilter,
    pub hotkeys: CalculatorHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_true")]
    pub bell: bool,
    #[serde(default)]
    pub show_log: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub hotkeys: HashMap<HotkeyAction, Vec<Hotkey>>, // Overrides of the default bindings
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            max_length: default_max_length(),
            bell: true,
            show_log: false,
            log_level: LevelFilter::Info,
            hotkeys: CalculatorHotkeys::default(),
            file_path: None,
        }
    }

    /// Return the path of the configuration file, once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// defaults so it can be edited.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.apply(data)?;

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            max_length: self.max_length,
            bell: self.bell,
            show_log: self.show_log,
            log_level: self.log_level.to_string().to_lowercase(),
            hotkeys: self.hotkeys.overrides(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?; // Ensure data is written to disk
        Ok(())
    }

    /// Validate the file data and copy it into this instance.
    ///
    fn apply(&mut self, data: FileSpec) -> Result<(), ConfigError> {
        if data.max_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_length".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let log_level =
            LevelFilter::from_str(&data.log_level).map_err(|_| ConfigError::InvalidValue {
                field: "log_level".to_string(),
                message: format!("unknown level '{}'", data.log_level),
            })?;

        if let Some((first, second, key)) = hotkeys::find_conflict(&data.hotkeys) {
            return Err(ConfigError::InvalidValue {
                field: "hotkeys".to_string(),
                message: format!(
                    "'{}' is bound to both {:?} and {:?}",
                    hotkeys::format_hotkey_display(&key),
                    first,
                    second
                ),
            });
        }

        self.theme_name = data.theme_name;
        self.max_length = data.max_length;
        self.bell = data.bell;
        self.show_log = data.show_log;
        self.log_level = log_level;
        self.hotkeys = CalculatorHotkeys::default().merge(data.hotkeys);
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::tempdir;

    fn load_from(dir: &Path) -> Result<Config, AppError> {
        let mut config = Config::new();
        config.load(dir.to_str())?;
        Ok(config)
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let config = load_from(dir.path()).unwrap();

        let file_path = dir.path().join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.theme_name, "tokyo-night");
        assert!(config.bell);
        assert!(!config.show_log);

        let contents = fs::read_to_string(file_path).unwrap();
        assert!(contents.contains("max_length: 13"));
        assert!(!contents.contains("hotkeys"));
    }

    #[test]
    fn test_load_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("calc");
        load_from(&nested).unwrap();
        assert!(nested.join(FILE_NAME).exists());
    }

    #[test]
    fn test_load_reads_partial_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "theme_name: dracula\nmax_length: 8\nbell: false\nlog_level: debug\n",
        )
        .unwrap();

        let config = load_from(dir.path()).unwrap();
        assert_eq!(config.theme_name, "dracula");
        assert!(crate::ui::Theme::from_name(&config.theme_name).is_some());
        assert_eq!(config.max_length, 8);
        assert!(!config.bell);
        assert!(!config.show_log);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.hotkeys, CalculatorHotkeys::default());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let mut config = load_from(dir.path()).unwrap();
        config.theme_name = "rose-pine-dawn".to_string();
        config.show_log = true;
        let mut overrides = HashMap::new();
        overrides.insert(HotkeyAction::Quit, vec![Hotkey::char('x')]);
        config.hotkeys = config.hotkeys.merge(overrides);
        config.save().unwrap();

        let reloaded = load_from(dir.path()).unwrap();
        assert_eq!(reloaded.theme_name, "rose-pine-dawn");
        assert!(reloaded.show_log);
        assert_eq!(
            reloaded.hotkeys.primary(HotkeyAction::Quit),
            Some(&Hotkey::char('x'))
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "max_length: 0\n").unwrap();
        let error = load_from(dir.path()).unwrap_err();
        assert!(error.to_string().contains("max_length"));

        fs::write(dir.path().join(FILE_NAME), "log_level: loud\n").unwrap();
        let error = load_from(dir.path()).unwrap_err();
        assert!(error.to_string().contains("log_level"));
    }

    #[test]
    fn test_override_takes_key_from_default_action() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "hotkeys:\n  square_root:\n    - code: Char\n      char: r\n",
        )
        .unwrap();

        let config = load_from(dir.path()).unwrap();
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        for _ in 0..20 {
            assert_eq!(
                hotkeys::get_action_for_event(&event, &config.hotkeys),
                Some(HotkeyAction::SquareRoot)
            );
        }
        assert!(config.hotkeys.get(HotkeyAction::Reciprocal).is_empty());
    }

    #[test]
    fn test_conflicting_overrides_rejected() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "hotkeys:\n  square_root:\n    - code: Char\n      char: v\n  percent:\n    - code: Char\n      char: v\n",
        )
        .unwrap();

        let error = load_from(dir.path()).unwrap_err();
        assert!(error.to_string().contains("hotkeys"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "max_length: [1, 2\n").unwrap();
        let error = load_from(dir.path()).unwrap_err();
        assert!(matches!(
            error,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_save_without_path_fails() {
        let error = Config::new().save().unwrap_err();
        assert!(matches!(error, AppError::Config(ConfigError::FilePathNotSet)));
    }
}
