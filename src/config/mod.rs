//! Configuration management module.
//!
//! This module handles loading, saving, and managing application
//! configuration, including the seed data URL and theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/grail-tui";
const DEFAULT_SEED_URL: &str = "https://raw.githubusercontent.com/bej-cofrancesco/grail-data/main";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub seed_url: String,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_seed_url")]
    pub seed_url: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_seed_url() -> String {
    DEFAULT_SEED_URL.to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            seed_url: default_seed_url(),
            theme_name: default_theme_name(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place; the
    /// file is only created when the configuration is saved.
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
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        // If file exists, extract the stored settings
        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.seed_url = data.seed_url;
            self.theme_name = data.theme_name;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            seed_url: self.seed_url.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
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
        })?;
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
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        assert_eq!(config.seed_url, DEFAULT_SEED_URL);
        assert_eq!(config.theme_name, "tokyo-night");
    }

    #[test]
    fn save_and_reload_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        config.seed_url = "http://localhost:9000/data".to_string();
        config.theme_name = "rose-pine-dawn".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(temp.path().to_str()).unwrap();
        assert_eq!(reloaded.seed_url, "http://localhost:9000/data");
        assert_eq!(reloaded.theme_name, "rose-pine-dawn");
    }

    #[test]
    fn save_without_load_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }
}
