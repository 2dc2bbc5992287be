//! Durable checklist persistence.
//!
//! This module handles saving and restoring checklist state as a small
//! string-keyed store of JSON documents: one key for the full item sequence
//! and one for the hide-completed view flag, each written as its own file
//! under the data directory.

mod error;

pub use error::StorageError;

use crate::error::AppError;
use crate::grail::Item;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const ITEMS_KEY: &str = "checklistItems";
const HIDE_COMPLETED_KEY: &str = "hideCompleted";
const DEFAULT_DIRECTORY_PATH: &str = ".local/share/grail-tui";

/// Oversees management of the persisted checklist files.
///
#[derive(Clone)]
pub struct Storage {
    dir_path: PathBuf,
}

impl Storage {
    /// Open the store at the custom path if provided, or at the default
    /// data directory otherwise, creating the directory when missing.
    ///
    pub fn open(custom_path: Option<&str>) -> Result<Storage, AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Storage::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| StorageError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        Ok(Storage { dir_path })
    }

    /// Return the persisted item sequence, or None when nothing has been
    /// saved yet.
    ///
    pub fn load_items(&self) -> Result<Option<Vec<Item>>, StorageError> {
        let path = self.key_path(ITEMS_KEY);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| StorageError::LoadFailed {
            path: path.clone(),
            source: e,
        })?;
        let items =
            serde_json::from_str(&contents).map_err(|e| StorageError::DeserializationFailed {
                key: ITEMS_KEY.to_string(),
                message: e.to_string(),
            })?;
        Ok(Some(items))
    }

    /// Serialize the full item sequence and write it to the disk, replacing
    /// any prior value. The sequence is always written whole, independent of
    /// any active filter.
    ///
    pub fn save_items(&self, items: &[Item]) -> Result<(), StorageError> {
        let content =
            serde_json::to_string(items).map_err(|e| StorageError::SerializationFailed {
                key: ITEMS_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.write_key(ITEMS_KEY, &content)
    }

    /// Return the persisted hide-completed flag, defaulting to false when
    /// it has never been saved.
    ///
    pub fn load_hide_completed(&self) -> Result<bool, StorageError> {
        let path = self.key_path(HIDE_COMPLETED_KEY);
        if !path.exists() {
            return Ok(false);
        }
        let contents = fs::read_to_string(&path).map_err(|e| StorageError::LoadFailed {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| StorageError::DeserializationFailed {
            key: HIDE_COMPLETED_KEY.to_string(),
            message: e.to_string(),
        })
    }

    /// Persist the hide-completed flag under its own key.
    ///
    pub fn save_hide_completed(&self, value: bool) -> Result<(), StorageError> {
        let content =
            serde_json::to_string(&value).map_err(|e| StorageError::SerializationFailed {
                key: HIDE_COMPLETED_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.write_key(HIDE_COMPLETED_KEY, &content)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir_path.join(format!("{}.json", key))
    }

    fn write_key(&self, key: &str, content: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let mut file = fs::File::create(&path).map_err(|e| StorageError::SaveFailed {
            path: path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| StorageError::SaveFailed {
            path: path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| StorageError::SaveFailed {
            path: path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default data directory or an error
    /// if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_data_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_data_path))
            }
            None => Err(StorageError::HomeDirectoryNotFound.into()),
        }
    }
}
