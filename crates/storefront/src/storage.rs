//! Local device storage backed by a directory of JSON documents.
//!
//! # Layout
//!
//! ```text
//! <data_dir>/teaCart.json    - cart mapping (slug -> quantity)
//! <data_dir>/teaOrders.json  - order history (array, oldest first)
//! ```
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a crash mid-write never leaves a truncated document behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tea_house_core::{Storage, StorageError};

/// File-per-key storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// The storage directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: key.to_owned(),
            source,
        };
        let target = self.path_for(key);
        let temp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&temp, value).map_err(io_err)?;
        fs::rename(&temp, &target).map_err(io_err)
    }
}
