use crate::{Result as StoreResult, StoreError, TOKEN_KEY, TokenStore};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Token persistence backed by a single file under a data directory
///
/// Saves use an atomic write pattern:
///
/// 1. Write to a temp file
/// 2. Sync to disk (fsync)
/// 3. Atomic rename to the final location
///
/// A crash mid-write therefore cannot leave a torn token on disk.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `<dir>/authToken`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_KEY),
        }
    }

    /// Full path of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> StoreResult<Option<String>> {
        if !self.path.exists() {
            debug!("No token file at {:?}", self.path);
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::file_read(self.path.clone(), e))?;

        // Tolerate trailing newlines from hand-edited files; an empty
        // file counts as no token
        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }

        Ok(Some(token.to_string()))
    }

    fn set(&self, token: &str) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        };

        // Ensure directory exists
        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        let temp_path = dir.join(format!("{TOKEN_KEY}.tmp.{}", std::process::id()));

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(token.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Persisted token to {:?}", self.path);
        Ok(())
    }

    fn remove(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared persisted token at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(self.path.clone(), e)),
        }
    }
}
