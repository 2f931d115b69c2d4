//! File-based cache for puzzle inputs
//!
//! Layout: `{base_dir}/{user_id}/{year}_day{day:02}.txt`. Inputs are
//! per-user, so switching sessions never serves another account's input.

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

pub struct InputCache {
    user_dir: PathBuf,
}

impl InputCache {
    /// Create a cache rooted at `base_dir` for a specific user
    pub fn new(mut base_dir: PathBuf, user_id: u64) -> Self {
        base_dir.push(user_id.to_string());
        Self { user_dir: base_dir }
    }

    /// Path of the cached input for a year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.user_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Whether an input is already cached
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.cache_path(year, day).exists()
    }

    /// Read a cached input, or None if absent
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Store an input, creating the user directory if needed
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.user_dir).map_err(|e| {
            CacheError::DirCreation(format!("failed to create {}: {}", self.user_dir.display(), e))
        })?;
        fs::write(self.cache_path(year, day), input)?;
        Ok(())
    }
}
