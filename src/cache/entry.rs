//! A single cache slot backed by one file

use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use super::codec;
use crate::error::CacheError;

/// One cached value of type `T` stored at `path`.
///
/// Holds no value in memory: every call goes to the file, and freshness is
/// judged from the file's modification time.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    path: PathBuf,
    _value: PhantomData<fn() -> T>,
}

impl<T> CacheEntry<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _value: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time since the file was last written, if it exists
    pub fn age(&self) -> Option<Duration> {
        let modified = fs::metadata(&self.path)
            .ok()
            .filter(|m| m.is_file())?
            .modified()
            .ok()?;

        // A timestamp in the future counts as brand new
        Some(
            SystemTime::now()
                .duration_since(modified)
                .unwrap_or(Duration::ZERO),
        )
    }

    /// True iff the file exists and is younger than `max_age`
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        self.age().is_some_and(|age| age < max_age)
    }

    /// Load and decode the file
    pub fn read(&self) -> Result<T, CacheError> {
        let text = fs::read_to_string(&self.path).map_err(|e| CacheError::read(&self.path, e))?;
        codec::decode(&text).map_err(|e| CacheError::read(&self.path, e))
    }

    /// Encode and persist `value`, replacing any previous content.
    ///
    /// The text goes to a temporary file in the same directory which is then
    /// renamed over the target, so readers see either the old or the new
    /// content. On failure the temporary file is removed and the old content
    /// is left untouched. Returns `value` unchanged.
    pub fn write(&self, value: T) -> Result<T, CacheError> {
        let text = codec::encode(&value).map_err(|e| CacheError::write(&self.path, e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| CacheError::write(&self.path, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CacheError::write(&self.path, e))?;
        tmp.write_all(text.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| CacheError::write(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| CacheError::write(&self.path, e.error))?;

        Ok(value)
    }
}
