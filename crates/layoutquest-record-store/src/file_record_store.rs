//! Filesystem implementation of the `RecordStore` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use layoutquest_core::error::DomainError;
use layoutquest_core::store::RecordStore;

/// Suffix for per-write temporary files, unique within the process.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stores each record as `<root>/<key>.json`.
///
/// Each write goes to its own hidden sibling temporary file that is then
/// renamed over the record, so a reader never sees a half-written value and
/// concurrent writers never share a temporary file.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    /// Creates a store rooted at `root`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the records.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File a key is stored in.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the key is empty or contains
    /// anything but ASCII letters, digits, `.`, `-` and `_`, or starts with
    /// a dot.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !valid {
            return Err(DomainError::Validation(format!("invalid record key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("failed to {action} {}: {e}", path.display()))
}

/// Creates `.<key>.json.tmp-<pid>-<n>` next to the record, retrying with the
/// next counter value if the name is already taken.
async fn create_tmp_file(root: &Path, key: &str) -> Result<(PathBuf, fs::File), DomainError> {
    loop {
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let candidate = root.join(format!(".{key}.json.tmp-{}-{n}", std::process::id()));
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(io_error("create", &candidate, &e)),
        }
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read", &path, &e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error("create", &self.root, &e))?;

        let (tmp_path, mut file) = create_tmp_file(&self.root, key).await?;
        file.write_all(value.as_bytes())
            .await
            .map_err(|e| io_error("write", &tmp_path, &e))?;
        file.sync_all()
            .await
            .map_err(|e| io_error("sync", &tmp_path, &e))?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(io_error("replace", &path, &e));
        }
        debug!(key, bytes = value.len(), "record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_appends_json_extension() {
        let store = FileRecordStore::new("/data");

        let path = store.path_for("guild-hall.progress.v1").unwrap();

        assert_eq!(path, PathBuf::from("/data/guild-hall.progress.v1.json"));
    }

    #[test]
    fn test_path_for_rejects_traversal_and_separators() {
        let store = FileRecordStore::new("/data");

        for key in ["", "../secrets", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(store.path_for(key), Err(DomainError::Validation(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
