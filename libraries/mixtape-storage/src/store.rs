/// Flat-file store handle
use crate::error::Result;
use mixtape_core::types::Playlist;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Handle on the JSON document holding every playlist.
///
/// Holds nothing but the path; each read and write touches the file
/// directly, so handles are cheap to clone and share.
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    path: PathBuf,
}

impl PlaylistStore {
    /// Create a store over the given document path. The file does not
    /// need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole playlist document.
    ///
    /// A missing file is an empty library, not an error. Unreadable or
    /// unparseable content is surfaced; the document is never silently
    /// re-initialized.
    pub async fn read_all(&self) -> Result<Vec<Playlist>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Overwrite the whole playlist document, creating parent
    /// directories as needed. Concurrent writers are last-writer-wins.
    pub async fn write_all(&self, playlists: &[Playlist]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(playlists)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
