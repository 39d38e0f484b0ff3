//! Download sink writing generated spreadsheets to disk

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use deskmate_core::FileSink;
use deskmate_domain::{DeskError, Result};
use tracing::{info, instrument};

/// Saves downloaded files into one directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DiskFileSink {
    directory: PathBuf,
}

impl DiskFileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl FileSink for DiskFileSink {
    #[instrument(skip(self, bytes), fields(dir = %self.directory.display(), len = bytes.len()))]
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        // Only the final component is honoured; names come from the backend id.
        let name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| DeskError::Validation(format!("Invalid file name: {file_name}")))?;

        tokio::fs::create_dir_all(&self.directory).await.map_err(|e| {
            DeskError::Io(format!("Failed to create {}: {e}", self.directory.display()))
        })?;

        let path = self.directory.join(name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| DeskError::Io(format!("Failed to write {}: {e}", path.display())))?;

        info!(path = %path.display(), "file saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn writes_bytes_under_the_directory() {
        let dir = TempDir::new().unwrap();
        let sink = DiskFileSink::new(dir.path().join("downloads"));

        let path = sink.save("file_42.xlsx", b"PK\x03\x04".to_vec()).await.unwrap();

        assert_eq!(path, dir.path().join("downloads").join("file_42.xlsx"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"PK\x03\x04");
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let sink = DiskFileSink::new(dir.path());

        sink.save("file_1.xlsx", vec![1, 2, 3]).await.unwrap();
        let path = sink.save("file_1.xlsx", vec![9]).await.unwrap();

        assert_eq!(tokio::fs::read(path).await.unwrap(), vec![9]);
    }

    #[tokio::test]
    async fn strips_directory_components() {
        let dir = TempDir::new().unwrap();
        let sink = DiskFileSink::new(dir.path());

        let path = sink.save("../escape.xlsx", vec![0]).await.unwrap();

        assert_eq!(path, dir.path().join("escape.xlsx"));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let sink = DiskFileSink::new(dir.path());

        let err = sink.save("..", vec![0]).await.unwrap_err();
        assert!(matches!(err, DeskError::Validation(_)));
    }
}
