//! Local filesystem: read text files and describe paths as uploaded files.

use crate::domain::{DomainError, UploadedFile};
use crate::ports::ContentReader;
use std::path::Path;
use tokio::fs;
use tracing::debug;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// Builds an `UploadedFile` for `path`: size from metadata, MIME type guessed from the extension.
pub async fn uploaded_file_from_path(path: impl AsRef<Path>) -> std::io::Result<UploadedFile> {
    let path = path.as_ref();
    let meta = fs::metadata(path).await?;
    if !meta.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        ));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_MIME);
    debug!(path = %path.display(), mime, size = meta.len(), "described local file");
    Ok(UploadedFile::new(name, meta.len(), mime, path))
}

/// Reads files with `tokio::fs`, decoding UTF-8 lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentReader;

#[async_trait::async_trait]
impl ContentReader for FsContentReader {
    async fn read_text(&self, file: &UploadedFile) -> Result<String, DomainError> {
        let bytes = fs::read(&file.path)
            .await
            .map_err(|e| DomainError::Extraction(format!("read {}: {}", file.path.display(), e)))?;
        // Latin-1 / Windows-1252 exports are common; invalid bytes become U+FFFD
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
