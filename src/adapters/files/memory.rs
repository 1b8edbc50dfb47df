//! In-memory ContentReader keyed by path.

use crate::domain::{DomainError, UploadedFile};
use crate::ports::ContentReader;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }
}

#[async_trait::async_trait]
impl ContentReader for MemoryReader {
    async fn read_text(&self, file: &UploadedFile) -> Result<String, DomainError> {
        self.files
            .get(&file.path)
            .cloned()
            .ok_or_else(|| DomainError::Extraction(format!("{} not found", file.path.display())))
    }
}
