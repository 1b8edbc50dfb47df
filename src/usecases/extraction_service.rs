//! Content extractor. Turns the accepted file list into one tagged text blob.
//!
//! Plain text is read for real; PDFs and spreadsheets get a fixed placeholder.
//! Files are read one after another; the first failure aborts the run.

use crate::domain::{DomainError, ExtractedContent, FileKind, Notice, UploadedFile};
use crate::ports::{Clock, ContentReader, NotifierPort, Progress, ProgressPort};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const PDF_PLACEHOLDER: &str =
    "[Conteúdo PDF extraído via OCR - implementação completa necessária]";
pub const SPREADSHEET_PLACEHOLDER: &str =
    "[Conteúdo de planilha extraído - implementação completa necessária]";

const FRAGMENT_SEPARATOR: &str = "\n\n";

pub struct ExtractionService {
    reader: Arc<dyn ContentReader>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn NotifierPort>,
    /// Fixed delay after the last file.
    settle_delay: Duration,
}

impl ExtractionService {
    pub fn new(
        reader: Arc<dyn ContentReader>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn NotifierPort>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            reader,
            clock,
            notifier,
            settle_delay,
        }
    }

    /// Extract every file in order. Notifies success or failure; no partial content on error.
    pub async fn extract(
        &self,
        files: &[UploadedFile],
        progress: &dyn ProgressPort,
    ) -> Result<ExtractedContent, DomainError> {
        if files.is_empty() {
            let err = DomainError::NoFiles;
            self.notifier.notify(&err.notice());
            return Err(err);
        }

        match self.run(files, progress).await {
            Ok(content) => {
                info!(
                    files = files.len(),
                    chars = content.text.len(),
                    "content extracted"
                );
                self.notifier.notify(&Notice::info(
                    "Conteúdo extraído com sucesso!",
                    format!("Processados {} arquivo(s)", files.len()),
                ));
                Ok(content)
            }
            Err(e) => {
                warn!(error = %e, "extraction failed");
                self.notifier.notify(&e.notice());
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        files: &[UploadedFile],
        progress: &dyn ProgressPort,
    ) -> Result<ExtractedContent, DomainError> {
        let total = files.len();
        let mut fragments = Vec::with_capacity(total);

        for (index, file) in files.iter().enumerate() {
            let body = self.fragment_body(file).await?;
            fragments.push(format!(
                "{}\n{}",
                ExtractedContent::fragment_header(&file.name),
                body
            ));
            debug!(name = %file.name, index, "file extracted");
            progress.report(&Progress {
                label: format!("Extraindo {}", file.name),
                done: index + 1,
                total,
            });
        }

        self.clock.sleep(self.settle_delay).await;

        Ok(ExtractedContent {
            text: fragments.join(FRAGMENT_SEPARATOR),
            sources: files.iter().map(|f| f.name.clone()).collect(),
        })
    }

    async fn fragment_body(&self, file: &UploadedFile) -> Result<String, DomainError> {
        match file.kind() {
            Some(FileKind::PlainText) => self.reader.read_text(file).await.map_err(|e| match e {
                DomainError::Extraction(_) => e,
                other => DomainError::Extraction(other.to_string()),
            }),
            Some(FileKind::Pdf) => Ok(PDF_PLACEHOLDER.to_string()),
            Some(FileKind::LegacySpreadsheet | FileKind::ModernSpreadsheet) => {
                Ok(SPREADSHEET_PLACEHOLDER.to_string())
            }
            None => Err(DomainError::Extraction(format!(
                "{} has unsupported type {}",
                file.name, file.mime
            ))),
        }
    }
}
