//! Implements ReportStore. One Markdown file and one JSON file per evaluation run.

use crate::domain::{DomainError, EvaluationResult};
use crate::ports::ReportStore;
use crate::usecases::report_presenter::render_markdown;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub struct MarkdownReportStore {
    reports_dir: PathBuf,
}

impl MarkdownReportStore {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            reports_dir: reports_dir.as_ref().to_path_buf(),
        }
    }

    fn report_path(&self, result: &EvaluationResult) -> PathBuf {
        let stamp = result.evaluated_at.format("%Y%m%d_%H%M%S");
        self.reports_dir.join(format!("avaliacao_{}.md", stamp))
    }
}

/// Write-replace: temp file, sync, rename.
async fn write_replace(path: &Path, bytes: &[u8]) -> Result<(), DomainError> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp_path = PathBuf::from(temp);
    let mut f = fs::File::create(&temp_path)
        .await
        .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
    f.write_all(bytes)
        .await
        .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
    f.sync_all()
        .await
        .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
    drop(f);

    fs::rename(&temp_path, path)
        .await
        .map_err(|e| DomainError::Export(format!("rename {}: {}", path.display(), e)))
}

#[async_trait::async_trait]
impl ReportStore for MarkdownReportStore {
    /// Writes the Markdown report plus a JSON sidecar with the raw result.
    /// Saving the same run twice overwrites both.
    async fn save(&self, result: &EvaluationResult) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to create reports dir: {}", e)))?;

        let path = self.report_path(result);
        let json = serde_json::to_vec_pretty(result)
            .map_err(|e| DomainError::Export(format!("serialize result: {}", e)))?;
        write_replace(&path.with_extension("json"), &json).await?;
        write_replace(&path, render_markdown(result).as_bytes()).await?;

        info!(path = %path.display(), final_score = result.final_score, "report written");
        Ok(path)
    }
}
