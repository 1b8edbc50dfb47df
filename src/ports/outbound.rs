//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    ChecklistItem, DomainError, EvaluationResult, ExtractedContent, Notice, UploadedFile,
};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Reads the raw text of an uploaded file.
#[async_trait::async_trait]
pub trait ContentReader: Send + Sync {
    /// Read the whole file as UTF-8 text.
    async fn read_text(&self, file: &UploadedFile) -> Result<String, DomainError>;
}

/// Time source. Every synthetic delay goes through here so tests can run on virtual time.
#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}

/// Pass/fail decision for one deliverable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVerdict {
    pub approved: bool,
    /// One entry per checklist question, same order.
    pub satisfied: Vec<bool>,
}

/// Judges a checklist item against the extracted content.
#[async_trait::async_trait]
pub trait ItemJudge: Send + Sync {
    /// # Errors
    /// Returns `DomainError::Evaluation` when the item cannot be judged; the whole run fails.
    async fn judge(
        &self,
        item: &ChecklistItem,
        content: &ExtractedContent,
    ) -> Result<ItemVerdict, DomainError>;
}

/// Fractional progress of a long-running operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub label: String,
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// `done / total`, 1.0 for an empty run.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.done as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }
}

/// Receives progress updates (progress bar, recorder in tests).
pub trait ProgressPort: Send + Sync {
    fn report(&self, progress: &Progress);
}

/// Shows user-visible notices.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Speech capture settings. Single utterance, no interim results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechSettings {
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            language: "pt-BR".to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

/// Speech-to-text capability provided by the environment.
#[async_trait::async_trait]
pub trait SpeechPort: Send + Sync {
    /// Capture one utterance and return its transcript.
    ///
    /// # Errors
    /// `CapabilityUnavailable` when the environment has no recognizer,
    /// `Recognition` when the utterance could not be understood.
    async fn capture(&self, settings: &SpeechSettings) -> Result<String, DomainError>;
}

/// Persists a report. Returns where it was stored.
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    async fn save(&self, result: &EvaluationResult) -> Result<PathBuf, DomainError>;
}

/// Sends a report by email.
#[async_trait::async_trait]
pub trait ReportMailer: Send + Sync {
    async fn send(&self, result: &EvaluationResult) -> Result<(), DomainError>;
}

/// Presents a report full screen.
#[async_trait::async_trait]
pub trait ReportDisplay: Send + Sync {
    async fn present(&self, result: &EvaluationResult) -> Result<(), DomainError>;
}
