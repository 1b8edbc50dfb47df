//! Domain entities. Pure data structures for the core business.
//!
//! No filesystem/terminal types here, adapters map into these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Accepted deliverable formats. Anything else is rejected at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    PlainText,
    LegacySpreadsheet,
    ModernSpreadsheet,
}

impl FileKind {
    pub const MIME_PDF: &'static str = "application/pdf";
    pub const MIME_TEXT: &'static str = "text/plain";
    pub const MIME_XLS: &'static str = "application/vnd.ms-excel";
    pub const MIME_XLSX: &'static str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    /// Maps a declared MIME type to an accepted kind. Exact match only.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            Self::MIME_PDF => Some(Self::Pdf),
            Self::MIME_TEXT => Some(Self::PlainText),
            Self::MIME_XLS => Some(Self::LegacySpreadsheet),
            Self::MIME_XLSX => Some(Self::ModernSpreadsheet),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => Self::MIME_PDF,
            Self::PlainText => Self::MIME_TEXT,
            Self::LegacySpreadsheet => Self::MIME_XLS,
            Self::ModernSpreadsheet => Self::MIME_XLSX,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "txt",
            Self::LegacySpreadsheet => "xls",
            Self::ModernSpreadsheet => "xlsx",
        }
    }

    pub fn is_spreadsheet(self) -> bool {
        matches!(self, Self::LegacySpreadsheet | Self::ModernSpreadsheet)
    }
}

/// A file handed to the intake collector. Lives in the session's file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    /// MIME type as declared by the source (guessed from extension for local paths).
    pub mime: String,
    /// Where the reader finds the bytes.
    pub path: PathBuf,
}

impl UploadedFile {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            path: path.into(),
        }
    }

    /// `None` when the declared MIME type is not accepted.
    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_mime(&self.mime)
    }
}

/// Concatenated text of one extraction run, tagged by source file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub text: String,
    pub sources: Vec<String>,
}

impl ExtractedContent {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Line that opens the fragment of file `name`.
    pub fn fragment_header(name: &str) -> String {
        format!("=== {} ===", name)
    }

    /// The fragment bodies without their header lines.
    pub fn body_text(&self) -> String {
        self.text
            .lines()
            .filter(|line| !is_fragment_header(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn is_fragment_header(line: &str) -> bool {
    line.len() >= 8 && line.starts_with("=== ") && line.ends_with(" ===")
}

/// Outcome of one evaluation question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub satisfied: bool,
}

/// Outcome of one deliverable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    pub id: String,
    pub name: String,
    pub approved: bool,
    pub questions: Vec<QuestionResult>,
    pub feedback: String,
}

/// Outcome of one rubric section ("encontro").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub key: String,
    pub title: String,
    pub items: Vec<ItemResult>,
}

impl SectionResult {
    pub fn approved_count(&self) -> usize {
        self.items.iter().filter(|i| i.approved).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitativeRating {
    pub criterion: String,
    pub rating: String,
}

/// Aggregate of one evaluation run. Immutable once built by the scoring tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Sections in checklist declaration order.
    pub sections: Vec<SectionResult>,
    /// Base points (one per section) minus penalties.
    pub total_score: u32,
    pub penalties: u32,
    pub bonus: u32,
    /// Clamped to [0, 10].
    pub final_score: u32,
    pub approved_items: usize,
    pub total_items: usize,
    pub qualitative: Vec<QualitativeRating>,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResult {
    pub fn section(&self, key: &str) -> Option<&SectionResult> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Approved / total, 0.0 when there are no items.
    pub fn approval_ratio(&self) -> f64 {
        if self.total_items == 0 {
            0.0
        } else {
            self.approved_items as f64 / self.total_items as f64
        }
    }
}

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Upload,
    Evaluate,
    Report,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Upload => "upload",
            Step::Evaluate => "evaluate",
            Step::Report => "report",
        };
        f.write_str(s)
    }
}

/// Snapshot of session state the chat assistant reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContext {
    pub step: Step,
    pub has_files: bool,
    pub has_content: bool,
    pub has_results: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry. Append-only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-visible notification (toast in a GUI, colored line in the terminal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_mime() {
        assert_eq!(FileKind::from_mime("application/pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_mime("text/plain"), Some(FileKind::PlainText));
        assert_eq!(
            FileKind::from_mime("application/vnd.ms-excel"),
            Some(FileKind::LegacySpreadsheet)
        );
        assert_eq!(
            FileKind::from_mime(FileKind::MIME_XLSX),
            Some(FileKind::ModernSpreadsheet)
        );
        assert_eq!(FileKind::from_mime("image/png"), None);
        assert_eq!(FileKind::from_mime("text/plain; charset=utf-8"), None);
    }

    #[test]
    fn test_approval_ratio_without_items() {
        let result = EvaluationResult {
            sections: vec![],
            total_score: 0,
            penalties: 0,
            bonus: 0,
            final_score: 0,
            approved_items: 0,
            total_items: 0,
            qualitative: vec![],
            evaluated_at: Utc::now(),
        };
        assert_eq!(result.approval_ratio(), 0.0);
    }

    #[test]
    fn test_body_text_drops_headers() {
        let content = ExtractedContent {
            text: format!(
                "{}\nEscopo e prazo\n\n{}\n[planilha]",
                ExtractedContent::fragment_header("orcamento_riscos.txt"),
                ExtractedContent::fragment_header("custos.xlsx")
            ),
            sources: vec!["orcamento_riscos.txt".into(), "custos.xlsx".into()],
        };
        let body = content.body_text();
        assert!(!body.contains("orcamento_riscos"));
        assert!(!body.contains("==="));
        assert!(body.contains("Escopo e prazo"));
        assert!(body.contains("[planilha]"));
    }
}
