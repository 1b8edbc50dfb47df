//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every variant converts
//! into a user-visible [`Notice`]; none of them is meant to crash the app.

use crate::domain::entities::{Notice, Step};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Per-file, non-fatal: the rest of the batch is still accepted.
    #[error("Unsupported file type for {name}: {mime}")]
    UnsupportedFileType { name: String, mime: String },

    #[error("No files to extract")]
    NoFiles,

    /// Fatal to the current extraction run. No partial content is kept.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Fatal to the current evaluation run. No partial result is kept.
    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    /// Voice input is not available in this environment.
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Speech recognition failed: {0}")]
    Recognition(String),

    #[error("Report export failed: {0}")]
    Export(String),

    #[error("Step {0} is not available yet")]
    StepUnavailable(Step),

    #[error("No file at position {0}")]
    InvalidIndex(usize),
}

impl DomainError {
    /// Fatal errors abort the running operation; the others only skip one unit of work.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::Extraction(_) | DomainError::Evaluation(_) | DomainError::Export(_)
        )
    }

    /// User-facing notice for this error.
    pub fn notice(&self) -> Notice {
        match self {
            DomainError::UnsupportedFileType { name, .. } => Notice::error(
                "Arquivo não suportado",
                format!("{} não é um tipo de arquivo válido", name),
            ),
            DomainError::NoFiles => Notice::error(
                "Nenhum arquivo",
                "Adicione arquivos PDF, TXT, XLS ou XLSX antes de extrair",
            ),
            DomainError::Extraction(_) => Notice::error(
                "Erro na extração",
                "Não foi possível extrair o conteúdo dos arquivos",
            ),
            DomainError::Evaluation(_) => Notice::error(
                "Erro na avaliação",
                "Não foi possível completar a avaliação do projeto",
            ),
            DomainError::CapabilityUnavailable(_) => Notice::error(
                "Não suportado",
                "Este ambiente não suporta reconhecimento de voz",
            ),
            DomainError::Recognition(_) => Notice::error(
                "Erro no reconhecimento",
                "Não consegui entender. Tente novamente!",
            ),
            DomainError::Export(reason) => {
                Notice::error("Erro ao exportar relatório", reason.clone())
            }
            DomainError::StepUnavailable(step) => Notice::error(
                "Etapa indisponível",
                format!("Conclua as etapas anteriores antes de abrir '{}'", step),
            ),
            DomainError::InvalidIndex(index) => Notice::error(
                "Arquivo inexistente",
                format!("Não há arquivo na posição {}", index + 1),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NoticeLevel;

    #[test]
    fn test_unsupported_notice_names_file() {
        let err = DomainError::UnsupportedFileType {
            name: "foto.png".into(),
            mime: "image/png".into(),
        };
        let notice = err.notice();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Arquivo não suportado");
        assert!(notice.description.starts_with("foto.png"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_run_errors_are_fatal() {
        assert!(DomainError::Extraction("io".into()).is_fatal());
        assert!(DomainError::Evaluation("judge".into()).is_fatal());
        assert!(!DomainError::CapabilityUnavailable("speech".into()).is_fatal());
    }
}
