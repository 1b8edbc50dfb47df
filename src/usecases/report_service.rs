//! Report actions: save, email, present. Each one ends in a user-visible notice.

use crate::domain::{DomainError, EvaluationResult, Notice};
use crate::ports::{NotifierPort, ReportDisplay, ReportMailer, ReportStore};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReportService {
    store: Arc<dyn ReportStore>,
    mailer: Arc<dyn ReportMailer>,
    display: Arc<dyn ReportDisplay>,
    notifier: Arc<dyn NotifierPort>,
}

impl ReportService {
    pub fn new(
        store: Arc<dyn ReportStore>,
        mailer: Arc<dyn ReportMailer>,
        display: Arc<dyn ReportDisplay>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            store,
            mailer,
            display,
            notifier,
        }
    }

    pub async fn save(&self, result: &EvaluationResult) -> Notice {
        let outcome = self.store.save(result).await.map(|path| {
            info!(path = %path.display(), "report saved");
            Notice::info(
                "Relatório salvo!",
                format!("Relatório salvo em {}", path.display()),
            )
        });
        self.finish("save", outcome)
    }

    pub async fn email(&self, result: &EvaluationResult) -> Notice {
        let outcome = self.mailer.send(result).await.map(|()| {
            Notice::info("Email enviado!", "Relatório foi enviado por email")
        });
        self.finish("email", outcome)
    }

    pub async fn present(&self, result: &EvaluationResult) -> Notice {
        let outcome = self.display.present(result).await.map(|()| {
            Notice::info(
                "Modo apresentação ativado",
                "Relatório agora está sendo projetado",
            )
        });
        self.finish("present", outcome)
    }

    fn finish(&self, action: &str, outcome: Result<Notice, DomainError>) -> Notice {
        let notice = outcome.unwrap_or_else(|e| {
            warn!(action, error = %e, "report action failed");
            match e {
                DomainError::Export(_) => e.notice(),
                other => DomainError::Export(other.to_string()).notice(),
            }
        });
        self.notifier.notify(&notice);
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::RecordingNotifier;
    use crate::adapters::report::MarkdownReportStore;
    use crate::domain::scoring::tally;
    use chrono::Utc;
    use std::path::PathBuf;

    struct Fails;

    #[async_trait::async_trait]
    impl ReportMailer for Fails {
        async fn send(&self, _result: &EvaluationResult) -> Result<(), DomainError> {
            Err(DomainError::Export("SMTP relay refused the message".into()))
        }
    }

    #[async_trait::async_trait]
    impl ReportDisplay for Fails {
        async fn present(&self, _result: &EvaluationResult) -> Result<(), DomainError> {
            Err(DomainError::CapabilityUnavailable("no terminal".into()))
        }
    }

    #[async_trait::async_trait]
    impl ReportStore for Fails {
        async fn save(&self, _result: &EvaluationResult) -> Result<PathBuf, DomainError> {
            Err(DomainError::Export("read-only".into()))
        }
    }

    #[tokio::test]
    async fn test_save_writes_file_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let service = ReportService::new(
            Arc::new(MarkdownReportStore::new(dir.path())),
            Arc::new(Fails),
            Arc::new(Fails),
            notifier.clone(),
        );
        let result = tally(vec![], Utc::now());

        let notice = service.save(&result).await;

        assert!(!notice.is_error());
        assert_eq!(notice.title, "Relatório salvo!");
        // markdown report plus its JSON sidecar
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
        assert_eq!(notifier.notices(), vec![notice]);
    }

    #[tokio::test]
    async fn test_failures_become_error_notices() {
        let notifier = Arc::new(RecordingNotifier::new());
        let service = ReportService::new(
            Arc::new(Fails),
            Arc::new(Fails),
            Arc::new(Fails),
            notifier.clone(),
        );
        let result = tally(vec![], Utc::now());

        let saved = service.save(&result).await;
        let mailed = service.email(&result).await;
        let shown = service.present(&result).await;

        assert!(saved.is_error());
        assert!(mailed.is_error());
        assert_eq!(mailed.description, "SMTP relay refused the message");
        assert!(shown.is_error());
        assert_eq!(notifier.notices().len(), 3);
    }
}
