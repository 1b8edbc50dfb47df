//! Intake collector. Filters dropped files by MIME type and keeps the accepted ones in order.

use crate::domain::{DomainError, Notice, UploadedFile};
use crate::ports::NotifierPort;
use crate::usecases::session::Session;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct IntakeReport {
    pub accepted: usize,
    /// One `UnsupportedFileType` per rejected file, in batch order.
    pub rejected: Vec<DomainError>,
}

pub struct IntakeService {
    notifier: Arc<dyn NotifierPort>,
}

impl IntakeService {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    /// Accepts PDF, plain text and spreadsheets; every other file gets one rejection notice.
    /// Rejections never abort the batch.
    pub fn accept(&self, session: &mut Session, batch: Vec<UploadedFile>) -> IntakeReport {
        let mut report = IntakeReport::default();
        let mut accepted = Vec::with_capacity(batch.len());

        for file in batch {
            if file.kind().is_some() {
                accepted.push(file);
                continue;
            }
            warn!(name = %file.name, mime = %file.mime, "rejected unsupported file");
            let err = DomainError::UnsupportedFileType {
                name: file.name,
                mime: file.mime,
            };
            self.notifier.notify(&err.notice());
            report.rejected.push(err);
        }

        report.accepted = accepted.len();
        session.push_files(accepted);
        info!(
            accepted = report.accepted,
            rejected = report.rejected.len(),
            total = session.files().len(),
            "intake batch processed"
        );
        report
    }

    /// Removes the file at `index` (0-based).
    pub fn remove(&self, session: &mut Session, index: usize) -> Result<UploadedFile, DomainError> {
        match session.remove_file(index) {
            Ok(file) => {
                info!(name = %file.name, index, "file removed");
                self.notifier.notify(&Notice::info(
                    "Arquivo removido",
                    format!("{} foi removido da lista", file.name),
                ));
                Ok(file)
            }
            Err(e) => {
                self.notifier.notify(&e.notice());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::RecordingNotifier;
    use crate::domain::FileKind;

    fn file(name: &str, mime: &str) -> UploadedFile {
        UploadedFile::new(name, 10, mime, name)
    }

    fn service() -> (IntakeService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (IntakeService::new(notifier.clone()), notifier)
    }

    #[test]
    fn test_rejected_files_never_listed_and_noticed_once() {
        let (intake, notifier) = service();
        let mut session = Session::new();
        let batch = vec![
            file("plano.pdf", FileKind::MIME_PDF),
            file("foto.png", "image/png"),
            file("notas.txt", FileKind::MIME_TEXT),
            file("video.mp4", "video/mp4"),
            file("custos.xlsx", FileKind::MIME_XLSX),
            file("antigo.xls", FileKind::MIME_XLS),
        ];

        let report = intake.accept(&mut session, batch);

        assert_eq!(report.accepted, 4);
        assert_eq!(report.rejected.len(), 2);
        let names: Vec<&str> = session.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["plano.pdf", "notas.txt", "custos.xlsx", "antigo.xls"]);

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.title == "Arquivo não suportado"));
        assert!(notices[0].description.contains("foto.png"));
        assert!(notices[1].description.contains("video.mp4"));
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let (intake, notifier) = service();
        let mut session = Session::new();
        intake.accept(&mut session, vec![file("a.txt", FileKind::MIME_TEXT)]);
        intake.accept(&mut session, vec![file("a.txt", FileKind::MIME_TEXT)]);
        assert_eq!(session.files().len(), 2);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noticed() {
        let (intake, notifier) = service();
        let mut session = Session::new();
        intake.accept(&mut session, vec![file("a.txt", FileKind::MIME_TEXT)]);

        assert_eq!(
            intake.remove(&mut session, 3),
            Err(DomainError::InvalidIndex(3))
        );
        let removed = intake.remove(&mut session, 0).unwrap();
        assert_eq!(removed.name, "a.txt");
        assert!(session.files().is_empty());

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert!(notices[0].is_error());
        assert!(!notices[1].is_error());
    }
}
