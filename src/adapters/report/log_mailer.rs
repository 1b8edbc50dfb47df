//! Mock mailer. Implements ReportMailer by logging what would be sent.
//!
//! No SMTP transport is wired yet; the recipient comes from VIVI_REPORT_EMAIL.

use crate::domain::{DomainError, EvaluationResult};
use crate::ports::ReportMailer;
use crate::usecases::report_presenter::render_markdown;
use tracing::info;

pub struct LogMailer {
    recipient: Option<String>,
}

impl LogMailer {
    pub fn new(recipient: Option<String>) -> Self {
        Self { recipient }
    }
}

#[async_trait::async_trait]
impl ReportMailer for LogMailer {
    async fn send(&self, result: &EvaluationResult) -> Result<(), DomainError> {
        let recipient = self.recipient.as_deref().ok_or_else(|| {
            DomainError::Export("Nenhum destinatário configurado (VIVI_REPORT_EMAIL)".into())
        })?;
        let body = render_markdown(result);
        info!(
            to = recipient,
            subject = %format!("Avaliação SHARK TANK: nota {}/10", result.final_score),
            body_len = body.len(),
            "[MOCK] report email"
        );
        Ok(())
    }
}
