//! Deterministic judge: a question is satisfied when the content mentions one of its hints.

use crate::domain::checklist::fold;
use crate::domain::{ChecklistItem, DomainError, ExtractedContent};
use crate::ports::{ItemJudge, ItemVerdict};
use tracing::debug;

pub struct KeywordJudge {
    /// Satisfied questions needed to approve an item.
    min_satisfied: usize,
}

impl KeywordJudge {
    /// A threshold of 0 is raised to 1.
    pub fn new(min_satisfied: usize) -> Self {
        Self {
            min_satisfied: min_satisfied.max(1),
        }
    }

    /// Same rules as `judge`, without the async wrapper.
    pub fn verdict(&self, item: &ChecklistItem, folded_content: &str) -> ItemVerdict {
        let satisfied: Vec<bool> = item
            .questions
            .iter()
            .map(|q| q.hints.iter().any(|h| folded_content.contains(h)))
            .collect();
        let hits = satisfied.iter().filter(|s| **s).count();
        ItemVerdict {
            approved: hits >= self.min_satisfied.min(item.questions.len()),
            satisfied,
        }
    }
}

impl Default for KeywordJudge {
    fn default() -> Self {
        Self::new(2)
    }
}

#[async_trait::async_trait]
impl ItemJudge for KeywordJudge {
    async fn judge(
        &self,
        item: &ChecklistItem,
        content: &ExtractedContent,
    ) -> Result<ItemVerdict, DomainError> {
        // file names in the fragment headers must not count as content
        let verdict = self.verdict(item, &fold(&content.body_text()));
        debug!(item = item.id, approved = verdict.approved, "keyword verdict");
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CHECKLIST;
    use crate::usecases::extraction_service::PDF_PLACEHOLDER;

    fn item(id: &str) -> &'static ChecklistItem {
        CHECKLIST
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| i.id == id)
            .unwrap()
    }

    fn content(text: &str) -> ExtractedContent {
        ExtractedContent {
            text: text.to_string(),
            sources: vec![],
        }
    }

    #[tokio::test]
    async fn test_accents_and_case_are_ignored() {
        let judge = KeywordJudge::default();
        let verdict = judge
            .judge(
                item("3a_orcamento"),
                &content("ORÇAMENTO por categoria; RISCOS mapeados; plano de CONTINGÊNCIA."),
            )
            .await
            .unwrap();
        assert_eq!(verdict.satisfied, vec![true, true, true]);
        assert!(verdict.approved);
    }

    #[tokio::test]
    async fn test_threshold() {
        let text = content("Canais: Slack e e-mail. Reporte semanal.");
        let lenient = KeywordJudge::new(2)
            .judge(item("3b_comunicacao"), &text)
            .await
            .unwrap();
        assert_eq!(lenient.satisfied, vec![true, false, true]);
        assert!(lenient.approved);

        let strict = KeywordJudge::new(3)
            .judge(item("3b_comunicacao"), &text)
            .await
            .unwrap();
        assert!(!strict.approved);
    }

    #[tokio::test]
    async fn test_placeholder_content_is_rejected() {
        let judge = KeywordJudge::default();
        let text = content(
            "=== plano.pdf ===\n[Conteúdo PDF extraído via OCR - implementação completa necessária]",
        );
        for section in CHECKLIST {
            for item in section.items {
                let verdict = judge.judge(item, &text).await.unwrap();
                assert!(!verdict.approved, "{}", item.id);
            }
        }
    }

    #[tokio::test]
    async fn test_file_name_is_not_content() {
        let judge = KeywordJudge::default();
        let text = content(&format!(
            "{}\n{}",
            ExtractedContent::fragment_header("orcamento_riscos_contingencia.pdf"),
            PDF_PLACEHOLDER
        ));
        let verdict = judge.judge(item("3a_orcamento"), &text).await.unwrap();
        assert_eq!(verdict.satisfied, vec![false, false, false]);
        assert!(!verdict.approved);
    }

    #[tokio::test]
    async fn test_zero_threshold_still_needs_a_match() {
        let verdict = KeywordJudge::new(0)
            .judge(item("3b_comunicacao"), &content("Sem relação nenhuma."))
            .await
            .unwrap();
        assert!(!verdict.approved);
    }
}
