//! Checklist evaluator. Walks the sections in declaration order, judges every item
//! and hands the judged sections to the scoring tally.

use crate::domain::scoring::{self, FEEDBACK_APPROVED, FEEDBACK_REJECTED};
use crate::domain::{
    ChecklistItem, ChecklistSection, DomainError, EvaluationResult, ExtractedContent, ItemResult,
    Notice, QuestionResult, SectionResult,
};
use crate::ports::{Clock, ItemJudge, NotifierPort, Progress, ProgressPort};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Walk position: one state per section, then `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Section(usize),
    Complete,
}

impl WalkState {
    fn next(self, total: usize) -> Self {
        match self {
            WalkState::Section(i) if i + 1 < total => WalkState::Section(i + 1),
            _ => WalkState::Complete,
        }
    }
}

pub struct EvaluationService {
    judge: Arc<dyn ItemJudge>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn NotifierPort>,
    checklist: &'static [ChecklistSection],
    /// Synthetic pause per section.
    section_delay: Duration,
}

impl EvaluationService {
    pub fn new(
        judge: Arc<dyn ItemJudge>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn NotifierPort>,
        checklist: &'static [ChecklistSection],
        section_delay: Duration,
    ) -> Self {
        Self {
            judge,
            clock,
            notifier,
            checklist,
            section_delay,
        }
    }

    /// Evaluate `content` against the whole checklist. Notifies the final score or the failure.
    pub async fn evaluate(
        &self,
        content: &ExtractedContent,
        progress: &dyn ProgressPort,
    ) -> Result<EvaluationResult, DomainError> {
        match self.walk(content, progress).await {
            Ok(result) => {
                info!(
                    final_score = result.final_score,
                    penalties = result.penalties,
                    bonus = result.bonus,
                    approved = result.approved_items,
                    total = result.total_items,
                    "evaluation complete"
                );
                self.notifier.notify(&Notice::info(
                    "Avaliação concluída!",
                    format!("Nota final: {}/10", result.final_score),
                ));
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "evaluation failed");
                self.notifier.notify(&e.notice());
                Err(e)
            }
        }
    }

    async fn walk(
        &self,
        content: &ExtractedContent,
        progress: &dyn ProgressPort,
    ) -> Result<EvaluationResult, DomainError> {
        let total = self.checklist.len();
        let mut sections = Vec::with_capacity(total);
        let mut state = if total == 0 {
            WalkState::Complete
        } else {
            WalkState::Section(0)
        };

        while let WalkState::Section(index) = state {
            let section = &self.checklist[index];
            self.clock.sleep(self.section_delay).await;
            let judged = self.judge_section(section, content).await?;
            debug!(
                section = section.key,
                approved = judged.approved_count(),
                "section judged"
            );
            sections.push(judged);
            progress.report(&Progress {
                label: format!("Avaliando {}: {}", section.key, section.title),
                done: index + 1,
                total,
            });
            state = state.next(total);
        }

        Ok(scoring::tally(sections, self.clock.now()))
    }

    async fn judge_section(
        &self,
        section: &ChecklistSection,
        content: &ExtractedContent,
    ) -> Result<SectionResult, DomainError> {
        let mut items = Vec::with_capacity(section.items.len());
        for item in section.items {
            items.push(self.judge_item(item, content).await?);
        }
        Ok(SectionResult {
            key: section.key.to_string(),
            title: section.title.to_string(),
            items,
        })
    }

    async fn judge_item(
        &self,
        item: &ChecklistItem,
        content: &ExtractedContent,
    ) -> Result<ItemResult, DomainError> {
        let verdict = self.judge.judge(item, content).await.map_err(|e| match e {
            DomainError::Evaluation(_) => e,
            other => DomainError::Evaluation(other.to_string()),
        })?;
        if verdict.satisfied.len() != item.questions.len() {
            return Err(DomainError::Evaluation(format!(
                "judge returned {} answers for {} questions of {}",
                verdict.satisfied.len(),
                item.questions.len(),
                item.id
            )));
        }

        Ok(ItemResult {
            id: item.id.to_string(),
            name: item.name.to_string(),
            approved: verdict.approved,
            questions: item
                .questions
                .iter()
                .zip(verdict.satisfied)
                .map(|(q, satisfied)| QuestionResult {
                    question: q.text.to_string(),
                    satisfied,
                })
                .collect(),
            feedback: if verdict.approved {
                FEEDBACK_APPROVED
            } else {
                FEEDBACK_REJECTED
            }
            .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ManualClock;
    use crate::adapters::judge::KeywordJudge;
    use crate::adapters::notifier::RecordingNotifier;
    use crate::adapters::ui::progress::RecordingProgress;
    use crate::domain::CHECKLIST;
    use crate::ports::ItemVerdict;

    /// Approves or rejects everything.
    struct FixedJudge(bool);

    #[async_trait::async_trait]
    impl ItemJudge for FixedJudge {
        async fn judge(
            &self,
            item: &ChecklistItem,
            _content: &ExtractedContent,
        ) -> Result<ItemVerdict, DomainError> {
            Ok(ItemVerdict {
                approved: self.0,
                satisfied: vec![self.0; item.questions.len()],
            })
        }
    }

    /// Fails on the item with the given id.
    struct FailingJudge(&'static str);

    #[async_trait::async_trait]
    impl ItemJudge for FailingJudge {
        async fn judge(
            &self,
            item: &ChecklistItem,
            _content: &ExtractedContent,
        ) -> Result<ItemVerdict, DomainError> {
            if item.id == self.0 {
                return Err(DomainError::Evaluation("model unavailable".into()));
            }
            Ok(ItemVerdict {
                approved: true,
                satisfied: vec![true; item.questions.len()],
            })
        }
    }

    fn content(text: &str) -> ExtractedContent {
        ExtractedContent {
            text: text.to_string(),
            sources: vec!["projeto.txt".to_string()],
        }
    }

    fn service(judge: Arc<dyn ItemJudge>) -> (EvaluationService, Arc<ManualClock>, Arc<RecordingNotifier>) {
        let clock = Arc::new(ManualClock::default());
        let notifier = Arc::new(RecordingNotifier::new());
        let service = EvaluationService::new(
            judge,
            clock.clone(),
            notifier.clone(),
            CHECKLIST,
            Duration::from_millis(1500),
        );
        (service, clock, notifier)
    }

    #[tokio::test]
    async fn test_all_approved_scores_ten() {
        let (service, clock, notifier) = service(Arc::new(FixedJudge(true)));
        let progress = RecordingProgress::new();
        let start = clock.now();

        let result = service.evaluate(&content("x"), &progress).await.unwrap();

        assert_eq!(result.final_score, 10);
        assert_eq!(result.bonus, 2);
        assert_eq!(result.penalties, 0);
        assert_eq!(result.approved_items, 8);
        assert_eq!(result.total_items, 8);
        assert_eq!(clock.elapsed_since(start), Duration::from_millis(8 * 1500));
        assert_eq!(notifier.notices()[0].description, "Nota final: 10/10");

        let item = &result.section("Encontro 1A").unwrap().items[0];
        assert_eq!(item.feedback, FEEDBACK_APPROVED);
        assert_eq!(item.questions.len(), 3);
    }

    #[tokio::test]
    async fn test_all_rejected_scores_zero() {
        let (service, _clock, _notifier) = service(Arc::new(FixedJudge(false)));
        let progress = RecordingProgress::new();

        let result = service.evaluate(&content("x"), &progress).await.unwrap();

        assert_eq!(result.penalties, 8);
        assert_eq!(result.final_score, 0);
        assert_eq!(result.bonus, 0);
        assert_eq!(
            result.sections[7].items[0].feedback,
            FEEDBACK_REJECTED
        );
    }

    #[tokio::test]
    async fn test_sections_in_declaration_order_with_progress() {
        let (service, _clock, _notifier) = service(Arc::new(FixedJudge(true)));
        let progress = RecordingProgress::new();

        let result = service.evaluate(&content("x"), &progress).await.unwrap();

        let keys: Vec<&str> = result.sections.iter().map(|s| s.key.as_str()).collect();
        let expected: Vec<&str> = CHECKLIST.iter().map(|s| s.key).collect();
        assert_eq!(keys, expected);

        let done: Vec<usize> = progress.updates().iter().map(|p| p.done).collect();
        assert_eq!(done, (1..=8).collect::<Vec<_>>());
        assert!(progress.updates().iter().all(|p| p.total == 8));
        assert_eq!(progress.updates()[0].label, "Avaliando Encontro 1A: Business Case");
    }

    #[tokio::test]
    async fn test_judge_failure_discards_partial_result() {
        let (service, _clock, notifier) = service(Arc::new(FailingJudge("3a_orcamento")));
        let progress = RecordingProgress::new();

        let err = service.evaluate(&content("x"), &progress).await.unwrap_err();

        assert!(matches!(err, DomainError::Evaluation(_)));
        assert_eq!(progress.updates().len(), 4);
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Erro na avaliação");
    }

    #[tokio::test]
    async fn test_keyword_judge_is_deterministic() {
        let text = "Problema de negócio claro, ROI de 30% e metas mensuráveis. \
                    Objetivos e escopo definidos com o patrocinador. \
                    Cronograma com dependências, recursos alocados e caminho crítico.";
        let (service, _clock, _notifier) = service(Arc::new(KeywordJudge::new(2)));

        let first = service
            .evaluate(&content(text), &RecordingProgress::new())
            .await
            .unwrap();
        let second = service
            .evaluate(&content(text), &RecordingProgress::new())
            .await
            .unwrap();

        assert_eq!(first.sections, second.sections);
        assert!(first.section("Encontro 1A").unwrap().items[0].approved);
        assert!(first.section("Encontro 1B").unwrap().items[0].approved);
        assert!(first.section("Encontro 2B").unwrap().items[0].approved);
        assert!(!first.section("Encontro 4B").unwrap().items[0].approved);
        assert_eq!(first.approved_items, 3);
        assert_eq!(first.penalties, 5);
        assert_eq!(first.final_score, 3);
    }
}
