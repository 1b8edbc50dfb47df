//! Demo judge. Random draws from a seedable RNG, so a run can be replayed.
//!
//! Approves an item with p = 0.7; questions of approved items pass with p = 0.9,
//! questions of rejected items with p = 0.3.

use crate::domain::{ChecklistItem, DomainError, ExtractedContent};
use crate::ports::{ItemJudge, ItemVerdict};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tracing::info;

const APPROVAL_P: f64 = 0.7;
const SATISFIED_IF_APPROVED_P: f64 = 0.9;
const SATISFIED_IF_REJECTED_P: f64 = 0.3;

pub struct SeededJudge {
    rng: Mutex<StdRng>,
}

impl SeededJudge {
    pub fn new(seed: u64) -> Self {
        info!(seed, "[DEMO] seeded judge enabled, verdicts are random draws");
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait::async_trait]
impl ItemJudge for SeededJudge {
    async fn judge(
        &self,
        item: &ChecklistItem,
        _content: &ExtractedContent,
    ) -> Result<ItemVerdict, DomainError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| DomainError::Evaluation("judge RNG poisoned".into()))?;
        let approved = rng.gen_bool(APPROVAL_P);
        let p = if approved {
            SATISFIED_IF_APPROVED_P
        } else {
            SATISFIED_IF_REJECTED_P
        };
        let satisfied = item.questions.iter().map(|_| rng.gen_bool(p)).collect();
        Ok(ItemVerdict {
            approved,
            satisfied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CHECKLIST;

    async fn run(judge: &SeededJudge) -> Vec<ItemVerdict> {
        let content = ExtractedContent {
            text: String::new(),
            sources: vec![],
        };
        let mut out = Vec::new();
        for section in CHECKLIST {
            for item in section.items {
                out.push(judge.judge(item, &content).await.unwrap());
            }
        }
        out
    }

    #[tokio::test]
    async fn test_same_seed_same_verdicts() {
        let a = run(&SeededJudge::new(42)).await;
        let b = run(&SeededJudge::new(42)).await;
        assert_eq!(a, b);
        assert!(a.iter().all(|v| v.satisfied.len() == 3));
    }
}
