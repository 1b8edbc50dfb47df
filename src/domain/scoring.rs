//! Score tally: penalties, completion bonus and qualitative ratings.
//!
//! Pure function over judged sections; the evaluation use case feeds it.

use crate::domain::entities::{EvaluationResult, QualitativeRating, SectionResult};
use chrono::{DateTime, Utc};

pub const MAX_SCORE: u32 = 10;
pub const COMPLETION_BONUS: u32 = 2;
/// Approval ratio above which technical competence is rated top tier.
pub const EXCELLENCE_RATIO: f64 = 0.8;

pub const FEEDBACK_APPROVED: &str = "Entregável atende aos critérios estabelecidos.";
pub const FEEDBACK_REJECTED: &str =
    "Entregável necessita melhorias. Verifique os pontos destacados nas perguntas.";

/// Builds the final result. One base point per section, one penalty per section
/// with zero approved items, +2 (capped at 10) only when every item passed.
pub fn tally(sections: Vec<SectionResult>, evaluated_at: DateTime<Utc>) -> EvaluationResult {
    let base = sections.len() as u32;
    let penalties = sections.iter().filter(|s| s.approved_count() == 0).count() as u32;
    let approved_items: usize = sections.iter().map(SectionResult::approved_count).sum();
    let total_items: usize = sections.iter().map(|s| s.items.len()).sum();

    let total_score = base.saturating_sub(penalties);
    let mut final_score = total_score.min(MAX_SCORE);
    let mut bonus = 0;
    if approved_items == total_items {
        bonus = COMPLETION_BONUS;
        final_score = (final_score + bonus).min(MAX_SCORE);
    }

    let ratio = if total_items == 0 {
        0.0
    } else {
        approved_items as f64 / total_items as f64
    };

    EvaluationResult {
        sections,
        total_score,
        penalties,
        bonus,
        final_score,
        approved_items,
        total_items,
        qualitative: qualitative_ratings(ratio),
        evaluated_at,
    }
}

fn qualitative_ratings(ratio: f64) -> Vec<QualitativeRating> {
    let technical = if ratio > EXCELLENCE_RATIO {
        "Excelente"
    } else {
        "Bom"
    };
    [
        ("Competência Técnica (30%)", technical),
        (
            "Uso Estratégico de IA (25%)",
            "Adequado - projeto demonstra integração básica",
        ),
        (
            "Capacidade de Gestão de Crise (25%)",
            "Satisfatório - planos de contingência presentes",
        ),
        (
            "Comunicação e Transparência (20%)",
            "Bom - documentação clara e objetiva",
        ),
    ]
    .into_iter()
    .map(|(criterion, rating)| QualitativeRating {
        criterion: criterion.to_string(),
        rating: rating.to_string(),
    })
    .collect()
}
