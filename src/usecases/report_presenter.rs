//! Report presenter. Read-only projection of an `EvaluationResult` into display values.

use crate::domain::{EvaluationResult, ItemResult};
use serde::Serialize;
use std::fmt::Write;

/// Severity tier of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreTier {
    /// >= 9 top, >= 7 mid, else low.
    pub fn for_score(score: u32) -> Self {
        if score >= 9 {
            ScoreTier::Excellent
        } else if score >= 7 {
            ScoreTier::Good
        } else {
            ScoreTier::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excelente",
            ScoreTier::Good => "Bom",
            ScoreTier::NeedsImprovement => "Necessita Melhorias",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub key: String,
    pub title: String,
    pub approved: usize,
    pub total: usize,
}

/// Everything the report screen shows besides the raw result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub final_score: u32,
    pub tier: ScoreTier,
    /// Rounded to the nearest integer.
    pub approval_percentage: u32,
    pub sections: Vec<SectionSummary>,
    pub closing_remark: String,
}

pub fn present(result: &EvaluationResult) -> ReportView {
    ReportView {
        final_score: result.final_score,
        tier: ScoreTier::for_score(result.final_score),
        approval_percentage: (result.approval_ratio() * 100.0).round() as u32,
        sections: result
            .sections
            .iter()
            .map(|s| SectionSummary {
                key: s.key.clone(),
                title: s.title.clone(),
                approved: s.approved_count(),
                total: s.items.len(),
            })
            .collect(),
        closing_remark: closing_remark(result),
    }
}

/// Suggestion shown under a rejected item. `None` for approved items.
pub fn improvement_hint(item: &ItemResult) -> Option<String> {
    if item.approved {
        return None;
    }
    let mut hint = String::from(
        "Revisar os pontos não atendidos e detalhar melhor as informações solicitadas.",
    );
    if item.id.contains("cronograma") {
        hint.push_str(" Especialmente importante definir dependências claras entre atividades.");
    }
    if item.id.contains("riscos") {
        hint.push_str(" Foco especial na identificação e estratégias de mitigação de riscos.");
    }
    if item.id.contains("comunicacao") {
        hint.push_str(" Detalhar melhor os canais e frequência de comunicação.");
    }
    Some(hint)
}

fn closing_remark(result: &EvaluationResult) -> String {
    let quality = if result.final_score >= 8 {
        "boa"
    } else {
        "adequada"
    };
    let completeness = if result.penalties == 0 {
        "Parabéns pela completude dos entregáveis!"
    } else {
        "Recomendo revisar os itens destacados para melhorar a qualidade geral."
    };
    let readiness = if result.bonus > 0 {
        " O projeto está pronto para apresentação no Shark Tank!"
    } else {
        " Com os ajustes sugeridos, o projeto estará pronto para a apresentação final."
    };
    format!(
        "Este projeto demonstra {} aplicação dos conceitos de gerenciamento de projetos. {}{}",
        quality, completeness, readiness
    )
}

/// Markdown rendering of the full report.
pub fn render_markdown(result: &EvaluationResult) -> String {
    let view = present(result);
    let mut md = String::new();

    let _ = writeln!(md, "# Relatório de Avaliação: SHARK TANK PROJECT MANAGEMENT\n");
    let _ = writeln!(
        md,
        "**Nota final:** {}/10 ({}) | **Avaliado em:** {}\n",
        view.final_score,
        view.tier.label(),
        result.evaluated_at.format("%Y-%m-%d %H:%M UTC")
    );
    md.push_str("---\n\n");

    md.push_str("## Resumo Geral\n\n");
    let _ = writeln!(
        md,
        "- Entregáveis aprovados: {}/{} ({}%)",
        result.approved_items, result.total_items, view.approval_percentage
    );
    let _ = writeln!(md, "- Pontuação base: {}", result.total_score);
    let _ = writeln!(md, "- Penalidades: {}", result.penalties);
    let _ = writeln!(md, "- Bônus: {}\n", result.bonus);

    md.push_str("## Detalhamento por Encontro\n\n");
    for (section, summary) in result.sections.iter().zip(&view.sections) {
        let _ = writeln!(
            md,
            "### {}: {} ({}/{})\n",
            section.key, section.title, summary.approved, summary.total
        );
        for item in &section.items {
            let mark = if item.approved { "✅" } else { "❌" };
            let _ = writeln!(md, "{} **{}**\n", mark, item.name);
            for q in &item.questions {
                let box_mark = if q.satisfied { "x" } else { " " };
                let _ = writeln!(md, "- [{}] {}", box_mark, q.question);
            }
            let _ = writeln!(md, "\n> {}", item.feedback);
            if let Some(hint) = improvement_hint(item) {
                let _ = writeln!(md, ">\n> Sugestão: {}", hint);
            }
            md.push('\n');
        }
    }

    md.push_str("## Avaliação Qualitativa\n\n");
    for rating in &result.qualitative {
        let _ = writeln!(md, "- **{}:** {}", rating.criterion, rating.rating);
    }
    let _ = writeln!(md, "\n*\"{}\"*\n", view.closing_remark);

    md.push_str("---\n");
    md.push_str("*Gerado por Vivi, professora auxiliar de IA*\n");
    md
}
