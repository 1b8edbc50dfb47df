//! Assistant reply rules. Pure functions of (input, context).
//!
//! Order of evaluation: keyword rules (first match wins), then the reply for
//! the current step, then a pick from the generic pool done by the caller.

use crate::domain::entities::{ChatContext, Step};

pub const WELCOME: &str = "Oi! Sou a Vivi, sua professora auxiliar de IA! 👩‍🏫 Estou aqui para te ajudar na avaliação dos projetos do MBA em Gerenciamento de Projetos. Vamos avaliar juntos usando o checklist SHARK TANK PROJECT MANAGEMENT!";

/// A reply triggered when the user's text contains any of `keywords`.
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["nota", "pontuação"],
        reply: "A nota é calculada com base no sistema SHARK TANK: 8 pontos base (1 por encontro), menos 1 ponto para cada encontro com ambos entregáveis reprovados, mais 2 pontos de bônus se o projeto for completamente aprovado! 📊",
    },
    KeywordRule {
        keywords: &["cronograma", "tempo"],
        reply: "Para o cronograma, preciso ver: dependências claras entre atividades, alocação adequada de recursos e identificação do caminho crítico. Estes são pontos fundamentais! ⏰",
    },
    KeywordRule {
        keywords: &["risco", "contingência"],
        reply: "Excelente pergunta! Na análise de riscos, verifico se os principais riscos foram identificados, se há estratégias de resposta definidas e se estão categorizados adequadamente. A gestão de crise é crucial! 🚨",
    },
    KeywordRule {
        keywords: &["comunicação"],
        reply: "No plano de comunicação, analiso se os canais estão bem definidos, se há uma matriz de responsabilidades clara e se a frequência dos reportes está estabelecida. Comunicação é 20% da avaliação! 📢",
    },
    KeywordRule {
        keywords: &["melhoria", "sugestão"],
        reply: "Minhas sugestões se baseiam nos critérios não atendidos. Foco sempre em: completude da informação, clareza dos objetivos, viabilidade das propostas e aderência às melhores práticas de GP! 💡",
    },
    KeywordRule {
        keywords: &["obrigad", "obrigat"],
        reply: "Por nada! Estou aqui para ajudar vocês a alcançarem a excelência em gerenciamento de projetos. Juntos, vamos fazer esse projeto brilhar no Shark Tank! 🌟",
    },
    KeywordRule {
        keywords: &["shark tank"],
        reply: "O SHARK TANK PROJECT MANAGEMENT é nosso checklist completo que cobre todos os encontros do MBA! Cada encontro tem entregáveis específicos que são avaliados com 3 perguntas essenciais. É a nossa metodologia de excelência! 🦈",
    },
];

pub const STEP_UPLOAD_REPLY: &str = "Estou ansiosa para analisar os arquivos! Lembre-se: aceito PDFs, planilhas e textos. Quanto mais completo o material, melhor será minha avaliação! 📁";
pub const STEP_EVALUATE_REPLY: &str = "Durante a avaliação, analiso cada entregável contra os critérios estabelecidos. Uso IA para verificar competência técnica, uso estratégico de tecnologia, gestão de crise e comunicação. É uma análise completa! 🧠";
pub const STEP_REPORT_REPLY: &str = "O relatório mostra tudo: notas por encontro, feedback específico, sugestões de melhoria e avaliação qualitativa. É seu guia para alcançar a excelência! Tem alguma dúvida específica? 📋";

pub static GENERIC_REPLIES: &[&str] = &[
    "Interessante! Como professora auxiliar, posso te ajudar com qualquer dúvida sobre avaliação de projetos, metodologias ou critérios. O que mais você gostaria de saber? 🤔",
    "Ótima questão! Minha especialidade é avaliar projetos de MBA em GP. Posso explicar critérios, dar sugestões ou esclarecer dúvidas sobre a metodologia SHARK TANK! 📚",
    "Como sua assistente de IA, estou aqui para tornar a avaliação mais clara e eficiente. Tem alguma pergunta específica sobre o projeto ou os critérios? 💭",
];

pub const CONTEXT_UPLOAD: &str = "Comece fazendo o upload dos arquivos do projeto (PDFs, planilhas ou textos). Estou pronta para extrair e analisar o conteúdo!";
pub const CONTEXT_FILES_READY: &str =
    "Ótimo! Arquivos carregados. Agora vou extrair o conteúdo para análise. ✨";
pub const CONTEXT_CONTENT_READY: &str = "Perfeito! Conteúdo extraído. Agora posso avaliar o projeto usando os critérios do SHARK TANK. Vou verificar cada encontro e seus entregáveis! 🦈";
pub const CONTEXT_RESULTS_READY: &str = "Avaliação concluída! 🎉 Agora você pode ver o relatório completo com notas, feedback e sugestões. O que achou da avaliação?";

/// Where a reply came from. `Generic` leaves the pick to the caller's RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Keyword(&'static str),
    Step(&'static str),
    Generic,
}

/// Selects a reply for `input`: keyword rules, then the reply for the current
/// step, then the generic pool. Without a context (chat used outside a session)
/// only keywords and the generic pool apply.
pub fn select_reply(input: &str, context: Option<&ChatContext>) -> ReplySource {
    let lower = input.to_lowercase();
    if let Some(rule) = KEYWORD_RULES
        .iter()
        .find(|r| r.keywords.iter().any(|k| lower.contains(k)))
    {
        return ReplySource::Keyword(rule.reply);
    }
    match context.map(|c| c.step) {
        Some(Step::Upload) => ReplySource::Step(STEP_UPLOAD_REPLY),
        Some(Step::Evaluate) => ReplySource::Step(STEP_EVALUATE_REPLY),
        Some(Step::Report) => ReplySource::Step(STEP_REPORT_REPLY),
        None => ReplySource::Generic,
    }
}

/// Message the assistant volunteers when the application context changes.
pub fn context_message(context: &ChatContext) -> Option<&'static str> {
    if context.step == Step::Upload && !context.has_files {
        Some(CONTEXT_UPLOAD)
    } else if context.has_files && !context.has_content {
        Some(CONTEXT_FILES_READY)
    } else if context.has_content && context.step == Step::Evaluate {
        Some(CONTEXT_CONTENT_READY)
    } else if context.has_results && context.step == Step::Report {
        Some(CONTEXT_RESULTS_READY)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(step: Step) -> ChatContext {
        ChatContext {
            step,
            ..ChatContext::default()
        }
    }

    #[test]
    fn test_schedule_keyword_any_case() {
        for input in ["cronograma", "Como está o CRONOGRAMA?", "CroNoGrama"] {
            assert_eq!(
                select_reply(input, Some(&ctx(Step::Report))),
                ReplySource::Keyword(KEYWORD_RULES[1].reply)
            );
        }
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "nota" is checked before "cronograma"
        let reply = select_reply("qual a nota do cronograma?", Some(&ctx(Step::Upload)));
        assert_eq!(reply, ReplySource::Keyword(KEYWORD_RULES[0].reply));
    }

    #[test]
    fn test_accented_keywords_match_upper_case() {
        let reply = select_reply("PONTUAÇÃO final?", Some(&ctx(Step::Upload)));
        assert_eq!(reply, ReplySource::Keyword(KEYWORD_RULES[0].reply));
        let reply = select_reply("Obrigada!", Some(&ctx(Step::Upload)));
        assert_eq!(reply, ReplySource::Keyword(KEYWORD_RULES[5].reply));
    }

    #[test]
    fn test_falls_back_to_step_reply() {
        assert_eq!(
            select_reply("olá", Some(&ctx(Step::Upload))),
            ReplySource::Step(STEP_UPLOAD_REPLY)
        );
        assert_eq!(
            select_reply("olá", Some(&ctx(Step::Evaluate))),
            ReplySource::Step(STEP_EVALUATE_REPLY)
        );
        assert_eq!(
            select_reply("olá", Some(&ctx(Step::Report))),
            ReplySource::Step(STEP_REPORT_REPLY)
        );
    }

    #[test]
    fn test_generic_without_context() {
        assert_eq!(select_reply("olá", None), ReplySource::Generic);
        assert_eq!(
            select_reply("e o shark tank?", None),
            ReplySource::Keyword(KEYWORD_RULES[6].reply)
        );
    }

    #[test]
    fn test_context_messages() {
        assert_eq!(context_message(&ctx(Step::Upload)), Some(CONTEXT_UPLOAD));

        let files = ChatContext {
            step: Step::Upload,
            has_files: true,
            ..ChatContext::default()
        };
        assert_eq!(context_message(&files), Some(CONTEXT_FILES_READY));

        let content = ChatContext {
            step: Step::Evaluate,
            has_files: true,
            has_content: true,
            has_results: false,
        };
        assert_eq!(context_message(&content), Some(CONTEXT_CONTENT_READY));

        let report = ChatContext {
            step: Step::Report,
            has_files: true,
            has_content: true,
            has_results: true,
        };
        assert_eq!(context_message(&report), Some(CONTEXT_RESULTS_READY));

        let idle = ChatContext {
            step: Step::Upload,
            has_files: true,
            has_content: true,
            has_results: false,
        };
        assert_eq!(context_message(&idle), None);
    }
}
