//! SHARK TANK PROJECT MANAGEMENT checklist. Static, read-only, process lifetime.
//!
//! Eight sections ("encontros") in teaching order, each with its deliverable
//! items and the three questions every item is judged against. Keyword hints
//! are lower-case and accent-folded (see [`fold`]).

/// One evaluation question plus the hints the keyword judge looks for.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistQuestion {
    pub text: &'static str,
    pub hints: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub name: &'static str,
    pub questions: &'static [ChecklistQuestion],
}

#[derive(Debug, Clone, Copy)]
pub struct ChecklistSection {
    pub key: &'static str,
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

const fn q(text: &'static str, hints: &'static [&'static str]) -> ChecklistQuestion {
    ChecklistQuestion { text, hints }
}

pub static CHECKLIST: &[ChecklistSection] = &[
    ChecklistSection {
        key: "Encontro 1A",
        title: "Business Case",
        items: &[ChecklistItem {
            id: "1a_business_case",
            name: "Business Case completo",
            questions: &[
                q(
                    "O problema de negócio está claramente definido?",
                    &["problema", "oportunidade de negocio"],
                ),
                q(
                    "A justificativa financeira está apresentada?",
                    &["justificativa", "retorno", "roi", "payback", "vpl"],
                ),
                q(
                    "Os benefícios esperados são mensuráveis?",
                    &["beneficio", "meta", "kpi"],
                ),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 1B",
        title: "Termo de Abertura",
        items: &[ChecklistItem {
            id: "1b_termo_abertura",
            name: "Termo de Abertura do Projeto",
            questions: &[
                q(
                    "Os objetivos do projeto estão claramente definidos?",
                    &["objetivo"],
                ),
                q("O escopo preliminar está delimitado?", &["escopo"]),
                q(
                    "Os stakeholders principais foram identificados?",
                    &["stakeholder", "partes interessadas", "parte interessada", "patrocinador"],
                ),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 2A",
        title: "Estrutura Analítica do Projeto",
        items: &[ChecklistItem {
            id: "2a_eap",
            name: "EAP (Estrutura Analítica do Projeto)",
            questions: &[
                q(
                    "A decomposição do trabalho está completa?",
                    &["eap", "decomposicao", "wbs"],
                ),
                q(
                    "Os pacotes de trabalho estão bem definidos?",
                    &["pacote de trabalho", "pacotes de trabalho"],
                ),
                q(
                    "A hierarquia está logicamente estruturada?",
                    &["hierarquia", "nivel"],
                ),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 2B",
        title: "Cronograma e Recursos",
        items: &[ChecklistItem {
            id: "2b_cronograma",
            name: "Cronograma detalhado",
            questions: &[
                q(
                    "As atividades têm dependências claras?",
                    &["dependencia", "predecessora", "sucessora"],
                ),
                q(
                    "Os recursos estão adequadamente alocados?",
                    &["recurso", "alocacao"],
                ),
                q("O caminho crítico foi identificado?", &["caminho critico"]),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 3A",
        title: "Orçamento e Riscos",
        items: &[ChecklistItem {
            id: "3a_orcamento",
            name: "Orçamento e Análise de Riscos",
            questions: &[
                q(
                    "O orçamento está detalhado por categoria?",
                    &["orcamento", "custo"],
                ),
                q("Os principais riscos foram identificados?", &["risco"]),
                q(
                    "As estratégias de resposta aos riscos estão definidas?",
                    &["mitigacao", "contingencia", "resposta ao risco", "respostas aos riscos"],
                ),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 3B",
        title: "Plano de Comunicação",
        items: &[ChecklistItem {
            id: "3b_comunicacao",
            name: "Plano de Comunicação",
            questions: &[
                q(
                    "Os canais de comunicação estão definidos?",
                    &["canal", "canais"],
                ),
                q(
                    "A matriz de responsabilidades está clara?",
                    &["raci", "matriz de responsabilidade", "responsavel"],
                ),
                q(
                    "A frequência de reportes está estabelecida?",
                    &["frequencia", "semanal", "quinzenal", "mensal", "diario"],
                ),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 4A",
        title: "Monitoramento e Controle",
        items: &[ChecklistItem {
            id: "4a_monitoramento",
            name: "Plano de Monitoramento e Controle",
            questions: &[
                q(
                    "Os indicadores de desempenho estão definidos?",
                    &["indicador", "kpi", "desempenho"],
                ),
                q(
                    "O processo de controle de mudanças está estabelecido?",
                    &["controle de mudanca", "mudanca"],
                ),
                q(
                    "Os marcos de controle estão identificados?",
                    &["marco", "milestone"],
                ),
            ],
        }],
    },
    ChecklistSection {
        key: "Encontro 4B",
        title: "Encerramento e Lições Aprendidas",
        items: &[ChecklistItem {
            id: "4b_encerramento",
            name: "Plano de Encerramento",
            questions: &[
                q(
                    "Os critérios de aceitação estão definidos?",
                    &["criterio de aceitacao", "criterios de aceitacao", "aceite"],
                ),
                q(
                    "O processo de transição está planejado?",
                    &["transicao", "handover"],
                ),
                q(
                    "As lições aprendidas foram documentadas?",
                    &["licoes aprendidas", "licao aprendida"],
                ),
            ],
        }],
    },
];

/// Total deliverable items across every section.
pub fn total_items() -> usize {
    CHECKLIST.iter().map(|s| s.items.len()).sum()
}

/// Lower-cases and strips Portuguese diacritics so hints match "Orçamento" and "orcamento" alike.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
