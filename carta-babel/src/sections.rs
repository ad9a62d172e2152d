//! The fixed section catalogue
//!
//! Eleven `(key, title)` pairs that decide both the order in which fields are
//! compiled and the heading each one receives. The catalogue is static and
//! read-only.

use std::fmt;
use std::str::FromStr;

/// Identifier of one result field as sent by the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    DescricaoResumida,
    DescricaoCompleta,
    ServicoNaoCobre,
    TempoAtendimento,
    Custo,
    ResultadoSolicitacao,
    DocumentosNecessarios,
    InstrucoesSolicitante,
    CanaisDigitais,
    CanaisPresenciais,
    LegislacaoRelacionada,
}

impl FieldKey {
    /// The wire name of the field (the key in the upstream `result` object).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::DescricaoResumida => "descricao_resumida",
            FieldKey::DescricaoCompleta => "descricao_completa",
            FieldKey::ServicoNaoCobre => "servico_nao_cobre",
            FieldKey::TempoAtendimento => "tempo_atendimento",
            FieldKey::Custo => "custo",
            FieldKey::ResultadoSolicitacao => "resultado_solicitacao",
            FieldKey::DocumentosNecessarios => "documentos_necessarios",
            FieldKey::InstrucoesSolicitante => "instrucoes_solicitante",
            FieldKey::CanaisDigitais => "canais_digitais",
            FieldKey::CanaisPresenciais => "canais_presenciais",
            FieldKey::LegislacaoRelacionada => "legislacao_relacionada",
        }
    }

    /// Fields whose value already carries its own headings are inserted as-is.
    pub fn is_verbatim(self) -> bool {
        self == FieldKey::DescricaoCompleta
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTIONS
            .iter()
            .map(|section| section.key)
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown field '{s}'"))
    }
}

/// One entry of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub key: FieldKey,
    pub title: &'static str,
}

/// Inclusion order and headings of the compiled document.
pub const SECTIONS: [SectionSpec; 11] = [
    SectionSpec {
        key: FieldKey::DescricaoResumida,
        title: "Descrição Resumida",
    },
    SectionSpec {
        key: FieldKey::DescricaoCompleta,
        title: "Descrição Completa",
    },
    SectionSpec {
        key: FieldKey::ServicoNaoCobre,
        title: "O que o serviço não cobre",
    },
    SectionSpec {
        key: FieldKey::TempoAtendimento,
        title: "Tempo para atendimento",
    },
    SectionSpec {
        key: FieldKey::Custo,
        title: "Custo",
    },
    SectionSpec {
        key: FieldKey::ResultadoSolicitacao,
        title: "Resultado da solicitação",
    },
    SectionSpec {
        key: FieldKey::DocumentosNecessarios,
        title: "Documentos necessários",
    },
    SectionSpec {
        key: FieldKey::InstrucoesSolicitante,
        title: "Instruções para o solicitante",
    },
    SectionSpec {
        key: FieldKey::CanaisDigitais,
        title: "Canais digitais",
    },
    SectionSpec {
        key: FieldKey::CanaisPresenciais,
        title: "Canais presenciais",
    },
    SectionSpec {
        key: FieldKey::LegislacaoRelacionada,
        title: "Legislação relacionada",
    },
];

/// Look up the catalogue entry for a key.
pub fn section(key: FieldKey) -> &'static SectionSpec {
    SECTIONS
        .iter()
        .find(|section| section.key == key)
        .unwrap_or(&SECTIONS[0])
}
