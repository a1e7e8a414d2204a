use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pessoa::PessoaResumo;

/// Status de uma ordem de serviço
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusOrdem {
    Pendente,
    EmAndamento,
    Concluida,
    Cancelada,
}

impl StatusOrdem {
    pub const TODOS: [StatusOrdem; 4] = [
        StatusOrdem::Pendente,
        StatusOrdem::EmAndamento,
        StatusOrdem::Concluida,
        StatusOrdem::Cancelada,
    ];

    /// Valor exato enviado pelo backend
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusOrdem::Pendente => "PENDENTE",
            StatusOrdem::EmAndamento => "EM_ANDAMENTO",
            StatusOrdem::Concluida => "CONCLUIDA",
            StatusOrdem::Cancelada => "CANCELADA",
        }
    }

    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusOrdem::Pendente => "Pendente",
            StatusOrdem::EmAndamento => "Em andamento",
            StatusOrdem::Concluida => "Concluída",
            StatusOrdem::Cancelada => "Cancelada",
        }
    }
}

impl fmt::Display for StatusOrdem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusOrdem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusOrdem::TODOS
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Status de ordem desconhecido: {}", s))
    }
}

/// Ordem de serviço como listada no painel da empresa ou do cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdemServico {
    pub id: i64,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub custo_estimado: Option<f64>,
    #[serde(default, alias = "dataAbertura", alias = "createdAt")]
    pub data_criacao: Option<String>,
    #[serde(default)]
    pub cliente: Option<PessoaResumo>,
    #[serde(default)]
    pub prestador: Option<PessoaResumo>,
    #[serde(default)]
    pub empresa: Option<PessoaResumo>,
}

/// Ordem embutida em um relatório
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdemResumo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub custo_estimado: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaOrdemServico {
    pub descricao: String,
    pub custo_estimado: Option<f64>,
    pub cliente_id: i64,
    pub empresa_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prestador_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtualizacaoStatus {
    pub status: String,
}
