use serde::{Deserialize, Serialize};

use super::ordem::OrdemResumo;
use super::pessoa::PessoaResumo;

/// Visita agendada na agenda do prestador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agendamento {
    pub id: i64,
    #[serde(default, alias = "data", alias = "dataAgendada")]
    pub data_hora: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cliente: Option<PessoaResumo>,
    #[serde(default)]
    pub ordem_servico: Option<OrdemResumo>,
}
