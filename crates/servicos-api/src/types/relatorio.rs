use serde::{Deserialize, Serialize};

use super::ordem::OrdemResumo;
use super::pessoa::PessoaResumo;

/// Relatório de serviço: liga ordem, prestador e empresa ao custo real
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioServico {
    pub id: i64,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default, alias = "custoReal", alias = "valor")]
    pub custo: Option<f64>,
    #[serde(default, alias = "createdAt")]
    pub data_criacao: Option<String>,
    #[serde(default)]
    pub prestador: Option<PessoaResumo>,
    #[serde(default)]
    pub ordem_servico: Option<OrdemResumo>,
    #[serde(default)]
    pub empresa: Option<PessoaResumo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoRelatorio {
    pub descricao: String,
    pub custo: f64,
    pub ordem_servico_id: i64,
    pub prestador_id: i64,
    pub empresa_id: i64,
}
