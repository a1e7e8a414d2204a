use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Referência aninhada a empresa, prestador ou cliente
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PessoaResumo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusPrestador {
    Ativo,
    Inativo,
}

impl StatusPrestador {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPrestador::Ativo => "ATIVO",
            StatusPrestador::Inativo => "INATIVO",
        }
    }
}

impl FromStr for StatusPrestador {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATIVO" => Ok(StatusPrestador::Ativo),
            "INATIVO" => Ok(StatusPrestador::Inativo),
            _ => Err(format!("Status de prestador desconhecido: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prestador {
    pub id: i64,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub especialidade: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub data_criacao: Option<String>,
    #[serde(default)]
    pub empresa: Option<PessoaResumo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub data_criacao: Option<String>,
}
