use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub sessao: SessaoSettings,
    #[serde(default)]
    pub paginacao: PaginacaoSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: servicos_api::BASE_URL_PADRAO.to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessaoSettings {
    pub arquivo_token: String,  // Onde o token JWT fica entre execuções
}

impl Default for SessaoSettings {
    fn default() -> Self {
        Self {
            arquivo_token: ".gestao-servicos-token".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaginacaoSettings {
    pub itens_por_pagina: usize,
}

impl Default for PaginacaoSettings {
    fn default() -> Self {
        Self { itens_por_pagina: 10 }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::carregar(&run_mode, "config")
    }

    /// Monta as configurações a partir de `{diretorio}/default` e `{diretorio}/{run_mode}`
    pub fn carregar(run_mode: &str, diretorio: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name(&format!("{}/default", diretorio)).required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("{}/{}", diretorio, run_mode)).required(false))
            .add_source(Environment::with_prefix("GESTAO_SERVICOS").separator("__"));

        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            builder = builder.set_override("api.base_url", base_url)?;
        }
        if let Ok(arquivo) = std::env::var("TOKEN_FILE") {
            builder = builder.set_override("sessao.arquivo_token", arquivo)?;
        }

        let s = builder.build()?;

        s.try_deserialize()
    }
}
