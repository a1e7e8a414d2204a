//! Tipos de erro para o crate servicos-api

use thiserror::Error;

/// Erros do cliente da API de serviços
#[derive(Debug, Error)]
pub enum ApiError {
    /// Erro de requisição HTTP
    #[error("Falha na requisição HTTP: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Backend respondeu com status não-2xx (exceto 401)
    #[error("Erro da API (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Backend respondeu 401; a sessão já foi encerrada
    #[error("Sessão expirada ou não autorizada")]
    NaoAutorizado,

    /// Operação exige sessão e nenhum token está presente
    #[error("Nenhuma sessão ativa. Faça login primeiro")]
    SemSessao,

    /// Erro de parsing JSON
    #[error("Falha ao interpretar JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Token presente mas payload ilegível
    #[error("Token inválido: {0}")]
    TokenInvalido(String),

    /// Claims não trazem o identificador exigido pelo perfil
    #[error("Identificador de {0} ausente no token")]
    IdentificadorAusente(&'static str),

    /// Erro ao ler ou gravar o token persistido
    #[error("Falha no armazenamento do token: {0}")]
    Armazenamento(#[from] std::io::Error),

    /// Erro de configuração
    #[error("Erro de configuração: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// Indica se o erro deve levar o usuário de volta ao login
    pub fn exige_login(&self) -> bool {
        matches!(
            self,
            ApiError::NaoAutorizado | ApiError::SemSessao | ApiError::IdentificadorAusente(_)
        )
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ApiError>;
