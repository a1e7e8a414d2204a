use servicos_api::ApiError;
use std::fmt;

use crate::validacao::ErrosValidacao;

#[derive(Debug)]
pub enum AppError {
    Api(ApiError),
    ConfigError(String),
    Validacao(ErrosValidacao),
    JsonError(serde_json::Error),
    InternalError(String),
}

impl AppError {
    /// Erros que devem levar o usuário à tela de login
    pub fn exige_login(&self) -> bool {
        matches!(self, AppError::Api(err) if err.exige_login())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(err) => write!(f, "{}", err),
            AppError::ConfigError(msg) => write!(f, "Erro de configuração: {}", msg),
            AppError::Validacao(erros) => write!(f, "Formulário inválido: {}", erros),
            AppError::JsonError(err) => write!(f, "Erro de JSON: {}", err),
            AppError::InternalError(msg) => write!(f, "Erro interno: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl From<ErrosValidacao> for AppError {
    fn from(erros: ErrosValidacao) -> Self {
        AppError::Validacao(erros)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
