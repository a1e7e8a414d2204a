//! Cliente HTTP para a API REST da plataforma

use crate::error::{ApiError, Result};
use crate::session::Sessao;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const BASE_URL_PADRAO: &str = "http://localhost:8080/api";

/// Cliente único da aplicação
///
/// - Base URL fixa
/// - `Content-Type: application/json`
/// - `Authorization: Bearer <token>` anexado a cada requisição quando há sessão
/// - 401 encerra a sessão (`EstadoSessao::Expirada`) e vira `ApiError::NaoAutorizado`
#[derive(Clone)]
pub struct ServicosClient {
    http_client: HttpClient,
    base_url: String,
    sessao: Sessao,
}

impl ServicosClient {
    /// Cria o cliente com timeouts padrão
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(base_url: impl Into<String>, sessao: Sessao) -> Result<Self> {
        Self::with_timeouts(base_url, sessao, 30, 5)
    }

    /// Cria o cliente com timeouts customizados
    pub fn with_timeouts(
        base_url: impl Into<String>,
        sessao: Sessao,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Falha ao criar cliente HTTP: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessao,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sessao(&self) -> &Sessao {
        &self.sessao
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn autenticar(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Content-Type", "application/json");
        match self.sessao.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Executa uma requisição GET
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.url(endpoint);

        tracing::debug!("GET {}", url);

        let request = self.autenticar(self.http_client.get(&url)).await;
        let response = request.send().await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição GET e parseia JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.get(endpoint).await?;
        Ok(response.json().await?)
    }

    /// Executa uma requisição POST
    pub(crate) async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Response> {
        let url = self.url(endpoint);

        tracing::debug!("POST {}", url);

        let request = self.autenticar(self.http_client.post(&url)).await;
        let response = request.json(body).send().await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição POST e parseia JSON
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.post(endpoint, body).await?;
        Ok(response.json().await?)
    }

    /// Executa uma requisição PUT e parseia JSON
    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(endpoint);

        tracing::debug!("PUT {}", url);

        let request = self.autenticar(self.http_client.put(&url)).await;
        let response = self.handle_response(request.json(body).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Executa uma requisição PATCH e parseia JSON
    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(endpoint);

        tracing::debug!("PATCH {}", url);

        let request = self.autenticar(self.http_client.patch(&url)).await;
        let response = self.handle_response(request.json(body).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Executa uma requisição DELETE
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<()> {
        let url = self.url(endpoint);

        tracing::debug!("DELETE {}", url);

        let request = self.autenticar(self.http_client.delete(&url)).await;
        self.handle_response(request.send().await?).await?;
        Ok(())
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.sessao.expirar().await;
            return Err(ApiError::NaoAutorizado);
        }

        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Erro desconhecido".to_string());

        tracing::error!("Erro da API ({}): {}", status_code, error_body);

        // Tentar extrair mensagem de erro do JSON
        let message = match serde_json::from_str::<Value>(&error_body) {
            Ok(json) => json
                .get("message")
                .or_else(|| json.get("error"))
                .or_else(|| json.get("erro"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(error_body),
            Err(_) => error_body,
        };

        Err(ApiError::Api {
            status: status_code,
            message,
        })
    }
}
