// ============================================================================
// Auth Manager - Login, logout e cadastro por perfil
// ============================================================================
//
// Login grava o token na `Sessao` (e no armazenamento persistente). Cadastro
// não autentica: o usuário faz login em seguida, como nas telas de registro.

use crate::client::ServicosClient;
use crate::error::Result;
use crate::jwt::{Claims, Papel};
use crate::types::{CadastroCliente, CadastroEmpresa, CadastroPrestador, LoginRequest, LoginResponse};
use serde_json::Value;

#[derive(Clone)]
pub struct AuthManager {
    client: ServicosClient,
}

impl AuthManager {
    pub fn new(client: ServicosClient) -> Self {
        Self { client }
    }

    /// Autentica no endpoint do perfil e inicia a sessão
    ///
    /// Retorna os claims decodificados do token recebido.
    pub async fn login(&self, papel: Papel, email: &str, senha: &str) -> Result<Claims> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            senha: senha.to_string(),
        };

        let endpoint = format!("/auth/login/{}", papel.as_str());
        let response: LoginResponse = self.client.post_json(&endpoint, &body).await?;

        self.client.sessao().iniciar(response.token).await
    }

    pub async fn logout(&self) -> Result<()> {
        self.client.sessao().encerrar().await
    }

    pub async fn cadastrar_empresa(&self, cadastro: &CadastroEmpresa) -> Result<Value> {
        self.client.post_json("/empresas", cadastro).await
    }

    pub async fn cadastrar_prestador(&self, cadastro: &CadastroPrestador) -> Result<Value> {
        self.client.post_json("/prestadores", cadastro).await
    }

    pub async fn cadastrar_cliente(&self, cadastro: &CadastroCliente) -> Result<Value> {
        self.client.post_json("/clientes", cadastro).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::token_de_teste;
    use crate::session::{EstadoSessao, Sessao};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_prestador_inicia_sessao() {
        let server = MockServer::start_async().await;
        let token = token_de_teste(&json!({"sub": "ze@x.com", "role": "PRESTADOR", "prestadorId": 12}));

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/login/prestador")
                    .json_body(json!({"email": "ze@x.com", "senha": "segredo"}));
                then.status(200).json_body(json!({"token": token}));
            })
            .await;

        let sessao = Sessao::em_memoria();
        let auth = AuthManager::new(ServicosClient::new(server.base_url(), sessao.clone()).unwrap());

        let claims = auth.login(Papel::Prestador, " ze@x.com ", "segredo").await.unwrap();
        mock.assert_async().await;

        assert_eq!(claims.identificador(Papel::Prestador), Some(12));
        assert_eq!(sessao.identificador(Papel::Prestador).await.unwrap(), 12);
        assert!(matches!(sessao.estado(), EstadoSessao::Autenticada { .. }));

        auth.logout().await.unwrap();
        assert_eq!(sessao.estado(), EstadoSessao::Anonima);
    }

    #[tokio::test]
    async fn test_login_recusado_nao_inicia_sessao() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login/empresa");
                then.status(400).json_body(json!({"erro": "Credenciais inválidas"}));
            })
            .await;

        let sessao = Sessao::em_memoria();
        let auth = AuthManager::new(ServicosClient::new(server.base_url(), sessao.clone()).unwrap());

        let err = auth.login(Papel::Empresa, "a@b.com", "x").await.unwrap_err();
        assert!(err.to_string().contains("Credenciais inválidas"));
        assert_eq!(sessao.estado(), EstadoSessao::Anonima);
    }
}
