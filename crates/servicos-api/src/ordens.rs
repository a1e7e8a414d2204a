//! Ordens de serviço (painel da empresa e do cliente)

use crate::client::ServicosClient;
use crate::error::Result;
use crate::jwt::Papel;
use crate::types::{AtualizacaoStatus, NovaOrdemServico, OrdemServico, StatusOrdem};

#[derive(Clone)]
pub struct OrdemManager {
    client: ServicosClient,
}

impl OrdemManager {
    pub fn new(client: ServicosClient) -> Self {
        Self { client }
    }

    /// Ordens da empresa logada
    pub async fn listar_da_empresa(&self) -> Result<Vec<OrdemServico>> {
        let empresa_id = self.client.sessao().identificador(Papel::Empresa).await?;
        self.client
            .get_json(&format!("/ordens-servico/empresa/{}", empresa_id))
            .await
    }

    /// Ordens abertas pelo cliente logado
    pub async fn listar_do_cliente(&self) -> Result<Vec<OrdemServico>> {
        let cliente_id = self.client.sessao().identificador(Papel::Cliente).await?;
        self.client
            .get_json(&format!("/ordens-servico/cliente/{}", cliente_id))
            .await
    }

    pub async fn criar(&self, ordem: &NovaOrdemServico) -> Result<OrdemServico> {
        tracing::info!("Criando ordem de serviço: {}", ordem.descricao);
        self.client.post_json("/ordens-servico", ordem).await
    }

    pub async fn atualizar_status(&self, id: i64, status: StatusOrdem) -> Result<OrdemServico> {
        let body = AtualizacaoStatus {
            status: status.as_str().to_string(),
        };
        self.client
            .patch_json(&format!("/ordens-servico/{}/status", id), &body)
            .await
    }

    pub async fn excluir(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/ordens-servico/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::jwt::token_de_teste;
    use crate::session::Sessao;
    use httpmock::prelude::*;
    use serde_json::json;

    async fn manager_empresa(server: &MockServer) -> OrdemManager {
        let sessao = Sessao::em_memoria();
        sessao
            .iniciar(token_de_teste(&json!({"role": "EMPRESA", "empresaId": 4})))
            .await
            .unwrap();
        OrdemManager::new(ServicosClient::new(server.base_url(), sessao).unwrap())
    }

    #[tokio::test]
    async fn test_listar_da_empresa_usa_id_do_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/ordens-servico/empresa/4");
                then.status(200).json_body(json!([
                    {"id": 1, "descricao": "Pintura", "status": "PENDENTE", "custoEstimado": 300.0},
                    {"id": 2, "descricao": "Hidráulica"}
                ]));
            })
            .await;

        let ordens = manager_empresa(&server).await.listar_da_empresa().await.unwrap();
        mock.assert_async().await;
        assert_eq!(ordens.len(), 2);
        assert_eq!(ordens[0].custo_estimado, Some(300.0));
        assert!(ordens[1].status.is_none());
    }

    #[tokio::test]
    async fn test_listar_do_cliente_sem_id_de_cliente() {
        let server = MockServer::start_async().await;
        let result = manager_empresa(&server).await.listar_do_cliente().await;
        assert!(matches!(result, Err(ApiError::IdentificadorAusente("cliente"))));
    }

    #[tokio::test]
    async fn test_atualizar_status_e_excluir() {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/ordens-servico/9/status")
                    .json_body(json!({"status": "CONCLUIDA"}));
                then.status(200).json_body(json!({"id": 9, "status": "CONCLUIDA"}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/ordens-servico/9");
                then.status(204);
            })
            .await;

        let manager = manager_empresa(&server).await;
        let ordem = manager.atualizar_status(9, StatusOrdem::Concluida).await.unwrap();
        assert_eq!(ordem.status.as_deref(), Some("CONCLUIDA"));
        manager.excluir(9).await.unwrap();

        patch.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_criar_envia_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/ordens-servico").json_body(json!({
                    "descricao": "Troca de fiação",
                    "custoEstimado": 450.0,
                    "clienteId": 21,
                    "empresaId": 4
                }));
                then.status(201).json_body(json!({
                    "id": 30,
                    "descricao": "Troca de fiação",
                    "status": "PENDENTE",
                    "custoEstimado": 450.0
                }));
            })
            .await;

        let nova = NovaOrdemServico {
            descricao: "Troca de fiação".to_string(),
            custo_estimado: Some(450.0),
            cliente_id: 21,
            empresa_id: 4,
            prestador_id: None,
        };
        let ordem = manager_empresa(&server).await.criar(&nova).await.unwrap();
        mock.assert_async().await;
        assert_eq!(ordem.id, 30);
        assert_eq!(ordem.status.as_deref(), Some("PENDENTE"));
    }
}
