//! Relatórios de serviço (visão da empresa e do prestador)

use crate::client::ServicosClient;
use crate::error::Result;
use crate::jwt::Papel;
use crate::types::{NovoRelatorio, RelatorioServico};

#[derive(Clone)]
pub struct RelatorioManager {
    client: ServicosClient,
}

impl RelatorioManager {
    pub fn new(client: ServicosClient) -> Self {
        Self { client }
    }

    pub async fn listar_da_empresa(&self) -> Result<Vec<RelatorioServico>> {
        let empresa_id = self.client.sessao().identificador(Papel::Empresa).await?;
        self.client
            .get_json(&format!("/relatorios/empresa/{}", empresa_id))
            .await
    }

    /// Relatórios do prestador logado (tela RelatorioPrestador)
    pub async fn listar_do_prestador(&self) -> Result<Vec<RelatorioServico>> {
        let prestador_id = self.client.sessao().identificador(Papel::Prestador).await?;
        self.client
            .get_json(&format!("/relatorios/prestador/{}", prestador_id))
            .await
    }

    pub async fn criar(&self, relatorio: &NovoRelatorio) -> Result<RelatorioServico> {
        self.client.post_json("/relatorios", relatorio).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::token_de_teste;
    use crate::session::Sessao;
    use httpmock::prelude::*;
    use serde_json::json;

    async fn manager_com(server: &MockServer, claims: serde_json::Value) -> RelatorioManager {
        let sessao = Sessao::em_memoria();
        sessao.iniciar(token_de_teste(&claims)).await.unwrap();
        RelatorioManager::new(ServicosClient::new(server.base_url(), sessao).unwrap())
    }

    #[tokio::test]
    async fn test_listar_da_empresa() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/relatorios/empresa/4")
                    .header("Authorization", format!("Bearer {}", token_de_teste(&json!({"empresaId": 4}))));
                then.status(200).json_body(json!([
                    {"id": 1, "custoReal": 150.0, "prestador": {"id": 3, "nome": "José"}},
                    {"id": 2}
                ]));
            })
            .await;

        let relatorios = manager_com(&server, json!({"empresaId": 4}))
            .await
            .listar_da_empresa()
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(relatorios.len(), 2);
        assert_eq!(relatorios[0].custo, Some(150.0));
        assert!(relatorios[1].prestador.is_none());
    }

    #[tokio::test]
    async fn test_criar_relatorio() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/relatorios").json_body(json!({
                    "descricao": "Disjuntor trocado",
                    "custo": 120.5,
                    "ordemServicoId": 8,
                    "prestadorId": 12,
                    "empresaId": 4
                }));
                then.status(201)
                    .json_body(json!({"id": 40, "descricao": "Disjuntor trocado", "custo": 120.5}));
            })
            .await;

        let novo = NovoRelatorio {
            descricao: "Disjuntor trocado".to_string(),
            custo: 120.5,
            ordem_servico_id: 8,
            prestador_id: 12,
            empresa_id: 4,
        };
        let criado = manager_com(&server, json!({"prestadorId": 12}))
            .await
            .criar(&novo)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(criado.id, 40);
    }

    #[tokio::test]
    async fn test_listar_do_prestador() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/relatorios/prestador/12");
                then.status(200).json_body(json!([
                    {"id": 1, "descricao": "Reparo", "custo": 80.0, "dataCriacao": "2024-03-01T09:00:00Z"}
                ]));
            })
            .await;

        let sessao = Sessao::em_memoria();
        sessao
            .iniciar(token_de_teste(&json!({"role": "PRESTADOR", "prestadorId": 12})))
            .await
            .unwrap();
        let manager = RelatorioManager::new(ServicosClient::new(server.base_url(), sessao).unwrap());

        let relatorios = manager.listar_do_prestador().await.unwrap();
        mock.assert_async().await;
        assert_eq!(relatorios.len(), 1);
        assert_eq!(relatorios[0].custo, Some(80.0));
    }
}
