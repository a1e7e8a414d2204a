//! Prestadores vinculados à empresa (tela de Gerenciamento) e clientes

use crate::client::ServicosClient;
use crate::error::Result;
use crate::jwt::Papel;
use crate::types::{AtualizacaoStatus, Cliente, Prestador, StatusPrestador};

#[derive(Clone)]
pub struct PrestadorManager {
    client: ServicosClient,
}

impl PrestadorManager {
    pub fn new(client: ServicosClient) -> Self {
        Self { client }
    }

    pub async fn listar_da_empresa(&self) -> Result<Vec<Prestador>> {
        let empresa_id = self.client.sessao().identificador(Papel::Empresa).await?;
        self.client
            .get_json(&format!("/prestadores/empresa/{}", empresa_id))
            .await
    }

    pub async fn atualizar_status(&self, id: i64, status: StatusPrestador) -> Result<Prestador> {
        let body = AtualizacaoStatus {
            status: status.as_str().to_string(),
        };
        self.client
            .patch_json(&format!("/prestadores/{}/status", id), &body)
            .await
    }

    pub async fn excluir(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/prestadores/{}", id)).await
    }

    pub async fn listar_clientes(&self) -> Result<Vec<Cliente>> {
        self.client.get_json("/clientes").await
    }
}
