//! Estoque da empresa e catálogo de serviços

use crate::client::ServicosClient;
use crate::error::Result;
use crate::jwt::Papel;
use crate::types::{ItemEstoque, NovoItemEstoque, NovoServico, Servico};

#[derive(Clone)]
pub struct EstoqueManager {
    client: ServicosClient,
}

impl EstoqueManager {
    pub fn new(client: ServicosClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self) -> Result<Vec<ItemEstoque>> {
        let empresa_id = self.client.sessao().identificador(Papel::Empresa).await?;
        self.client
            .get_json(&format!("/estoque/empresa/{}", empresa_id))
            .await
    }

    pub async fn criar(&self, item: &NovoItemEstoque) -> Result<ItemEstoque> {
        self.client.post_json("/estoque", item).await
    }

    pub async fn atualizar(&self, id: i64, item: &NovoItemEstoque) -> Result<ItemEstoque> {
        self.client.put_json(&format!("/estoque/{}", id), item).await
    }

    pub async fn excluir(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/estoque/{}", id)).await
    }

    pub async fn listar_servicos(&self) -> Result<Vec<Servico>> {
        let empresa_id = self.client.sessao().identificador(Papel::Empresa).await?;
        self.client
            .get_json(&format!("/servicos/empresa/{}", empresa_id))
            .await
    }

    pub async fn criar_servico(&self, servico: &NovoServico) -> Result<Servico> {
        self.client.post_json("/servicos", servico).await
    }
}
