use crate::client::ServicosClient;
use crate::error::Result;
use crate::jwt::Papel;
use crate::types::Agendamento;

/// Agenda do prestador logado
#[derive(Clone)]
pub struct AgendaManager {
    client: ServicosClient,
}

impl AgendaManager {
    pub fn new(client: ServicosClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self) -> Result<Vec<Agendamento>> {
        let prestador_id = self.client.sessao().identificador(Papel::Prestador).await?;
        self.client
            .get_json(&format!("/agendamentos/prestador/{}", prestador_id))
            .await
    }
}
