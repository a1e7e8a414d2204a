//! Painel de ordens de serviço

use servicos_api::types::OrdemServico;

use super::Tela;
use crate::pipeline::{CategoriaFiltro, RegistroFiltravel};

/// O painel de OS mostra cartões, quatro por página
pub const ITENS_POR_PAGINA_OS: usize = 4;

impl RegistroFiltravel for OrdemServico {
    fn id(&self) -> i64 {
        self.id
    }

    fn nome_ordenacao(&self) -> Option<&str> {
        self.descricao.as_deref()
    }

    fn data_criacao(&self) -> Option<&str> {
        self.data_criacao.as_deref()
    }

    fn campos_busca(&self) -> Vec<Option<&str>> {
        vec![
            self.descricao.as_deref(),
            self.cliente.as_ref().and_then(|c| c.nome.as_deref()),
            self.status.as_deref(),
        ]
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn valor(&self) -> Option<f64> {
        self.custo_estimado
    }

    fn nome_vinculado(&self) -> Option<&str> {
        self.prestador.as_ref().and_then(|p| p.nome.as_deref())
    }
}

pub fn tela_painel_os() -> Tela<OrdemServico> {
    Tela::new(
        "Painel de OS",
        ITENS_POR_PAGINA_OS,
        vec![CategoriaFiltro::Periodo, CategoriaFiltro::Status, CategoriaFiltro::Valor],
    )
}
