//! Relatórios de serviço (visão da empresa e do prestador)

use servicos_api::types::RelatorioServico;

use super::Tela;
use crate::pipeline::{CategoriaFiltro, RegistroFiltravel};

impl RegistroFiltravel for RelatorioServico {
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
        let ordem = self.ordem_servico.as_ref();
        vec![
            self.descricao.as_deref(),
            self.prestador.as_ref().and_then(|p| p.nome.as_deref()),
            ordem.and_then(|o| o.descricao.as_deref()),
            ordem.and_then(|o| o.status.as_deref()),
        ]
    }

    /// Status da ordem de serviço vinculada
    fn status(&self) -> Option<&str> {
        self.ordem_servico.as_ref().and_then(|o| o.status.as_deref())
    }

    fn valor(&self) -> Option<f64> {
        self.custo
    }

    fn nome_vinculado(&self) -> Option<&str> {
        self.prestador.as_ref().and_then(|p| p.nome.as_deref())
    }
}

pub fn tela_relatorios(itens_por_pagina: usize) -> Tela<RelatorioServico> {
    Tela::new(
        "Relatórios",
        itens_por_pagina,
        vec![
            CategoriaFiltro::Periodo,
            CategoriaFiltro::Status,
            CategoriaFiltro::Valor,
            CategoriaFiltro::NomeVinculado,
        ],
    )
}

/// Mesmo pipeline, sem o filtro por prestador (a lista já é do prestador logado)
pub fn tela_relatorio_prestador(itens_por_pagina: usize) -> Tela<RelatorioServico> {
    Tela::new(
        "Relatórios do prestador",
        itens_por_pagina,
        vec![CategoriaFiltro::Periodo, CategoriaFiltro::Status, CategoriaFiltro::Valor],
    )
}
