//! Catálogo de serviços

use servicos_api::types::Servico;

use super::Tela;
use crate::pipeline::{CategoriaFiltro, RegistroFiltravel};

impl RegistroFiltravel for Servico {
    fn id(&self) -> i64 {
        self.id
    }

    fn nome_ordenacao(&self) -> Option<&str> {
        self.nome.as_deref()
    }

    fn data_criacao(&self) -> Option<&str> {
        self.data_criacao.as_deref()
    }

    fn campos_busca(&self) -> Vec<Option<&str>> {
        vec![self.nome.as_deref(), self.descricao.as_deref()]
    }

    fn valor(&self) -> Option<f64> {
        self.preco
    }
}

pub fn tela_servicos(itens_por_pagina: usize) -> Tela<Servico> {
    Tela::new("Serviços", itens_por_pagina, vec![CategoriaFiltro::Periodo, CategoriaFiltro::Valor])
}
