//! Gerenciamento dos prestadores da empresa e lista de clientes

use servicos_api::types::{Cliente, Prestador};

use super::Tela;
use crate::pipeline::{CategoriaFiltro, RegistroFiltravel};

impl RegistroFiltravel for Prestador {
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
        vec![self.nome.as_deref(), self.email.as_deref(), self.especialidade.as_deref()]
    }

    /// ATIVO / INATIVO
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

pub fn tela_gerenciamento(itens_por_pagina: usize) -> Tela<Prestador> {
    Tela::new("Gerenciamento", itens_por_pagina, vec![CategoriaFiltro::Periodo, CategoriaFiltro::Status])
}

impl RegistroFiltravel for Cliente {
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
        vec![self.nome.as_deref(), self.email.as_deref(), self.cpf.as_deref()]
    }
}

pub fn tela_clientes(itens_por_pagina: usize) -> Tela<Cliente> {
    Tela::new("Clientes", itens_por_pagina, vec![CategoriaFiltro::Periodo])
}
