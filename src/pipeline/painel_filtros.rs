//! Navegação do painel de filtros
//!
//! `Fechado → ListaCategorias → DetalheCategoria → (aplicar → Fechado | voltar → ListaCategorias)`.
//! Os critérios são aplicados ao vivo; "aplicar" apenas fecha o painel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoriaFiltro {
    Periodo,
    Status,
    Valor,
    NomeVinculado,
}

impl CategoriaFiltro {
    pub fn rotulo(&self) -> &'static str {
        match self {
            CategoriaFiltro::Periodo => "Período",
            CategoriaFiltro::Status => "Status",
            CategoriaFiltro::Valor => "Valor",
            CategoriaFiltro::NomeVinculado => "Prestador",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoPainel {
    #[default]
    Fechado,
    ListaCategorias,
    DetalheCategoria(CategoriaFiltro),
}

/// Painel com as categorias que a tela oferece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PainelFiltros {
    categorias: Vec<CategoriaFiltro>,
    estado: EstadoPainel,
}

impl PainelFiltros {
    pub fn new(categorias: Vec<CategoriaFiltro>) -> Self {
        Self {
            categorias,
            estado: EstadoPainel::Fechado,
        }
    }

    pub fn estado(&self) -> EstadoPainel {
        self.estado
    }

    pub fn categorias(&self) -> &[CategoriaFiltro] {
        &self.categorias
    }

    pub fn esta_aberto(&self) -> bool {
        self.estado != EstadoPainel::Fechado
    }

    pub fn abrir(&mut self) -> bool {
        self.transitar(EstadoPainel::Fechado, EstadoPainel::ListaCategorias)
    }

    /// Só categorias oferecidas pela tela podem ser abertas
    pub fn selecionar(&mut self, categoria: CategoriaFiltro) -> bool {
        if !self.categorias.contains(&categoria) {
            return false;
        }
        self.transitar(EstadoPainel::ListaCategorias, EstadoPainel::DetalheCategoria(categoria))
    }

    pub fn voltar(&mut self) -> bool {
        match self.estado {
            EstadoPainel::DetalheCategoria(_) => {
                self.estado = EstadoPainel::ListaCategorias;
                true
            }
            _ => false,
        }
    }

    pub fn aplicar(&mut self) -> bool {
        match self.estado {
            EstadoPainel::DetalheCategoria(_) => {
                self.estado = EstadoPainel::Fechado;
                true
            }
            _ => false,
        }
    }

    /// Fecha de qualquer estado aberto
    pub fn fechar(&mut self) -> bool {
        if self.estado == EstadoPainel::Fechado {
            return false;
        }
        self.estado = EstadoPainel::Fechado;
        true
    }

    fn transitar(&mut self, de: EstadoPainel, para: EstadoPainel) -> bool {
        if self.estado != de {
            return false;
        }
        self.estado = para;
        true
    }
}
