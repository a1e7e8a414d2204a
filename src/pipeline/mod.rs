//! Pipeline filtrar → ordenar → paginar aplicado às coleções das telas
//!
//! Cada tela fornece apenas os extratores de campo ([`RegistroFiltravel`]);
//! todo o resto é compartilhado. Nada aqui faz IO nem falha.

pub mod atalhos;
pub mod criterios;
pub mod datas;
pub mod filtro;
pub mod ordenacao;
pub mod paginacao;
pub mod painel_filtros;
pub mod registro;
pub mod visao;

pub use atalhos::{AtalhoData, PoliticaAtalho};
pub use criterios::{valor_de_texto, CriteriosFiltro, FiltroStatus};
pub use filtro::{corresponde, filtrar};
pub use ordenacao::{CampoOrdenacao, Direcao, EspecOrdenacao};
pub use paginacao::{Paginacao, TAMANHOS_PAGINA};
pub use painel_filtros::{CategoriaFiltro, EstadoPainel, PainelFiltros};
pub use registro::RegistroFiltravel;
pub use visao::VisaoRegistros;
