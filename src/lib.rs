// Biblioteca do front-end de gestão de serviços
// Expõe módulos para uso em testes e no binário

pub mod carregamento;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod telas;
pub mod utils;
pub mod validacao;
