//! Telas de listagem: cada uma liga um tipo da API ao pipeline genérico
//!
//! Uma [`Tela`] guarda a visão paginada, o painel de filtros e o controle de
//! tempo de vida do fetch. As implementações de [`RegistroFiltravel`] de cada
//! registro ficam nos submódulos.

pub mod agenda;
pub mod estoque;
pub mod gerenciamento;
pub mod painel;
pub mod painel_os;
pub mod relatorios;
pub mod servicos;

use servicos_api::ApiError;
use std::future::Future;

use crate::carregamento::{Carregamento, Ticket};
use crate::pipeline::{
    AtalhoData, CampoOrdenacao, CategoriaFiltro, CriteriosFiltro, PainelFiltros, PoliticaAtalho,
    RegistroFiltravel, VisaoRegistros,
};
use crate::utils::logging::{log_error, log_filtros_aplicados, log_resultado_descartado, log_tela_carregada};

pub struct Tela<T> {
    nome: &'static str,
    visao: VisaoRegistros<T>,
    painel: PainelFiltros,
    carregamento: Carregamento,
    carregando: bool,
    erro: Option<ApiError>,
}

impl<T: RegistroFiltravel> Tela<T> {
    pub fn new(nome: &'static str, itens_por_pagina: usize, categorias: Vec<CategoriaFiltro>) -> Self {
        Self {
            nome,
            visao: VisaoRegistros::new(itens_por_pagina),
            painel: PainelFiltros::new(categorias),
            carregamento: Carregamento::new(),
            carregando: false,
            erro: None,
        }
    }

    pub fn nome(&self) -> &'static str {
        self.nome
    }

    pub fn visao(&self) -> &VisaoRegistros<T> {
        &self.visao
    }

    pub fn visao_mut(&mut self) -> &mut VisaoRegistros<T> {
        &mut self.visao
    }

    pub fn painel(&self) -> &PainelFiltros {
        &self.painel
    }

    pub fn painel_mut(&mut self) -> &mut PainelFiltros {
        &mut self.painel
    }

    pub fn carregando(&self) -> bool {
        self.carregando
    }

    pub fn erro(&self) -> Option<&ApiError> {
        self.erro.as_ref()
    }

    /// Retira o erro do último fetch para propagá-lo
    pub fn tomar_erro(&mut self) -> Option<ApiError> {
        self.erro.take()
    }

    /// Marca a tela como carregando e emite o ticket do novo fetch
    pub fn iniciar_carregamento(&mut self) -> Ticket {
        self.carregando = true;
        self.erro = None;
        self.carregamento.iniciar()
    }

    /// Aplica a resposta se o ticket ainda for o atual; retorna se aplicou
    pub fn concluir_carregamento(&mut self, ticket: &Ticket, resultado: Result<Vec<T>, ApiError>) -> bool {
        if !ticket.e_atual() {
            log_resultado_descartado(self.nome);
            return false;
        }

        self.carregando = false;
        match resultado {
            Ok(registros) => {
                log_tela_carregada(self.nome, registros.len());
                self.visao.substituir_fonte(registros);
            }
            Err(err) => {
                log_error(&format!("[{}] Falha ao carregar: {}", self.nome, err));
                self.erro = Some(err);
            }
        }
        true
    }

    /// Busca e aplica numa só chamada
    pub async fn carregar<F>(&mut self, fetch: F) -> bool
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let ticket = self.iniciar_carregamento();
        let resultado = fetch.await;
        self.concluir_carregamento(&ticket, resultado)
    }

    /// Tela fechada: respostas pendentes serão descartadas
    pub fn desmontar(&mut self) {
        self.carregamento.desmontar();
        self.carregando = false;
    }

    pub fn aplicar_filtros(&mut self, criterios: CriteriosFiltro) {
        self.visao.aplicar_filtros(criterios);
        self.registrar_filtros();
    }

    pub fn editar_filtros(&mut self, editar: impl FnOnce(&mut CriteriosFiltro)) {
        self.visao.editar_filtros(editar);
        self.registrar_filtros();
    }

    pub fn selecionar_atalho(&mut self, atalho: AtalhoData, politica: PoliticaAtalho) {
        self.visao.selecionar_atalho(atalho, politica);
        self.registrar_filtros();
    }

    pub fn limpar_atalho(&mut self, politica: PoliticaAtalho) {
        self.visao.limpar_atalho(politica);
        self.registrar_filtros();
    }

    /// Reset de todos os critérios; fecha o painel se estiver aberto
    pub fn limpar_filtros(&mut self) {
        self.visao.limpar_filtros();
        self.painel.fechar();
        self.registrar_filtros();
    }

    pub fn definir_ordenacao(&mut self, campo: CampoOrdenacao) {
        self.visao.definir_ordenacao(campo);
    }

    pub fn ir_para_pagina(&mut self, n: usize) -> bool {
        self.visao.ir_para_pagina(n)
    }

    pub fn itens_pagina_atual(&self) -> Vec<&T> {
        self.visao.itens_pagina_atual()
    }

    pub fn total_paginas(&self) -> usize {
        self.visao.total_paginas()
    }

    fn registrar_filtros(&self) {
        log_filtros_aplicados(self.nome, self.visao.fonte().len(), self.visao.total_filtrado());
    }
}
