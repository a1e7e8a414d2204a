//! Visão filtrada, ordenada e paginada de uma coleção vinda do backend

use chrono::Local;

use super::atalhos::{AtalhoData, PoliticaAtalho};
use super::criterios::CriteriosFiltro;
use super::filtro::filtrar_indices_em;
use super::ordenacao::{ordenar_indices_em, CampoOrdenacao, EspecOrdenacao};
use super::paginacao::Paginacao;
use super::registro::RegistroFiltravel;

/// Coleção de origem mais o estado de UI que deriva a página exibida
///
/// A fonte nunca é reordenada; a visão guarda só as posições dos registros
/// que passam no filtro, já na ordem escolhida. Qualquer mudança de fonte,
/// critérios ou ordenação recalcula essas posições.
#[derive(Debug, Clone)]
pub struct VisaoRegistros<T> {
    fonte: Vec<T>,
    criterios: CriteriosFiltro,
    ordenacao: Option<EspecOrdenacao>,
    paginacao: Paginacao,
    filtrados: Vec<usize>,
}

impl<T: RegistroFiltravel> VisaoRegistros<T> {
    pub fn new(itens_por_pagina: usize) -> Self {
        Self {
            fonte: Vec::new(),
            criterios: CriteriosFiltro::default(),
            ordenacao: None,
            paginacao: Paginacao::new(itens_por_pagina),
            filtrados: Vec::new(),
        }
    }

    pub fn com_fonte(mut self, fonte: Vec<T>) -> Self {
        self.substituir_fonte(fonte);
        self
    }

    /// Resultado de um novo fetch
    pub fn substituir_fonte(&mut self, fonte: Vec<T>) {
        self.fonte = fonte;
        self.recalcular();
    }

    pub fn fonte(&self) -> &[T] {
        &self.fonte
    }

    pub fn criterios(&self) -> &CriteriosFiltro {
        &self.criterios
    }

    pub fn aplicar_filtros(&mut self, criterios: CriteriosFiltro) {
        self.criterios = criterios;
        self.recalcular();
    }

    /// Edição ao vivo de um critério
    pub fn editar_filtros(&mut self, editar: impl FnOnce(&mut CriteriosFiltro)) {
        editar(&mut self.criterios);
        self.recalcular();
    }

    pub fn selecionar_atalho(&mut self, atalho: AtalhoData, politica: PoliticaAtalho) {
        let agora = Local::now();
        self.editar_filtros(|criterios| criterios.selecionar_atalho(atalho, &agora, politica));
    }

    pub fn limpar_atalho(&mut self, politica: PoliticaAtalho) {
        self.editar_filtros(|criterios| criterios.limpar_atalho(politica));
    }

    pub fn limpar_filtros(&mut self) {
        self.editar_filtros(CriteriosFiltro::limpar);
    }

    pub fn ordenacao(&self) -> Option<EspecOrdenacao> {
        self.ordenacao
    }

    /// Mesmo campo alterna a direção; campo novo começa ascendente
    pub fn definir_ordenacao(&mut self, campo: CampoOrdenacao) {
        self.ordenacao = Some(EspecOrdenacao::selecionar(self.ordenacao, campo));
        self.recalcular();
    }

    pub fn definir_ordenacao_exata(&mut self, spec: Option<EspecOrdenacao>) {
        self.ordenacao = spec;
        self.recalcular();
    }

    pub fn paginacao(&self) -> &Paginacao {
        &self.paginacao
    }

    pub fn ir_para_pagina(&mut self, n: usize) -> bool {
        self.paginacao.ir_para(n, self.filtrados.len())
    }

    pub fn primeira_pagina(&mut self) -> bool {
        self.paginacao.primeira(self.filtrados.len())
    }

    pub fn pagina_anterior(&mut self) -> bool {
        self.paginacao.anterior(self.filtrados.len())
    }

    pub fn proxima_pagina(&mut self) -> bool {
        self.paginacao.proxima(self.filtrados.len())
    }

    pub fn ultima_pagina(&mut self) -> bool {
        self.paginacao.ultima(self.filtrados.len())
    }

    pub fn definir_itens_por_pagina(&mut self, itens_por_pagina: usize) {
        self.paginacao.definir_itens_por_pagina(itens_por_pagina);
    }

    pub fn pagina_atual(&self) -> usize {
        self.paginacao.pagina()
    }

    pub fn total_paginas(&self) -> usize {
        self.paginacao.total_paginas(self.filtrados.len())
    }

    pub fn total_filtrado(&self) -> usize {
        self.filtrados.len()
    }

    /// Registros da página atual, já filtrados e ordenados
    pub fn itens_pagina_atual(&self) -> Vec<&T> {
        self.paginacao
            .fatia(&self.filtrados)
            .iter()
            .map(|&i| &self.fonte[i])
            .collect()
    }

    /// Todos os registros que passam no filtro, na ordem de exibição
    pub fn itens_filtrados(&self) -> Vec<&T> {
        self.filtrados.iter().map(|&i| &self.fonte[i]).collect()
    }

    fn recalcular(&mut self) {
        let mut indices = filtrar_indices_em(&self.fonte, &self.criterios, Local);
        if let Some(spec) = self.ordenacao {
            ordenar_indices_em(&self.fonte, &mut indices, spec, &Local);
        }
        self.filtrados = indices;
        self.paginacao.reconciliar(self.filtrados.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::criterios::FiltroStatus;
    use crate::pipeline::filtro::tests::Fake;
    use crate::pipeline::ordenacao::Direcao;
    use pretty_assertions::assert_eq;

    fn ids(itens: Vec<&Fake>) -> Vec<i64> {
        itens.into_iter().map(|r| r.id).collect()
    }

    fn nove_registros() -> Vec<Fake> {
        (1..=9)
            .map(|i| Fake {
                nome: Some(format!("Registro {}", 10 - i)),
                status: Some(if i % 2 == 0 { "PAR" } else { "IMPAR" }.to_string()),
                valor: Some(i as f64 * 10.0),
                ..Fake::new(i)
            })
            .collect()
    }

    #[test]
    fn test_paginas_de_quatro() {
        let mut visao = VisaoRegistros::new(4).com_fonte(nove_registros());
        assert_eq!(visao.total_paginas(), 3);
        assert_eq!(ids(visao.itens_pagina_atual()), vec![1, 2, 3, 4]);

        assert!(visao.ultima_pagina());
        assert_eq!(ids(visao.itens_pagina_atual()), vec![9]);
        assert!(!visao.ir_para_pagina(5));
        assert_eq!(visao.pagina_atual(), 3);
    }

    #[test]
    fn test_filtro_que_encolhe_volta_para_pagina_um() {
        let mut visao = VisaoRegistros::new(4).com_fonte(nove_registros());
        visao.ir_para_pagina(3);

        visao.editar_filtros(|c| c.status = FiltroStatus::Exato("PAR".into()));
        assert_eq!(visao.total_filtrado(), 4);
        assert_eq!(visao.pagina_atual(), 1);
        assert_eq!(ids(visao.itens_pagina_atual()), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_ordenacao_sobre_o_filtrado() {
        let mut visao = VisaoRegistros::new(4).com_fonte(nove_registros());
        visao.aplicar_filtros(CriteriosFiltro::new().com_valores(Some(30.0), Some(70.0)));

        visao.definir_ordenacao(CampoOrdenacao::Nome);
        assert_eq!(ids(visao.itens_filtrados()), vec![7, 6, 5, 4, 3]);

        visao.definir_ordenacao(CampoOrdenacao::Nome);
        assert_eq!(visao.ordenacao().map(|s| s.direcao), Some(Direcao::Desc));
        assert_eq!(ids(visao.itens_filtrados()), vec![3, 4, 5, 6, 7]);

        // A fonte continua na ordem original
        assert_eq!(visao.fonte()[0].id, 1);
    }

    #[test]
    fn test_limpar_filtros_restaura_tudo() {
        let mut visao = VisaoRegistros::new(4).com_fonte(nove_registros());
        visao.editar_filtros(|c| c.busca = "nada casa com isto".into());
        assert_eq!(visao.total_filtrado(), 0);
        assert_eq!(visao.total_paginas(), 1);
        assert!(visao.itens_pagina_atual().is_empty());

        visao.limpar_filtros();
        assert_eq!(visao.total_filtrado(), 9);
        assert!(visao.criterios().esta_vazio());
    }

    #[test]
    fn test_nova_fonte_recalcula() {
        let mut visao = VisaoRegistros::new(4).com_fonte(nove_registros());
        visao.ultima_pagina();
        visao.substituir_fonte(vec![Fake::new(42)]);
        assert_eq!(visao.pagina_atual(), 1);
        assert_eq!(ids(visao.itens_pagina_atual()), vec![42]);
    }

    #[test]
    fn test_atalho_de_hoje_exclui_registros_antigos() {
        let fonte = vec![
            Fake { data: Some("2001-01-01T00:00:00Z".into()), ..Fake::new(1) },
            Fake { data: Some(Local::now().to_rfc3339()), ..Fake::new(2) },
        ];
        let mut visao = VisaoRegistros::new(10).com_fonte(fonte);
        visao.selecionar_atalho(AtalhoData::Hoje, PoliticaAtalho::Sobrescrever);
        assert_eq!(visao.criterios().atalho(), Some(AtalhoData::Hoje));
        assert_eq!(ids(visao.itens_filtrados()), vec![2]);
    }

    #[test]
    fn test_limpar_atalho_devolve_periodo_manual() {
        let fonte = vec![
            Fake { data: Some("2020-03-10T12:00:00Z".into()), ..Fake::new(1) },
            Fake { data: Some(Local::now().to_rfc3339()), ..Fake::new(2) },
        ];
        let mut visao = VisaoRegistros::new(10).com_fonte(fonte);
        let inicio: Option<chrono::DateTime<chrono::Utc>> = "2020-03-01T00:00:00Z".parse().ok();
        let fim: Option<chrono::DateTime<chrono::Utc>> = "2020-03-31T00:00:00Z".parse().ok();
        visao.editar_filtros(|c| c.definir_periodo(inicio, fim));
        assert_eq!(ids(visao.itens_filtrados()), vec![1]);

        visao.selecionar_atalho(AtalhoData::Hoje, PoliticaAtalho::default());
        assert_eq!(ids(visao.itens_filtrados()), vec![2]);

        visao.limpar_atalho(PoliticaAtalho::default());
        assert_eq!(visao.criterios().atalho(), None);
        assert_eq!(ids(visao.itens_filtrados()), vec![1]);
    }
}
