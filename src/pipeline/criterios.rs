//! Critérios de filtro ativos numa tela

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::atalhos::{AtalhoData, PoliticaAtalho};

/// Filtro de status: "todos" ou um valor exato (sensível a caixa)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiltroStatus {
    #[default]
    Todos,
    Exato(String),
}

impl FiltroStatus {
    /// Interpreta o valor de um select; "", "all", "todos" viram `Todos`
    pub fn de_texto(valor: &str) -> Self {
        match valor.trim() {
            "" | "all" | "todos" | "TODOS" => FiltroStatus::Todos,
            exato => FiltroStatus::Exato(exato.to_string()),
        }
    }

    pub fn aceita(&self, status: Option<&str>) -> bool {
        match self {
            FiltroStatus::Todos => true,
            FiltroStatus::Exato(esperado) => status == Some(esperado.as_str()),
        }
    }
}

/// Converte o texto de um campo numérico; falha de parsing vira "sem limite"
///
/// Aceita vírgula decimal ("150,50").
pub fn valor_de_texto(texto: &str) -> Option<f64> {
    let texto = texto.trim();
    if texto.is_empty() {
        return None;
    }
    texto
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Conjunto de critérios; o valor padrão não exclui nenhum registro
///
/// `valor_min`/`valor_max` usam `None` como "sem limite": zero é um limite
/// válido e inclusivo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriosFiltro {
    pub busca: String,
    pub data_inicio: Option<DateTime<Utc>>,
    pub data_fim: Option<DateTime<Utc>>,
    pub status: FiltroStatus,
    pub valor_min: Option<f64>,
    pub valor_max: Option<f64>,
    pub nome_vinculado: String,
    atalho: Option<AtalhoData>,
    #[serde(skip)]
    datas_manuais: Option<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)>,
}

impl CriteriosFiltro {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn com_busca(mut self, termo: impl Into<String>) -> Self {
        self.busca = termo.into();
        self
    }

    pub fn com_status(mut self, status: FiltroStatus) -> Self {
        self.status = status;
        self
    }

    pub fn com_valores(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.valor_min = min;
        self.valor_max = max;
        self
    }

    pub fn com_periodo(mut self, inicio: Option<DateTime<Utc>>, fim: Option<DateTime<Utc>>) -> Self {
        self.definir_periodo(inicio, fim);
        self
    }

    pub fn com_nome_vinculado(mut self, nome: impl Into<String>) -> Self {
        self.nome_vinculado = nome.into();
        self
    }

    pub fn atalho(&self) -> Option<AtalhoData> {
        self.atalho
    }

    /// Datas digitadas manualmente; desmarcam o atalho ativo
    pub fn definir_periodo(&mut self, inicio: Option<DateTime<Utc>>, fim: Option<DateTime<Utc>>) {
        self.data_inicio = inicio;
        self.data_fim = fim;
        self.atalho = None;
        self.datas_manuais = None;
    }

    /// Seleciona um atalho calculando os limites no instante `agora`
    pub fn selecionar_atalho<Tz: TimeZone>(
        &mut self,
        atalho: AtalhoData,
        agora: &DateTime<Tz>,
        politica: PoliticaAtalho,
    ) {
        if politica == PoliticaAtalho::Preservar && self.atalho.is_none() {
            self.datas_manuais = Some((self.data_inicio, self.data_fim));
        }

        let (inicio, fim) = atalho.intervalo(agora);
        self.data_inicio = Some(inicio);
        self.data_fim = Some(fim);
        self.atalho = Some(atalho);
    }

    /// Remove o atalho; com `Sobrescrever` as duas datas ficam vazias
    pub fn limpar_atalho(&mut self, politica: PoliticaAtalho) {
        if self.atalho.take().is_none() {
            return;
        }

        let (inicio, fim) = match (politica, self.datas_manuais.take()) {
            (PoliticaAtalho::Preservar, Some(salvas)) => salvas,
            _ => (None, None),
        };
        self.data_inicio = inicio;
        self.data_fim = fim;
    }

    /// Reset transacional de todos os critérios, inclusive o atalho
    pub fn limpar(&mut self) {
        *self = Self::default();
    }

    /// Nenhum critério restringe
    pub fn esta_vazio(&self) -> bool {
        self.busca.trim().is_empty()
            && self.data_inicio.is_none()
            && self.data_fim.is_none()
            && self.status == FiltroStatus::Todos
            && self.valor_min.is_none()
            && self.valor_max.is_none()
            && self.nome_vinculado.trim().is_empty()
    }

    pub fn tem_faixa_valor(&self) -> bool {
        self.valor_min.is_some() || self.valor_max.is_some()
    }
}
