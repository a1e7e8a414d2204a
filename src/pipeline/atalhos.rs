//! Filtros rápidos de período: hoje, esta semana, este mês

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::datas::inicio_do_dia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtalhoData {
    Hoje,
    Semana,
    Mes,
}

impl AtalhoData {
    pub fn rotulo(&self) -> &'static str {
        match self {
            AtalhoData::Hoje => "Hoje",
            AtalhoData::Semana => "Esta semana",
            AtalhoData::Mes => "Este mês",
        }
    }

    /// Limites `[início, agora]` no momento da seleção
    ///
    /// O início é a meia-noite local (fuso de `agora`) de hoje, do domingo
    /// mais recente (inclusive hoje) ou do dia 1 do mês.
    pub fn intervalo<Tz: TimeZone>(&self, agora: &DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
        let hoje = agora.date_naive();
        let primeiro_dia = match self {
            AtalhoData::Hoje => hoje,
            AtalhoData::Semana => hoje - Duration::days(hoje.weekday().num_days_from_sunday() as i64),
            AtalhoData::Mes => hoje.with_day(1).unwrap_or(hoje),
        };

        (
            inicio_do_dia(primeiro_dia, &agora.timezone()),
            agora.with_timezone(&Utc),
        )
    }
}

impl FromStr for AtalhoData {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hoje" | "today" => Ok(AtalhoData::Hoje),
            "semana" | "week" => Ok(AtalhoData::Semana),
            "mes" | "mês" | "month" => Ok(AtalhoData::Mes),
            outro => Err(format!("Atalho de período desconhecido: {}", outro)),
        }
    }
}

/// O que acontece com as datas digitadas quando um atalho entra e sai
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliticaAtalho {
    /// Atalho sobrescreve as datas manuais; limpar deixa as duas vazias
    Sobrescrever,
    /// Atalho guarda as datas manuais e limpar o atalho as devolve
    #[default]
    Preservar,
}
