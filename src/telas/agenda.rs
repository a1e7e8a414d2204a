//! Agenda semanal do prestador (domingo a sábado)

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Utc};
use servicos_api::types::Agendamento;

use crate::pipeline::datas::interpretar_instante_em;

pub const NOMES_DIAS: [&str; 7] = ["Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado"];

#[derive(Debug, Clone, PartialEq)]
pub struct DiaAgenda<'a> {
    pub data: NaiveDate,
    pub agendamentos: Vec<&'a Agendamento>,
}

impl DiaAgenda<'_> {
    pub fn nome(&self) -> &'static str {
        NOMES_DIAS[self.data.weekday().num_days_from_sunday() as usize]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemanaAgenda<'a> {
    pub inicio: NaiveDate,
    pub dias: Vec<DiaAgenda<'a>>,
    /// Agendamentos cuja data não pôde ser lida
    pub sem_data: Vec<&'a Agendamento>,
}

impl SemanaAgenda<'_> {
    pub fn fim(&self) -> NaiveDate {
        self.inicio + Duration::days(6)
    }

    pub fn total(&self) -> usize {
        self.dias.iter().map(|d| d.agendamentos.len()).sum()
    }
}

/// Domingo da semana que contém `dia`
pub fn inicio_da_semana(dia: NaiveDate) -> NaiveDate {
    dia - Duration::days(dia.weekday().num_days_from_sunday() as i64)
}

pub fn semana_anterior(referencia: NaiveDate) -> NaiveDate {
    inicio_da_semana(referencia) - Duration::days(7)
}

pub fn proxima_semana(referencia: NaiveDate) -> NaiveDate {
    inicio_da_semana(referencia) + Duration::days(7)
}

/// Distribui os agendamentos nos sete dias da semana de `referencia`
///
/// Agendamentos de outras semanas ficam de fora; os de data ilegível vão
/// para `sem_data` em qualquer semana. Dentro do dia, ordem por horário.
pub fn montar_semana_em<'a, Tz: TimeZone>(
    agendamentos: &'a [Agendamento],
    referencia: NaiveDate,
    tz: &Tz,
) -> SemanaAgenda<'a> {
    let inicio = inicio_da_semana(referencia);
    let mut dias: Vec<(NaiveDate, Vec<(DateTime<Utc>, &'a Agendamento)>)> =
        (0..7).map(|i| (inicio + Duration::days(i), Vec::new())).collect();
    let mut sem_data = Vec::new();

    for agendamento in agendamentos {
        let Some(instante) = agendamento
            .data_hora
            .as_deref()
            .and_then(|raw| interpretar_instante_em(raw, tz))
        else {
            sem_data.push(agendamento);
            continue;
        };

        let dia_local = instante.with_timezone(tz).date_naive();
        let deslocamento = (dia_local - inicio).num_days();
        if (0..7).contains(&deslocamento) {
            dias[deslocamento as usize].1.push((instante, agendamento));
        }
    }

    let dias = dias
        .into_iter()
        .map(|(data, mut itens)| {
            itens.sort_by_key(|(instante, _)| *instante);
            DiaAgenda {
                data,
                agendamentos: itens.into_iter().map(|(_, a)| a).collect(),
            }
        })
        .collect();

    SemanaAgenda { inicio, dias, sem_data }
}

pub fn montar_semana(agendamentos: &[Agendamento], referencia: NaiveDate) -> SemanaAgenda<'_> {
    montar_semana_em(agendamentos, referencia, &Local)
}
