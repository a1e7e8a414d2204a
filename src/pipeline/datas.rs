//! Interpretação dos timestamps vindos do backend e dos campos de data

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const FORMATOS_SEM_FUSO: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const FORMATOS_DATA: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Converte um horário local em instante, tolerando lacunas de horário de verão
fn local_para_utc<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    tz.from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(naive))
}

/// Interpreta um timestamp ISO-8601
///
/// Aceita RFC 3339 com fuso, data-hora sem fuso (interpretada em `tz`) e
/// data pura (meia-noite em `tz`). Qualquer outra coisa é `None`, nunca erro.
pub fn interpretar_instante_em<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for formato in FORMATOS_SEM_FUSO {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, formato) {
            return Some(local_para_utc(&naive, tz));
        }
    }

    interpretar_dia(raw).map(|dia| local_para_utc(&dia.and_time(NaiveTime::MIN), tz))
}

/// Data digitada pelo usuário: `2024-05-12` ou `12/05/2024`
pub fn interpretar_dia(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    FORMATOS_DATA
        .iter()
        .find_map(|formato| NaiveDate::parse_from_str(raw, formato).ok())
}

/// Meia-noite local do dia
pub fn inicio_do_dia<Tz: TimeZone>(dia: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    local_para_utc(&dia.and_time(NaiveTime::MIN), tz)
}

/// Último nanossegundo local do dia, para que a data final seja inclusiva
pub fn fim_do_dia<Tz: TimeZone>(dia: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let fim = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    local_para_utc(&dia.and_time(fim), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_rfc3339_ignora_fuso_local() {
        let dt = interpretar_instante_em("2024-05-10T12:00:00Z", &brt()).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_sem_fuso_usa_fuso_informado() {
        let dt = interpretar_instante_em("2024-05-10T09:00:00.123", &brt()).unwrap();
        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(123)
        );

        let dt = interpretar_instante_em("2024-05-10 09:00", &brt()).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_data_pura() {
        let dt = interpretar_instante_em("2024-05-10", &brt()).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 10, 3, 0, 0).unwrap());
        assert_eq!(interpretar_dia("10/05/2024"), NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn test_datas_invalidas() {
        assert!(interpretar_instante_em("", &brt()).is_none());
        assert!(interpretar_instante_em("ontem", &brt()).is_none());
        assert!(interpretar_instante_em("2024-13-45T00:00:00", &brt()).is_none());
    }

    #[test]
    fn test_limites_do_dia() {
        let dia = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert_eq!(
            inicio_do_dia(dia, &brt()),
            Utc.with_ymd_and_hms(2024, 5, 10, 3, 0, 0).unwrap()
        );
        assert_eq!(
            fim_do_dia(dia, &brt()),
            Utc.with_ymd_and_hms(2024, 5, 11, 2, 59, 59).unwrap() + chrono::Duration::nanoseconds(999_999_999)
        );
    }

    #[test]
    fn test_fim_do_dia_inclui_fracoes_de_milissegundo() {
        let dia = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let fim = fim_do_dia(dia, &brt());

        let micro = interpretar_instante_em("2024-05-31T23:59:59.999500-03:00", &brt()).unwrap();
        assert!(micro <= fim);
        let naive = interpretar_instante_em("2024-05-31T23:59:59.999999", &brt()).unwrap();
        assert!(naive <= fim);

        let dia_seguinte = interpretar_instante_em("2024-06-01T00:00:00-03:00", &brt()).unwrap();
        assert!(dia_seguinte > fim);
    }
}
