//! Formatação de valores para exibição

use chrono::{DateTime, Local, TimeZone};

use crate::pipeline::datas::interpretar_instante_em;

/// Relação aninhada ausente (prestador, cliente, ordem)
pub const SEM_VALOR: &str = "-";

/// Status ausente
pub const INDEFINIDO: &str = "Indefinido";

pub const DATA_INVALIDA: &str = "Data inválida";

pub fn ou_traco(valor: Option<&str>) -> &str {
    match valor {
        Some(v) if !v.trim().is_empty() => v,
        _ => SEM_VALOR,
    }
}

pub fn ou_indefinido(valor: Option<&str>) -> &str {
    match valor {
        Some(v) if !v.trim().is_empty() => v,
        _ => INDEFINIDO,
    }
}

/// `dd/mm/aaaa HH:MM` no fuso informado
pub fn formatar_data_em<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = raw else {
        return SEM_VALOR.to_string();
    };
    match interpretar_instante_em(raw, tz) {
        Some(instante) => instante.with_timezone(tz).format("%d/%m/%Y %H:%M").to_string(),
        None => DATA_INVALIDA.to_string(),
    }
}

pub fn formatar_data(raw: Option<&str>) -> String {
    formatar_data_em(raw, &Local)
}

pub fn formatar_instante(instante: &DateTime<Local>) -> String {
    instante.format("%d/%m/%Y %H:%M").to_string()
}

/// Valor monetário em reais: `R$ 1.234,56`
///
/// # Exemplo
/// ```
/// use gestao_servicos::utils::formatting::formatar_moeda;
///
/// assert_eq!(formatar_moeda(Some(1234.5)), "R$ 1.234,50");
/// assert_eq!(formatar_moeda(None), "-");
/// ```
pub fn formatar_moeda(valor: Option<f64>) -> String {
    match valor {
        Some(v) if v.is_finite() => format!("R$ {}", formatar_decimal(v, 2)),
        _ => SEM_VALOR.to_string(),
    }
}

/// Número com separador de milhar `.` e decimal `,`
pub fn formatar_decimal(valor: f64, casas: usize) -> String {
    let texto = format!("{:.*}", casas, valor.abs());
    let (inteiro, fracao) = match texto.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (texto.as_str(), None),
    };

    let digitos: Vec<char> = inteiro.chars().collect();
    let mut agrupado = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.iter().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(*c);
    }

    let sinal = if valor < 0.0 && texto.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match fracao {
        Some(f) => format!("{}{},{}", sinal, agrupado, f),
        None => format!("{}{}", sinal, agrupado),
    }
}
