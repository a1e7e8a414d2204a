/// Utilitários de texto para as tabelas do terminal

/// Trunca por caracteres (não bytes) e adiciona "…" quando corta
///
/// # Exemplo
/// ```
/// use gestao_servicos::utils::string_utils::truncar;
///
/// assert_eq!(truncar("Manutenção preventiva", 10), "Manutençã…");
/// assert_eq!(truncar("Curto", 10), "Curto");
/// ```
pub fn truncar(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Completa com espaços à direita até `largura` caracteres
pub fn preencher(s: &str, largura: usize) -> String {
    let atual = s.chars().count();
    if atual >= largura {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(largura - atual))
    }
}
