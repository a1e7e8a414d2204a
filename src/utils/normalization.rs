//! Normalização de texto para busca e ordenação
//!
//! A busca das telas ignora caixa e acentos: "jose" encontra "José" e
//! "ACAO" encontra "Ação". A decomposição é NFKD seguida da remoção das
//! marcas combinantes.

use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Remove acentos preservando caixa e pontuação
///
/// # Exemplos
/// ```
/// use gestao_servicos::utils::normalization::remover_acentos;
///
/// assert_eq!(remover_acentos("Manutenção Elétrica"), "Manutencao Eletrica");
/// assert_eq!(remover_acentos("OS-12 / Açaí"), "OS-12 / Acai");
/// ```
pub fn remover_acentos(input: &str) -> String {
    input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Forma canônica usada nas comparações de busca: sem acentos e minúscula
///
/// # Exemplos
/// ```
/// use gestao_servicos::utils::normalization::normalizar_busca;
///
/// assert_eq!(normalizar_busca("João"), "joao");
/// assert_eq!(normalizar_busca("EM_ANDAMENTO"), "em_andamento");
/// ```
pub fn normalizar_busca(input: &str) -> String {
    remover_acentos(input).to_lowercase()
}

/// `haystack` contém o termo já normalizado?
///
/// O termo vem pré-normalizado para que a composição de filtros normalize
/// uma vez por execução e não uma vez por registro.
pub fn contem_normalizado(haystack: &str, termo_normalizado: &str) -> bool {
    normalizar_busca(haystack).contains(termo_normalizado)
}

/// Comparação de nomes no padrão pt-BR
///
/// Nível primário: letras base sem acento e sem caixa ("Érica" fica junto de
/// "Erica", antes de "Fábio"). Empates são resolvidos pelo acento (sem acento
/// primeiro) e depois pela caixa (minúscula primeiro).
pub fn comparar_pt_br(a: &str, b: &str) -> Ordering {
    normalizar_busca(a)
        .cmp(&normalizar_busca(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| inverter_caixa(a).cmp(&inverter_caixa(b)))
}

fn inverter_caixa(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                c.to_uppercase().next().unwrap_or(c)
            }
        })
        .collect()
}
