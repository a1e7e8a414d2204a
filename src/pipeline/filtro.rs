//! Composição dos predicados de filtro

use chrono::{DateTime, Local, TimeZone, Utc};

use super::criterios::{CriteriosFiltro, FiltroStatus};
use super::datas::interpretar_instante_em;
use super::registro::RegistroFiltravel;
use crate::utils::normalization::{contem_normalizado, normalizar_busca};

/// Critérios com os termos de texto normalizados uma única vez
struct Predicado<'c, Tz: TimeZone> {
    termo: Option<String>,
    nome_vinculado: Option<String>,
    inicio: Option<DateTime<Utc>>,
    fim: Option<DateTime<Utc>>,
    status: &'c FiltroStatus,
    valor_min: Option<f64>,
    valor_max: Option<f64>,
    fuso: Tz,
}

fn termo_normalizado(texto: &str) -> Option<String> {
    let texto = texto.trim();
    (!texto.is_empty()).then(|| normalizar_busca(texto))
}

impl<'c, Tz: TimeZone> Predicado<'c, Tz> {
    fn new(criterios: &'c CriteriosFiltro, fuso: Tz) -> Self {
        Self {
            termo: termo_normalizado(&criterios.busca),
            nome_vinculado: termo_normalizado(&criterios.nome_vinculado),
            inicio: criterios.data_inicio,
            fim: criterios.data_fim,
            status: &criterios.status,
            valor_min: criterios.valor_min,
            valor_max: criterios.valor_max,
            fuso,
        }
    }

    fn aceita<T: RegistroFiltravel>(&self, registro: &T) -> bool {
        self.aceita_busca(registro)
            && self.aceita_periodo(registro)
            && self.status.aceita(registro.status())
            && self.aceita_valor(registro)
            && self.aceita_nome_vinculado(registro)
    }

    fn aceita_busca<T: RegistroFiltravel>(&self, registro: &T) -> bool {
        let Some(termo) = &self.termo else {
            return true;
        };
        registro
            .campos_busca()
            .into_iter()
            .flatten()
            .any(|campo| contem_normalizado(campo, termo))
    }

    fn aceita_periodo<T: RegistroFiltravel>(&self, registro: &T) -> bool {
        if self.inicio.is_none() && self.fim.is_none() {
            return true;
        }

        // Data ilegível nunca entra num período com limite
        let Some(data) = registro
            .data_criacao()
            .and_then(|raw| interpretar_instante_em(raw, &self.fuso))
        else {
            return false;
        };

        self.inicio.map_or(true, |inicio| data >= inicio) && self.fim.map_or(true, |fim| data <= fim)
    }

    fn aceita_valor<T: RegistroFiltravel>(&self, registro: &T) -> bool {
        if self.valor_min.is_none() && self.valor_max.is_none() {
            return true;
        }

        let Some(valor) = registro.valor() else {
            return false;
        };

        self.valor_min.map_or(true, |min| valor >= min) && self.valor_max.map_or(true, |max| valor <= max)
    }

    fn aceita_nome_vinculado<T: RegistroFiltravel>(&self, registro: &T) -> bool {
        match &self.nome_vinculado {
            None => true,
            Some(termo) => registro
                .nome_vinculado()
                .map_or(false, |nome| contem_normalizado(nome, termo)),
        }
    }
}

/// Um registro passa em todos os critérios ativos?
pub fn corresponde<T: RegistroFiltravel>(registro: &T, criterios: &CriteriosFiltro) -> bool {
    Predicado::new(criterios, Local).aceita(registro)
}

/// Posições (na ordem original) dos registros que passam nos critérios
///
/// Timestamps sem fuso são interpretados em `fuso`.
pub fn filtrar_indices_em<T, Tz>(fonte: &[T], criterios: &CriteriosFiltro, fuso: Tz) -> Vec<usize>
where
    T: RegistroFiltravel,
    Tz: TimeZone,
{
    let predicado = Predicado::new(criterios, fuso);
    fonte
        .iter()
        .enumerate()
        .filter(|(_, registro)| predicado.aceita(*registro))
        .map(|(i, _)| i)
        .collect()
}

/// Registros que passam nos critérios, preservando a ordem relativa
pub fn filtrar<'a, T: RegistroFiltravel>(fonte: &'a [T], criterios: &CriteriosFiltro) -> Vec<&'a T> {
    filtrar_indices_em(fonte, criterios, Local)
        .into_iter()
        .map(|i| &fonte[i])
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pipeline::criterios::valor_de_texto;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Registro mínimo para exercitar o pipeline sem depender da API
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Fake {
        pub id: i64,
        pub nome: Option<String>,
        pub descricao: Option<String>,
        pub data: Option<String>,
        pub status: Option<String>,
        pub valor: Option<f64>,
        pub prestador: Option<String>,
    }

    impl Fake {
        pub(crate) fn new(id: i64) -> Self {
            Self {
                id,
                nome: None,
                descricao: None,
                data: None,
                status: None,
                valor: None,
                prestador: None,
            }
        }
    }

    impl RegistroFiltravel for Fake {
        fn id(&self) -> i64 {
            self.id
        }
        fn nome_ordenacao(&self) -> Option<&str> {
            self.nome.as_deref()
        }
        fn data_criacao(&self) -> Option<&str> {
            self.data.as_deref()
        }
        fn campos_busca(&self) -> Vec<Option<&str>> {
            vec![self.descricao.as_deref(), self.prestador.as_deref(), self.status.as_deref()]
        }
        fn status(&self) -> Option<&str> {
            self.status.as_deref()
        }
        fn valor(&self) -> Option<f64> {
            self.valor
        }
        fn nome_vinculado(&self) -> Option<&str> {
            self.prestador.as_deref()
        }
    }

    fn ids(itens: &[&Fake]) -> Vec<i64> {
        itens.iter().map(|r| r.id).collect()
    }

    fn custos_de_0_a_450() -> Vec<Fake> {
        (0..10)
            .map(|i| Fake {
                valor: Some(i as f64 * 50.0),
                ..Fake::new(i)
            })
            .collect()
    }

    #[test]
    fn test_faixa_100_a_300_retorna_cinco() {
        let fonte = custos_de_0_a_450();
        let criterios = CriteriosFiltro::new().com_valores(valor_de_texto("100"), valor_de_texto("300"));

        let resultado = filtrar(&fonte, &criterios);
        let custos: Vec<f64> = resultado.iter().filter_map(|r| r.valor).collect();
        assert_eq!(custos, vec![100.0, 150.0, 200.0, 250.0, 300.0]);
    }

    #[test]
    fn test_zero_e_limite_inclusivo() {
        let fonte = custos_de_0_a_450();
        let criterios = CriteriosFiltro::new().com_valores(Some(0.0), Some(0.0));
        assert_eq!(ids(&filtrar(&fonte, &criterios)), vec![0]);
    }

    #[test]
    fn test_valor_ausente_sai_quando_ha_faixa() {
        let fonte = vec![Fake::new(1), Fake { valor: Some(10.0), ..Fake::new(2) }];
        assert_eq!(ids(&filtrar(&fonte, &CriteriosFiltro::new())), vec![1, 2]);

        let criterios = CriteriosFiltro::new().com_valores(None, Some(100.0));
        assert_eq!(ids(&filtrar(&fonte, &criterios)), vec![2]);
    }

    #[test]
    fn test_busca_sem_acento_e_sem_caixa() {
        let fonte = vec![
            Fake { descricao: Some("Instalação elétrica".into()), ..Fake::new(1) },
            Fake { prestador: Some("JOSÉ Souza".into()), ..Fake::new(2) },
            Fake { status: Some("EM_ANDAMENTO".into()), ..Fake::new(3) },
            Fake::new(4),
        ];

        assert_eq!(ids(&filtrar(&fonte, &CriteriosFiltro::new().com_busca("INSTALACAO"))), vec![1]);
        assert_eq!(ids(&filtrar(&fonte, &CriteriosFiltro::new().com_busca("josé"))), vec![2]);
        assert_eq!(ids(&filtrar(&fonte, &CriteriosFiltro::new().com_busca("andamento"))), vec![3]);
        // Termo só com espaços não restringe
        assert_eq!(ids(&filtrar(&fonte, &CriteriosFiltro::new().com_busca("   "))), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_periodo_inclusivo_e_datas_invalidas() {
        let fonte = vec![
            Fake { data: Some("2024-05-01T00:00:00Z".into()), ..Fake::new(1) },
            Fake { data: Some("2024-05-10T12:00:00Z".into()), ..Fake::new(2) },
            Fake { data: Some("2024-05-31T23:59:59Z".into()), ..Fake::new(3) },
            Fake { data: Some("data quebrada".into()), ..Fake::new(4) },
            Fake::new(5),
        ];
        let inicio = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let fim = Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap();

        let criterios = CriteriosFiltro::new().com_periodo(Some(inicio), Some(fim));
        assert_eq!(ids(&filtrar(&fonte, &criterios)), vec![1, 2, 3]);

        let so_fim = CriteriosFiltro::new().com_periodo(None, Some(Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap()));
        assert_eq!(ids(&filtrar(&fonte, &so_fim)), vec![1]);

        // Sem limites, datas inválidas continuam aparecendo
        assert_eq!(filtrar(&fonte, &CriteriosFiltro::new()).len(), 5);
    }

    #[test]
    fn test_status_e_nome_vinculado_combinados() {
        let fonte = vec![
            Fake { status: Some("CONCLUIDA".into()), prestador: Some("Ana Lúcia".into()), ..Fake::new(1) },
            Fake { status: Some("CONCLUIDA".into()), prestador: Some("Bruno".into()), ..Fake::new(2) },
            Fake { status: Some("PENDENTE".into()), prestador: Some("Ana".into()), ..Fake::new(3) },
            Fake { status: Some("CONCLUIDA".into()), ..Fake::new(4) },
        ];
        let criterios = CriteriosFiltro::new()
            .com_status(FiltroStatus::Exato("CONCLUIDA".into()))
            .com_nome_vinculado("ana");

        assert_eq!(ids(&filtrar(&fonte, &criterios)), vec![1]);
        assert!(corresponde(&fonte[0], &criterios));
        assert!(!corresponde(&fonte[3], &criterios));
    }

    fn fake_arbitrario() -> impl Strategy<Value = Fake> {
        (
            0i64..1000,
            proptest::option::of("[a-zA-Zéãçó ]{0,12}"),
            proptest::option::of("[a-zA-Zéãçó ]{0,12}"),
            proptest::option::of(0.0f64..1000.0),
        )
            .prop_map(|(id, descricao, prestador, valor)| Fake {
                descricao,
                prestador,
                valor,
                ..Fake::new(id)
            })
    }

    proptest! {
        #[test]
        fn prop_criterios_padrao_sao_identidade(fonte in proptest::collection::vec(fake_arbitrario(), 0..40)) {
            let resultado: Vec<Fake> = filtrar(&fonte, &CriteriosFiltro::default()).into_iter().cloned().collect();
            prop_assert_eq!(resultado, fonte);
        }

        #[test]
        fn prop_busca_correta_e_completa(
            fonte in proptest::collection::vec(fake_arbitrario(), 0..40),
            termo in "[a-zA-Zéã]{1,3}",
        ) {
            let criterios = CriteriosFiltro::new().com_busca(termo.clone());
            let normalizado = normalizar_busca(&termo);
            let aceitos = filtrar_indices_em(&fonte, &criterios, Utc);

            for (i, registro) in fonte.iter().enumerate() {
                let contem = registro.campos_busca().into_iter().flatten()
                    .any(|campo| normalizar_busca(campo).contains(&normalizado));
                prop_assert_eq!(aceitos.contains(&i), contem);
            }
        }

        #[test]
        fn prop_filtrar_e_idempotente(
            fonte in proptest::collection::vec(fake_arbitrario(), 0..40),
            min in proptest::option::of(0.0f64..500.0),
            termo in "[a-z]{0,2}",
        ) {
            let criterios = CriteriosFiltro::new().com_busca(termo).com_valores(min, None);
            let uma_vez: Vec<Fake> = filtrar(&fonte, &criterios).into_iter().cloned().collect();
            let duas_vezes: Vec<Fake> = filtrar(&uma_vez, &criterios).into_iter().cloned().collect();
            prop_assert_eq!(uma_vez, duas_vezes);
        }
    }
}
