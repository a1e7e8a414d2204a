//! Ordenação por nome, id ou data

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use super::datas::interpretar_instante_em;
use super::registro::RegistroFiltravel;
use crate::utils::normalization::comparar_pt_br;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampoOrdenacao {
    Nome,
    Id,
    Data,
}

impl FromStr for CampoOrdenacao {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nome" | "name" => Ok(CampoOrdenacao::Nome),
            "id" => Ok(CampoOrdenacao::Id),
            "data" | "date" => Ok(CampoOrdenacao::Data),
            outro => Err(format!("Campo de ordenação desconhecido: {}", outro)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direcao {
    #[default]
    Asc,
    Desc,
}

impl Direcao {
    pub fn aplicar(self, ordem: Ordering) -> Ordering {
        match self {
            Direcao::Asc => ordem,
            Direcao::Desc => ordem.reverse(),
        }
    }

    pub fn inverter(self) -> Self {
        match self {
            Direcao::Asc => Direcao::Desc,
            Direcao::Desc => Direcao::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EspecOrdenacao {
    pub campo: CampoOrdenacao,
    pub direcao: Direcao,
}

impl EspecOrdenacao {
    pub fn new(campo: CampoOrdenacao, direcao: Direcao) -> Self {
        Self { campo, direcao }
    }

    /// Clique num cabeçalho: mesmo campo alterna a direção, campo novo começa ascendente
    pub fn selecionar(atual: Option<EspecOrdenacao>, campo: CampoOrdenacao) -> EspecOrdenacao {
        match atual {
            Some(spec) if spec.campo == campo => EspecOrdenacao::new(campo, spec.direcao.inverter()),
            _ => EspecOrdenacao::new(campo, Direcao::Asc),
        }
    }
}

/// Datas ilegíveis vão para o fim nas duas direções
fn comparar_datas(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, direcao: Direcao) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direcao.aplicar(a.cmp(&b)),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

/// Comparador de dois registros pelo campo e direção escolhidos
pub fn comparar<T: RegistroFiltravel>(a: &T, b: &T, spec: EspecOrdenacao) -> Ordering {
    match spec.campo {
        CampoOrdenacao::Nome => spec.direcao.aplicar(comparar_pt_br(
            a.nome_ordenacao().unwrap_or(""),
            b.nome_ordenacao().unwrap_or(""),
        )),
        CampoOrdenacao::Id => spec.direcao.aplicar(a.id().cmp(&b.id())),
        CampoOrdenacao::Data => comparar_datas(
            a.data_criacao().and_then(|raw| interpretar_instante_em(raw, &Local)),
            b.data_criacao().and_then(|raw| interpretar_instante_em(raw, &Local)),
            spec.direcao,
        ),
    }
}

/// Ordena posições de `fonte`; datas são interpretadas uma vez por registro
pub fn ordenar_indices_em<T, Tz>(fonte: &[T], indices: &mut [usize], spec: EspecOrdenacao, fuso: &Tz)
where
    T: RegistroFiltravel,
    Tz: TimeZone,
{
    match spec.campo {
        CampoOrdenacao::Data => {
            let datas: Vec<Option<DateTime<Utc>>> = fonte
                .iter()
                .map(|r| r.data_criacao().and_then(|raw| interpretar_instante_em(raw, fuso)))
                .collect();
            indices.sort_by(|&a, &b| comparar_datas(datas[a], datas[b], spec.direcao));
        }
        _ => indices.sort_by(|&a, &b| comparar(&fonte[a], &fonte[b], spec)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::filtro::tests::Fake;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ordenar(itens: &mut [&Fake], spec: EspecOrdenacao) {
        itens.sort_by(|a, b| comparar(*a, *b, spec));
    }

    fn com_nome(id: i64, nome: &str) -> Fake {
        Fake {
            nome: Some(nome.to_string()),
            ..Fake::new(id)
        }
    }

    fn com_data(id: i64, data: &str) -> Fake {
        Fake {
            data: Some(data.to_string()),
            ..Fake::new(id)
        }
    }

    #[test]
    fn test_selecionar_alterna_direcao() {
        let spec = EspecOrdenacao::selecionar(None, CampoOrdenacao::Nome);
        assert_eq!(spec, EspecOrdenacao::new(CampoOrdenacao::Nome, Direcao::Asc));

        let spec = EspecOrdenacao::selecionar(Some(spec), CampoOrdenacao::Nome);
        assert_eq!(spec.direcao, Direcao::Desc);

        let spec = EspecOrdenacao::selecionar(Some(spec), CampoOrdenacao::Id);
        assert_eq!(spec, EspecOrdenacao::new(CampoOrdenacao::Id, Direcao::Asc));
    }

    #[test]
    fn test_nome_com_acentos() {
        let fonte = vec![com_nome(1, "Óscar"), com_nome(2, "otávio"), com_nome(3, "Ana"), com_nome(4, "Ônix")];
        let mut itens: Vec<&Fake> = fonte.iter().collect();
        ordenar(&mut itens, EspecOrdenacao::new(CampoOrdenacao::Nome, Direcao::Asc));

        let nomes: Vec<&str> = itens.iter().filter_map(|r| r.nome.as_deref()).collect();
        assert_eq!(nomes, vec!["Ana", "Ônix", "Óscar", "otávio"]);
    }

    #[test]
    fn test_id_numerico() {
        let fonte = vec![Fake::new(10), Fake::new(9), Fake::new(100)];
        let mut indices = vec![0, 1, 2];
        ordenar_indices_em(&fonte, &mut indices, EspecOrdenacao::new(CampoOrdenacao::Id, Direcao::Asc), &Utc);
        assert_eq!(indices, vec![1, 0, 2]);

        ordenar_indices_em(&fonte, &mut indices, EspecOrdenacao::new(CampoOrdenacao::Id, Direcao::Desc), &Utc);
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_data_por_instante_e_nao_por_texto() {
        // Em texto "2024-05-10T09:00:00-03:00" < "2024-05-10T10:00:00Z",
        // mas o primeiro é 12:00 UTC, depois do segundo
        let fonte = vec![
            com_data(1, "2024-05-10T09:00:00-03:00"),
            com_data(2, "2024-05-10T10:00:00Z"),
            com_data(3, "inválida"),
            com_data(4, "2024-01-01T00:00:00Z"),
        ];
        let mut indices = vec![0, 1, 2, 3];

        ordenar_indices_em(&fonte, &mut indices, EspecOrdenacao::new(CampoOrdenacao::Data, Direcao::Asc), &Utc);
        assert_eq!(indices, vec![3, 1, 0, 2]);

        ordenar_indices_em(&fonte, &mut indices, EspecOrdenacao::new(CampoOrdenacao::Data, Direcao::Desc), &Utc);
        assert_eq!(indices, vec![0, 1, 3, 2]);
    }

    proptest! {
        #[test]
        fn prop_nome_ascendente_e_inverso_exato(nomes in proptest::collection::hash_set("[a-zA-Záéíóúãõç]{1,8}", 0..30)) {
            let fonte: Vec<Fake> = nomes.iter().enumerate().map(|(i, n)| com_nome(i as i64, n)).collect();

            let mut asc: Vec<&Fake> = fonte.iter().collect();
            ordenar(&mut asc, EspecOrdenacao::new(CampoOrdenacao::Nome, Direcao::Asc));
            for par in asc.windows(2) {
                prop_assert_ne!(
                    comparar_pt_br(par[0].nome.as_deref().unwrap(), par[1].nome.as_deref().unwrap()),
                    Ordering::Greater
                );
            }

            let mut desc: Vec<&Fake> = fonte.iter().collect();
            ordenar(&mut desc, EspecOrdenacao::new(CampoOrdenacao::Nome, Direcao::Desc));
            let asc_ids: Vec<i64> = asc.iter().rev().map(|r| r.id).collect();
            let desc_ids: Vec<i64> = desc.iter().map(|r| r.id).collect();
            prop_assert_eq!(asc_ids, desc_ids);
        }
    }
}
