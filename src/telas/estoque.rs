//! Estoque da empresa

use servicos_api::types::ItemEstoque;

use super::Tela;
use crate::pipeline::{CategoriaFiltro, RegistroFiltravel};

impl RegistroFiltravel for ItemEstoque {
    fn id(&self) -> i64 {
        self.id
    }

    fn nome_ordenacao(&self) -> Option<&str> {
        self.nome.as_deref()
    }

    fn data_criacao(&self) -> Option<&str> {
        self.data_criacao.as_deref()
    }

    fn campos_busca(&self) -> Vec<Option<&str>> {
        vec![self.nome.as_deref(), self.descricao.as_deref()]
    }

    /// A faixa de valor do estoque filtra pela quantidade
    fn valor(&self) -> Option<f64> {
        self.quantidade
    }
}

pub fn tela_estoque(itens_por_pagina: usize) -> Tela<ItemEstoque> {
    Tela::new("Estoque", itens_por_pagina, vec![CategoriaFiltro::Periodo, CategoriaFiltro::Valor])
}

pub fn itens_com_estoque_baixo(itens: &[ItemEstoque]) -> Vec<&ItemEstoque> {
    itens.iter().filter(|item| item.estoque_baixo()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{filtrar, CriteriosFiltro};
    use serde_json::json;

    #[test]
    fn test_faixa_de_quantidade_e_estoque_baixo() {
        let fonte: Vec<ItemEstoque> = serde_json::from_value(json!([
            {"id": 1, "nome": "Cabo 2,5mm", "quantidade": 0, "quantidadeMinima": 10},
            {"id": 2, "nome": "Disjuntor", "quantidade": 40, "quantidadeMinima": 5},
            {"id": 3, "nome": "Fita isolante", "descricao": "Rolo 20m"}
        ]))
        .unwrap();

        let zerados = filtrar(&fonte, &CriteriosFiltro::new().com_valores(Some(0.0), Some(0.0)));
        assert_eq!(zerados.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);

        assert_eq!(filtrar(&fonte, &CriteriosFiltro::new().com_busca("rolo")).len(), 1);

        let baixos = itens_com_estoque_baixo(&fonte);
        assert_eq!(baixos.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
    }
}
