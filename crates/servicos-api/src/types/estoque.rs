use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEstoque {
    pub id: i64,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub quantidade: Option<f64>,
    #[serde(default)]
    pub quantidade_minima: Option<f64>,
    #[serde(default)]
    pub valor_unitario: Option<f64>,
    #[serde(default, alias = "createdAt")]
    pub data_criacao: Option<String>,
}

impl ItemEstoque {
    /// Quantidade igual ou abaixo do mínimo cadastrado
    pub fn estoque_baixo(&self) -> bool {
        match (self.quantidade, self.quantidade_minima) {
            (Some(qtd), Some(minimo)) => qtd <= minimo,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoItemEstoque {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub quantidade: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_minima: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_unitario: Option<f64>,
    pub empresa_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_estoque_baixo() {
        let mut item: ItemEstoque =
            serde_json::from_value(json!({"id": 1, "quantidade": 2, "quantidadeMinima": 5})).unwrap();
        assert!(item.estoque_baixo());

        item.quantidade = Some(6.0);
        assert!(!item.estoque_baixo());

        item.quantidade_minima = None;
        assert!(!item.estoque_baixo());
    }
}
