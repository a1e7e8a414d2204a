//! Resumo do painel inicial da empresa

use serde::Serialize;
use servicos_api::types::{ItemEstoque, OrdemServico, Prestador, RelatorioServico, StatusOrdem, StatusPrestador};

use crate::utils::formatting::INDEFINIDO;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContagemStatus {
    pub status: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumoPainel {
    /// Uma linha por status conhecido, na ordem do fluxo, mais os desconhecidos
    pub ordens_por_status: Vec<ContagemStatus>,
    pub total_ordens: usize,
    pub custo_total_relatorios: f64,
    pub prestadores_ativos: usize,
    pub itens_estoque_baixo: usize,
}

impl ResumoPainel {
    pub fn calcular(
        ordens: &[OrdemServico],
        relatorios: &[RelatorioServico],
        prestadores: &[Prestador],
        estoque: &[ItemEstoque],
    ) -> Self {
        let mut ordens_por_status: Vec<ContagemStatus> = StatusOrdem::TODOS
            .iter()
            .map(|status| ContagemStatus {
                status: status.as_str().to_string(),
                total: 0,
            })
            .collect();

        for ordem in ordens {
            let status = ordem.status.as_deref().unwrap_or(INDEFINIDO);
            match ordens_por_status.iter_mut().find(|c| c.status == status) {
                Some(contagem) => contagem.total += 1,
                None => ordens_por_status.push(ContagemStatus {
                    status: status.to_string(),
                    total: 1,
                }),
            }
        }

        Self {
            ordens_por_status,
            total_ordens: ordens.len(),
            custo_total_relatorios: relatorios.iter().filter_map(|r| r.custo).sum(),
            prestadores_ativos: prestadores
                .iter()
                .filter(|p| p.status.as_deref() == Some(StatusPrestador::Ativo.as_str()))
                .count(),
            itens_estoque_baixo: estoque.iter().filter(|i| i.estoque_baixo()).count(),
        }
    }

    pub fn total_do_status(&self, status: &str) -> usize {
        self.ordens_por_status
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_resumo() {
        let ordens: Vec<OrdemServico> = serde_json::from_value(json!([
            {"id": 1, "status": "PENDENTE"},
            {"id": 2, "status": "PENDENTE"},
            {"id": 3, "status": "CONCLUIDA"},
            {"id": 4, "status": "AGUARDANDO_PECA"},
            {"id": 5}
        ]))
        .unwrap();
        let relatorios: Vec<RelatorioServico> =
            serde_json::from_value(json!([{"id": 1, "custo": 100.5}, {"id": 2}, {"id": 3, "custo": 49.5}])).unwrap();
        let prestadores: Vec<Prestador> =
            serde_json::from_value(json!([{"id": 1, "status": "ATIVO"}, {"id": 2, "status": "INATIVO"}, {"id": 3}]))
                .unwrap();
        let estoque: Vec<ItemEstoque> =
            serde_json::from_value(json!([{"id": 1, "quantidade": 1, "quantidadeMinima": 2}])).unwrap();

        let resumo = ResumoPainel::calcular(&ordens, &relatorios, &prestadores, &estoque);

        assert_eq!(resumo.total_ordens, 5);
        assert_eq!(resumo.total_do_status("PENDENTE"), 2);
        assert_eq!(resumo.total_do_status("EM_ANDAMENTO"), 0);
        assert_eq!(resumo.total_do_status("AGUARDANDO_PECA"), 1);
        assert_eq!(resumo.total_do_status("Indefinido"), 1);
        assert_eq!(resumo.ordens_por_status.len(), 6);
        assert_eq!(resumo.custo_total_relatorios, 150.0);
        assert_eq!(resumo.prestadores_ativos, 1);
        assert_eq!(resumo.itens_estoque_baixo, 1);
    }
}
