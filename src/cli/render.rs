//! Saída das listagens em tabela ou JSON

use serde::Serialize;
use servicos_api::types::{Agendamento, Cliente, ItemEstoque, OrdemServico, Prestador, RelatorioServico, Servico};
use std::str::FromStr;

use crate::pipeline::{RegistroFiltravel, VisaoRegistros};
use crate::telas::agenda::SemanaAgenda;
use crate::telas::painel::ResumoPainel;
use crate::utils::formatting::{formatar_data, formatar_decimal, formatar_moeda, ou_indefinido, ou_traco};
use crate::utils::{preencher, truncar};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatoSaida {
    #[default]
    Tabela,
    Json,
}

impl FromStr for FormatoSaida {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tabela" | "pretty" => Ok(FormatoSaida::Tabela),
            "json" => Ok(FormatoSaida::Json),
            _ => Err(format!("Formato desconhecido: {}", s)),
        }
    }
}

/// Colunas (título, largura) e células de um registro
pub trait LinhaTabela {
    fn colunas() -> &'static [(&'static str, usize)];
    fn celulas(&self) -> Vec<String>;
}

fn nome_de(pessoa: &Option<servicos_api::types::PessoaResumo>) -> Option<&str> {
    pessoa.as_ref().and_then(|p| p.nome.as_deref())
}

impl LinhaTabela for RelatorioServico {
    fn colunas() -> &'static [(&'static str, usize)] {
        &[("ID", 6), ("Descrição", 28), ("Prestador", 18), ("Status OS", 14), ("Custo", 14), ("Data", 16)]
    }

    fn celulas(&self) -> Vec<String> {
        let ordem = self.ordem_servico.as_ref();
        vec![
            self.id.to_string(),
            ou_traco(self.descricao.as_deref()).to_string(),
            ou_traco(nome_de(&self.prestador)).to_string(),
            ou_indefinido(ordem.and_then(|o| o.status.as_deref())).to_string(),
            formatar_moeda(self.custo),
            formatar_data(self.data_criacao.as_deref()),
        ]
    }
}

impl LinhaTabela for OrdemServico {
    fn colunas() -> &'static [(&'static str, usize)] {
        &[("ID", 6), ("Descrição", 28), ("Cliente", 18), ("Status", 14), ("Custo estimado", 14), ("Abertura", 16)]
    }

    fn celulas(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            ou_traco(self.descricao.as_deref()).to_string(),
            ou_traco(nome_de(&self.cliente)).to_string(),
            ou_indefinido(self.status.as_deref()).to_string(),
            formatar_moeda(self.custo_estimado),
            formatar_data(self.data_criacao.as_deref()),
        ]
    }
}

impl LinhaTabela for Prestador {
    fn colunas() -> &'static [(&'static str, usize)] {
        &[("ID", 6), ("Nome", 22), ("E-mail", 26), ("Especialidade", 16), ("Status", 9)]
    }

    fn celulas(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            ou_traco(self.nome.as_deref()).to_string(),
            ou_traco(self.email.as_deref()).to_string(),
            ou_traco(self.especialidade.as_deref()).to_string(),
            ou_indefinido(self.status.as_deref()).to_string(),
        ]
    }
}

impl LinhaTabela for Cliente {
    fn colunas() -> &'static [(&'static str, usize)] {
        &[("ID", 6), ("Nome", 22), ("E-mail", 26), ("Telefone", 16)]
    }

    fn celulas(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            ou_traco(self.nome.as_deref()).to_string(),
            ou_traco(self.email.as_deref()).to_string(),
            ou_traco(self.telefone.as_deref()).to_string(),
        ]
    }
}

impl LinhaTabela for ItemEstoque {
    fn colunas() -> &'static [(&'static str, usize)] {
        &[("ID", 6), ("Nome", 24), ("Qtd", 8), ("Mínimo", 8), ("Valor unit.", 14), ("", 6)]
    }

    fn celulas(&self) -> Vec<String> {
        let quantidade = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |q| formatar_decimal(q, 0));
        vec![
            self.id.to_string(),
            ou_traco(self.nome.as_deref()).to_string(),
            quantidade(self.quantidade),
            quantidade(self.quantidade_minima),
            formatar_moeda(self.valor_unitario),
            if self.estoque_baixo() { "BAIXO".to_string() } else { String::new() },
        ]
    }
}

impl LinhaTabela for Servico {
    fn colunas() -> &'static [(&'static str, usize)] {
        &[("ID", 6), ("Nome", 24), ("Descrição", 30), ("Preço", 14)]
    }

    fn celulas(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            ou_traco(self.nome.as_deref()).to_string(),
            ou_traco(self.descricao.as_deref()).to_string(),
            formatar_moeda(self.preco),
        ]
    }
}

fn linha(colunas: &[(&str, usize)], celulas: &[String]) -> String {
    colunas
        .iter()
        .zip(celulas)
        .map(|((_, largura), celula)| preencher(&truncar(celula, *largura), *largura))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn tabela<T: LinhaTabela>(itens: &[&T]) -> String {
    let colunas = T::colunas();
    let titulos: Vec<String> = colunas.iter().map(|(t, _)| t.to_string()).collect();
    let largura_total: usize = colunas.iter().map(|(_, l)| l + 2).sum();

    let mut out = vec![linha(colunas, &titulos), "-".repeat(largura_total.saturating_sub(2))];
    out.extend(itens.iter().map(|item| linha(colunas, &item.celulas())));
    out.join("\n")
}

#[derive(Serialize)]
struct PaginaJson<'a, T> {
    pagina: usize,
    total_paginas: usize,
    total: usize,
    itens: Vec<&'a T>,
}

/// Página atual da visão no formato pedido, com rodapé de paginação na tabela
pub fn pagina<T>(visao: &VisaoRegistros<T>, formato: FormatoSaida) -> serde_json::Result<String>
where
    T: RegistroFiltravel + LinhaTabela + Serialize,
{
    let itens = visao.itens_pagina_atual();
    match formato {
        FormatoSaida::Json => serde_json::to_string_pretty(&PaginaJson {
            pagina: visao.pagina_atual(),
            total_paginas: visao.total_paginas(),
            total: visao.total_filtrado(),
            itens,
        }),
        FormatoSaida::Tabela => {
            let rodape = format!(
                "{} ({} de {} registros)",
                visao.paginacao().rotulo(visao.total_filtrado()),
                visao.total_filtrado(),
                visao.fonte().len()
            );
            if itens.is_empty() {
                return Ok(format!("Nenhum registro encontrado.\n{}", rodape));
            }
            Ok(format!("{}\n\n{}", tabela(&itens), rodape))
        }
    }
}

fn linha_agendamento(agendamento: &Agendamento) -> String {
    let cliente = agendamento.cliente.as_ref().and_then(|c| c.nome.as_deref());
    format!(
        "  #{} {} {} ({})",
        agendamento.id,
        formatar_data(agendamento.data_hora.as_deref()),
        ou_traco(agendamento.descricao.as_deref()),
        ou_traco(cliente),
    )
}

pub fn semana(semana: &SemanaAgenda<'_>, formato: FormatoSaida) -> serde_json::Result<String> {
    if formato == FormatoSaida::Json {
        let dias: Vec<serde_json::Value> = semana
            .dias
            .iter()
            .map(|d| serde_json::json!({"data": d.data, "dia": d.nome(), "agendamentos": d.agendamentos}))
            .collect();
        return serde_json::to_string_pretty(&serde_json::json!({
            "inicio": semana.inicio,
            "fim": semana.fim(),
            "dias": dias,
            "semData": semana.sem_data,
        }));
    }

    let mut out = vec![format!(
        "Semana de {} a {}",
        semana.inicio.format("%d/%m/%Y"),
        semana.fim().format("%d/%m/%Y")
    )];
    for dia in &semana.dias {
        out.push(format!("{} {}", dia.nome(), dia.data.format("%d/%m")));
        if dia.agendamentos.is_empty() {
            out.push("  -".to_string());
        }
        out.extend(dia.agendamentos.iter().map(|a| linha_agendamento(a)));
    }
    if !semana.sem_data.is_empty() {
        out.push("Sem data válida".to_string());
        out.extend(semana.sem_data.iter().map(|a| linha_agendamento(a)));
    }
    Ok(out.join("\n"))
}

pub fn resumo(resumo: &ResumoPainel, formato: FormatoSaida) -> serde_json::Result<String> {
    if formato == FormatoSaida::Json {
        return serde_json::to_string_pretty(resumo);
    }

    let mut out = vec![format!("Ordens de serviço: {}", resumo.total_ordens)];
    out.extend(
        resumo
            .ordens_por_status
            .iter()
            .map(|c| format!("  {} {}", preencher(&c.status, 16), c.total)),
    );
    out.push(format!("Custo total dos relatórios: {}", formatar_moeda(Some(resumo.custo_total_relatorios))));
    out.push(format!("Prestadores ativos: {}", resumo.prestadores_ativos));
    out.push(format!("Itens com estoque baixo: {}", resumo.itens_estoque_baixo));
    Ok(out.join("\n"))
}
