//! Validação dos formulários de login e cadastro
//!
//! Todos os campos são verificados e os erros acumulados por campo; nada
//! é enviado ao backend se houver algum erro.

use once_cell::sync::Lazy;
use regex::Regex;
use servicos_api::types::{
    CadastroCliente, CadastroEmpresa, CadastroPrestador, NovaOrdemServico, NovoItemEstoque, NovoRelatorio,
    NovoServico,
};
use std::fmt;

use crate::utils::logging::log_validation_error;

pub const SENHA_MIN_CARACTERES: usize = 6;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("regex de e-mail é constante")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErroCampo {
    pub campo: &'static str,
    pub mensagem: String,
}

/// Erros de um formulário, na ordem dos campos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrosValidacao {
    erros: Vec<ErroCampo>,
}

impl ErrosValidacao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adicionar(&mut self, campo: &'static str, mensagem: impl Into<String>) {
        let mensagem = mensagem.into();
        log_validation_error(campo, &mensagem);
        self.erros.push(ErroCampo { campo, mensagem });
    }

    pub fn is_empty(&self) -> bool {
        self.erros.is_empty()
    }

    pub fn len(&self) -> usize {
        self.erros.len()
    }

    pub fn erros(&self) -> &[ErroCampo] {
        &self.erros
    }

    /// Mensagens de um campo específico
    pub fn do_campo(&self, campo: &str) -> Vec<&str> {
        self.erros
            .iter()
            .filter(|e| e.campo == campo)
            .map(|e| e.mensagem.as_str())
            .collect()
    }

    pub fn into_result(self) -> Result<(), ErrosValidacao> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ErrosValidacao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let partes: Vec<String> = self
            .erros
            .iter()
            .map(|e| format!("{}: {}", e.campo, e.mensagem))
            .collect();
        write!(f, "{}", partes.join("; "))
    }
}

impl std::error::Error for ErrosValidacao {}

fn somente_digitos(texto: &str) -> Vec<u32> {
    texto.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn digito_verificador(digitos: &[u32], pesos: impl Iterator<Item = u32>) -> u32 {
    let soma: u32 = digitos.iter().zip(pesos).map(|(d, p)| d * p).sum();
    match soma % 11 {
        0 | 1 => 0,
        resto => 11 - resto,
    }
}

pub fn email_valido(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// CPF com 11 dígitos e dígitos verificadores corretos; pontuação é ignorada
pub fn cpf_valido(cpf: &str) -> bool {
    let d = somente_digitos(cpf);
    if d.len() != 11 || d.iter().all(|&x| x == d[0]) {
        return false;
    }
    let primeiro = digito_verificador(&d[..9], (2..=10).rev());
    let segundo = digito_verificador(&d[..10], (2..=11).rev());
    d[9] == primeiro && d[10] == segundo
}

/// CNPJ com 14 dígitos e dígitos verificadores corretos
pub fn cnpj_valido(cnpj: &str) -> bool {
    const PESOS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const PESOS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let d = somente_digitos(cnpj);
    if d.len() != 14 || d.iter().all(|&x| x == d[0]) {
        return false;
    }
    let primeiro = digito_verificador(&d[..12], PESOS_1.into_iter());
    let segundo = digito_verificador(&d[..13], PESOS_2.into_iter());
    d[12] == primeiro && d[13] == segundo
}

/// Telefone com DDD: 10 (fixo) ou 11 (celular) dígitos
pub fn telefone_valido(telefone: &str) -> bool {
    matches!(somente_digitos(telefone).len(), 10 | 11)
}

fn obrigatorio(erros: &mut ErrosValidacao, campo: &'static str, valor: &str) -> bool {
    if valor.trim().is_empty() {
        erros.adicionar(campo, "Campo obrigatório");
        return false;
    }
    true
}

fn validar_email(erros: &mut ErrosValidacao, email: &str) {
    if obrigatorio(erros, "email", email) && !email_valido(email) {
        erros.adicionar("email", "E-mail inválido");
    }
}

fn validar_senha(erros: &mut ErrosValidacao, senha: &str) {
    if obrigatorio(erros, "senha", senha) && senha.chars().count() < SENHA_MIN_CARACTERES {
        erros.adicionar(
            "senha",
            format!("A senha deve ter pelo menos {} caracteres", SENHA_MIN_CARACTERES),
        );
    }
}

fn validar_telefone(erros: &mut ErrosValidacao, telefone: &str) {
    if obrigatorio(erros, "telefone", telefone) && !telefone_valido(telefone) {
        erros.adicionar("telefone", "Telefone deve ter 10 ou 11 dígitos com DDD");
    }
}

fn validar_cpf(erros: &mut ErrosValidacao, cpf: &str) {
    if obrigatorio(erros, "cpf", cpf) && !cpf_valido(cpf) {
        erros.adicionar("cpf", "CPF inválido");
    }
}

pub fn validar_login(email: &str, senha: &str) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    validar_email(&mut erros, email);
    obrigatorio(&mut erros, "senha", senha);
    erros.into_result()
}

pub fn validar_cadastro_empresa(cadastro: &CadastroEmpresa) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "nome", &cadastro.nome);
    if obrigatorio(&mut erros, "cnpj", &cadastro.cnpj) && !cnpj_valido(&cadastro.cnpj) {
        erros.adicionar("cnpj", "CNPJ inválido");
    }
    validar_email(&mut erros, &cadastro.email);
    validar_senha(&mut erros, &cadastro.senha);
    validar_telefone(&mut erros, &cadastro.telefone);
    erros.into_result()
}

pub fn validar_cadastro_prestador(cadastro: &CadastroPrestador) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "nome", &cadastro.nome);
    validar_cpf(&mut erros, &cadastro.cpf);
    validar_email(&mut erros, &cadastro.email);
    validar_senha(&mut erros, &cadastro.senha);
    validar_telefone(&mut erros, &cadastro.telefone);
    obrigatorio(&mut erros, "especialidade", &cadastro.especialidade);
    if cadastro.empresa_id <= 0 {
        erros.adicionar("empresaId", "Empresa não informada");
    }
    erros.into_result()
}

pub fn validar_cadastro_cliente(cadastro: &CadastroCliente) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "nome", &cadastro.nome);
    validar_cpf(&mut erros, &cadastro.cpf);
    validar_email(&mut erros, &cadastro.email);
    validar_senha(&mut erros, &cadastro.senha);
    validar_telefone(&mut erros, &cadastro.telefone);
    erros.into_result()
}

fn nao_negativo(erros: &mut ErrosValidacao, campo: &'static str, valor: f64) {
    if !valor.is_finite() || valor < 0.0 {
        erros.adicionar(campo, "Informe um valor maior ou igual a zero");
    }
}

fn referencia(erros: &mut ErrosValidacao, campo: &'static str, id: i64, mensagem: &str) {
    if id <= 0 {
        erros.adicionar(campo, mensagem);
    }
}

pub fn validar_nova_ordem(ordem: &NovaOrdemServico) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "descricao", &ordem.descricao);
    if let Some(custo) = ordem.custo_estimado {
        nao_negativo(&mut erros, "custoEstimado", custo);
    }
    referencia(&mut erros, "clienteId", ordem.cliente_id, "Cliente não informado");
    referencia(&mut erros, "empresaId", ordem.empresa_id, "Empresa não informada");
    if let Some(prestador_id) = ordem.prestador_id {
        referencia(&mut erros, "prestadorId", prestador_id, "Prestador inválido");
    }
    erros.into_result()
}

pub fn validar_novo_relatorio(relatorio: &NovoRelatorio) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "descricao", &relatorio.descricao);
    nao_negativo(&mut erros, "custo", relatorio.custo);
    referencia(&mut erros, "ordemServicoId", relatorio.ordem_servico_id, "Ordem de serviço não informada");
    referencia(&mut erros, "prestadorId", relatorio.prestador_id, "Prestador não informado");
    referencia(&mut erros, "empresaId", relatorio.empresa_id, "Empresa não informada");
    erros.into_result()
}

/// Vale para inclusão e para atualização de item
pub fn validar_item_estoque(item: &NovoItemEstoque) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "nome", &item.nome);
    nao_negativo(&mut erros, "quantidade", item.quantidade);
    if let Some(minima) = item.quantidade_minima {
        nao_negativo(&mut erros, "quantidadeMinima", minima);
    }
    if let Some(valor) = item.valor_unitario {
        nao_negativo(&mut erros, "valorUnitario", valor);
    }
    referencia(&mut erros, "empresaId", item.empresa_id, "Empresa não informada");
    erros.into_result()
}

pub fn validar_novo_servico(servico: &NovoServico) -> Result<(), ErrosValidacao> {
    let mut erros = ErrosValidacao::new();
    obrigatorio(&mut erros, "nome", &servico.nome);
    nao_negativo(&mut erros, "preco", servico.preco);
    referencia(&mut erros, "empresaId", servico.empresa_id, "Empresa não informada");
    erros.into_result()
}
