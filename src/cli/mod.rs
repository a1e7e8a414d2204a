//! Front-end de terminal: um subcomando por tela

pub mod filtros;
pub mod render;

use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use servicos_api::agenda::AgendaManager;
use servicos_api::auth::AuthManager;
use servicos_api::estoque::EstoqueManager;
use servicos_api::ordens::OrdemManager;
use servicos_api::prestadores::PrestadorManager;
use servicos_api::relatorios::RelatorioManager;
use servicos_api::types::{
    CadastroCliente, CadastroEmpresa, CadastroPrestador, NovaOrdemServico, NovoItemEstoque, NovoRelatorio,
    NovoServico, StatusOrdem, StatusPrestador,
};
use servicos_api::{EstadoSessao, Papel, ServicosClient};
use std::future::Future;
use tokio::sync::watch;

use crate::config::Settings;
use crate::pipeline::datas::interpretar_dia;
use crate::pipeline::RegistroFiltravel;
use crate::telas::agenda::{montar_semana, proxima_semana, semana_anterior};
use crate::telas::painel::ResumoPainel;
use crate::telas::{estoque, gerenciamento, painel_os, relatorios, servicos, Tela};
use crate::utils::formatting::formatar_instante;
use crate::utils::logging::{log_info, log_sessao_expirada};
use crate::utils::{AppError, AppResult};
use crate::validacao;

pub use filtros::FiltrosArgs;
pub use render::FormatoSaida;

/// Gestão de Serviços - front-end de terminal
#[derive(Parser, Debug)]
#[command(name = "gestao-servicos")]
#[command(version)]
#[command(about = "Empresas, prestadores e clientes: ordens de serviço, relatórios, estoque e agenda", long_about = None)]
pub struct Cli {
    /// URL base da API (sobrescreve a configuração)
    #[arg(long, env = "API_BASE_URL", global = true)]
    pub api_url: Option<String>,

    /// Formato de saída (tabela, json)
    #[arg(short = 'o', long, default_value = "tabela", global = true)]
    pub output: FormatoSaida,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub comando: Comando,
}

#[derive(Subcommand, Debug)]
pub enum Comando {
    /// Autentica com o perfil informado e salva o token
    Login {
        /// empresa, prestador ou cliente
        papel: Papel,

        #[arg(short = 'e', long)]
        email: String,

        #[arg(short = 's', long, env = "GESTAO_SERVICOS_SENHA", hide_env_values = true)]
        senha: String,
    },

    /// Encerra a sessão e apaga o token salvo
    Logout,

    /// Mostra a sessão atual
    Sessao,

    /// Cadastra uma empresa
    CadastrarEmpresa {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cnpj: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        senha: String,
        #[arg(long)]
        telefone: String,
    },

    /// Cadastra um prestador (empresa da sessão, se não informada)
    CadastrarPrestador {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        senha: String,
        #[arg(long)]
        telefone: String,
        #[arg(long)]
        especialidade: String,
        #[arg(long)]
        empresa_id: Option<i64>,
    },

    /// Cadastra um cliente
    CadastrarCliente {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        senha: String,
        #[arg(long)]
        telefone: String,
    },

    /// Relatórios de serviço da empresa
    Relatorios(FiltrosArgs),

    /// Relatórios do prestador logado
    RelatoriosPrestador(FiltrosArgs),

    /// Painel de ordens de serviço
    Ordens {
        #[command(flatten)]
        filtros: FiltrosArgs,

        /// Ordens do cliente logado em vez das da empresa
        #[arg(long)]
        do_cliente: bool,
    },

    /// Abre uma ordem de serviço para um cliente
    OrdemCriar {
        #[arg(long)]
        descricao: String,

        #[arg(long)]
        cliente_id: i64,

        /// Custo estimado em reais
        #[arg(long)]
        custo: Option<f64>,

        #[arg(long)]
        prestador_id: Option<i64>,

        /// Padrão: empresa da sessão
        #[arg(long)]
        empresa_id: Option<i64>,
    },

    /// Altera o status de uma ordem
    OrdemStatus {
        id: i64,
        /// PENDENTE, EM_ANDAMENTO, CONCLUIDA ou CANCELADA
        status: StatusOrdem,
    },

    /// Exclui uma ordem
    OrdemExcluir { id: i64 },

    /// Registra o relatório de uma ordem atendida
    RelatorioCriar {
        #[arg(long)]
        ordem_id: i64,

        #[arg(long)]
        descricao: String,

        /// Custo real em reais
        #[arg(long)]
        custo: f64,

        /// Padrão: prestador da sessão
        #[arg(long)]
        prestador_id: Option<i64>,

        /// Padrão: empresa da sessão
        #[arg(long)]
        empresa_id: Option<i64>,
    },

    /// Prestadores da empresa
    Prestadores(FiltrosArgs),

    /// Ativa ou inativa um prestador
    PrestadorStatus {
        id: i64,
        /// ATIVO ou INATIVO
        status: StatusPrestador,
    },

    /// Remove um prestador
    PrestadorExcluir { id: i64 },

    /// Clientes cadastrados
    Clientes(FiltrosArgs),

    /// Itens de estoque
    Estoque {
        #[command(flatten)]
        filtros: FiltrosArgs,

        /// Só itens no mínimo ou abaixo dele
        #[arg(long)]
        baixo: bool,
    },

    /// Inclui um item no estoque
    EstoqueCriar(ItemEstoqueArgs),

    /// Substitui os dados de um item
    EstoqueAtualizar {
        id: i64,

        #[command(flatten)]
        item: ItemEstoqueArgs,
    },

    /// Remove um item do estoque
    EstoqueExcluir { id: i64 },

    /// Catálogo de serviços
    Servicos(FiltrosArgs),

    /// Inclui um serviço no catálogo
    ServicoCriar {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        descricao: Option<String>,

        /// Preço em reais
        #[arg(long)]
        preco: f64,
    },

    /// Agenda semanal do prestador
    Agenda {
        /// Qualquer dia da semana desejada (padrão: hoje)
        #[arg(long)]
        semana: Option<String>,

        #[arg(long, conflicts_with = "proxima")]
        anterior: bool,

        #[arg(long)]
        proxima: bool,
    },

    /// Resumo da empresa
    Painel,
}

/// Campos de um item de estoque, na inclusão e na atualização
#[derive(Args, Debug, Clone)]
pub struct ItemEstoqueArgs {
    #[arg(long)]
    pub nome: String,

    #[arg(long)]
    pub descricao: Option<String>,

    #[arg(long)]
    pub quantidade: f64,

    /// Abaixo disso o item aparece como estoque baixo
    #[arg(long)]
    pub minimo: Option<f64>,

    #[arg(long)]
    pub valor_unitario: Option<f64>,
}

impl ItemEstoqueArgs {
    fn payload(&self, empresa_id: i64) -> NovoItemEstoque {
        NovoItemEstoque {
            nome: self.nome.clone(),
            descricao: self.descricao.clone(),
            quantidade: self.quantidade,
            quantidade_minima: self.minimo,
            valor_unitario: self.valor_unitario,
            empresa_id,
        }
    }
}

/// Executa o comando e devolve o texto a imprimir
pub async fn executar(cli: &Cli, client: ServicosClient, settings: &Settings) -> AppResult<String> {
    let formato = cli.output;
    let por_pagina = settings.paginacao.itens_por_pagina;

    match &cli.comando {
        Comando::Login { papel, email, senha } => {
            validacao::validar_login(email, senha)?;
            let claims = AuthManager::new(client).login(*papel, email, senha).await?;
            let quem = claims.nome.or(claims.sub).unwrap_or_else(|| email.clone());
            Ok(format!("✅ Login realizado como {} ({})", papel, quem))
        }

        Comando::Logout => {
            AuthManager::new(client).logout().await?;
            Ok("Sessão encerrada.".to_string())
        }

        Comando::Sessao => descrever_sessao(&client, formato).await,

        Comando::CadastrarEmpresa { nome, cnpj, email, senha, telefone } => {
            let cadastro = CadastroEmpresa {
                nome: nome.clone(),
                cnpj: cnpj.clone(),
                email: email.clone(),
                senha: senha.clone(),
                telefone: telefone.clone(),
            };
            validacao::validar_cadastro_empresa(&cadastro)?;
            let criado = AuthManager::new(client).cadastrar_empresa(&cadastro).await?;
            json_ou_mensagem(&criado, formato, "✅ Empresa cadastrada. Faça login para continuar.")
        }

        Comando::CadastrarPrestador { nome, cpf, email, senha, telefone, especialidade, empresa_id } => {
            let empresa_id = id_ou_da_sessao(&client, *empresa_id, Papel::Empresa).await?;
            let cadastro = CadastroPrestador {
                nome: nome.clone(),
                cpf: cpf.clone(),
                email: email.clone(),
                senha: senha.clone(),
                telefone: telefone.clone(),
                especialidade: especialidade.clone(),
                empresa_id,
            };
            validacao::validar_cadastro_prestador(&cadastro)?;
            let criado = AuthManager::new(client).cadastrar_prestador(&cadastro).await?;
            json_ou_mensagem(&criado, formato, "✅ Prestador cadastrado.")
        }

        Comando::CadastrarCliente { nome, cpf, email, senha, telefone } => {
            let cadastro = CadastroCliente {
                nome: nome.clone(),
                cpf: cpf.clone(),
                email: email.clone(),
                senha: senha.clone(),
                telefone: telefone.clone(),
            };
            validacao::validar_cadastro_cliente(&cadastro)?;
            let criado = AuthManager::new(client).cadastrar_cliente(&cadastro).await?;
            json_ou_mensagem(&criado, formato, "✅ Cliente cadastrado. Faça login para continuar.")
        }

        Comando::Relatorios(filtros) => {
            let manager = RelatorioManager::new(client);
            let tela = relatorios::tela_relatorios(por_pagina);
            listar(tela, filtros, manager.listar_da_empresa(), por_pagina, formato).await
        }

        Comando::RelatoriosPrestador(filtros) => {
            let manager = RelatorioManager::new(client);
            let tela = relatorios::tela_relatorio_prestador(por_pagina);
            listar(tela, filtros, manager.listar_do_prestador(), por_pagina, formato).await
        }

        Comando::Ordens { filtros, do_cliente } => {
            let manager = OrdemManager::new(client);
            let tela = painel_os::tela_painel_os();
            let por_pagina = painel_os::ITENS_POR_PAGINA_OS;
            if *do_cliente {
                listar(tela, filtros, manager.listar_do_cliente(), por_pagina, formato).await
            } else {
                listar(tela, filtros, manager.listar_da_empresa(), por_pagina, formato).await
            }
        }

        Comando::OrdemCriar { descricao, cliente_id, custo, prestador_id, empresa_id } => {
            let nova = NovaOrdemServico {
                descricao: descricao.clone(),
                custo_estimado: *custo,
                cliente_id: *cliente_id,
                empresa_id: id_ou_da_sessao(&client, *empresa_id, Papel::Empresa).await?,
                prestador_id: *prestador_id,
            };
            validacao::validar_nova_ordem(&nova)?;
            let ordem = OrdemManager::new(client).criar(&nova).await?;
            json_ou_mensagem(&ordem, formato, &format!("✅ Ordem #{} aberta.", ordem.id))
        }

        Comando::OrdemStatus { id, status } => {
            let ordem = OrdemManager::new(client).atualizar_status(*id, *status).await?;
            json_ou_mensagem(&ordem, formato, &format!("Ordem #{} agora está {}", id, status.rotulo()))
        }

        Comando::OrdemExcluir { id } => {
            OrdemManager::new(client).excluir(*id).await?;
            Ok(format!("Ordem #{} excluída.", id))
        }

        Comando::RelatorioCriar { ordem_id, descricao, custo, prestador_id, empresa_id } => {
            let novo = NovoRelatorio {
                descricao: descricao.clone(),
                custo: *custo,
                ordem_servico_id: *ordem_id,
                prestador_id: id_ou_da_sessao(&client, *prestador_id, Papel::Prestador).await?,
                empresa_id: id_ou_da_sessao(&client, *empresa_id, Papel::Empresa).await?,
            };
            validacao::validar_novo_relatorio(&novo)?;
            let relatorio = RelatorioManager::new(client).criar(&novo).await?;
            json_ou_mensagem(&relatorio, formato, &format!("✅ Relatório #{} registrado.", relatorio.id))
        }

        Comando::Prestadores(filtros) => {
            let manager = PrestadorManager::new(client);
            let tela = gerenciamento::tela_gerenciamento(por_pagina);
            listar(tela, filtros, manager.listar_da_empresa(), por_pagina, formato).await
        }

        Comando::PrestadorStatus { id, status } => {
            let prestador = PrestadorManager::new(client).atualizar_status(*id, *status).await?;
            json_ou_mensagem(&prestador, formato, &format!("Prestador #{} agora está {}", id, status.as_str()))
        }

        Comando::PrestadorExcluir { id } => {
            PrestadorManager::new(client).excluir(*id).await?;
            Ok(format!("Prestador #{} removido.", id))
        }

        Comando::Clientes(filtros) => {
            let manager = PrestadorManager::new(client);
            let tela = gerenciamento::tela_clientes(por_pagina);
            listar(tela, filtros, manager.listar_clientes(), por_pagina, formato).await
        }

        Comando::Estoque { filtros, baixo } => {
            let manager = EstoqueManager::new(client);
            let tela = estoque::tela_estoque(por_pagina);
            let fetch = async {
                let itens = manager.listar().await?;
                let itens = if *baixo {
                    estoque::itens_com_estoque_baixo(&itens).into_iter().cloned().collect()
                } else {
                    itens
                };
                Ok::<_, servicos_api::ApiError>(itens)
            };
            listar(tela, filtros, fetch, por_pagina, formato).await
        }

        Comando::EstoqueCriar(item) => {
            let novo = item.payload(id_ou_da_sessao(&client, None, Papel::Empresa).await?);
            validacao::validar_item_estoque(&novo)?;
            let criado = EstoqueManager::new(client).criar(&novo).await?;
            json_ou_mensagem(&criado, formato, &format!("✅ Item #{} incluído no estoque.", criado.id))
        }

        Comando::EstoqueAtualizar { id, item } => {
            let atualizado = item.payload(id_ou_da_sessao(&client, None, Papel::Empresa).await?);
            validacao::validar_item_estoque(&atualizado)?;
            let salvo = EstoqueManager::new(client).atualizar(*id, &atualizado).await?;
            json_ou_mensagem(&salvo, formato, &format!("Item #{} atualizado.", id))
        }

        Comando::EstoqueExcluir { id } => {
            EstoqueManager::new(client).excluir(*id).await?;
            Ok(format!("Item #{} removido do estoque.", id))
        }

        Comando::Servicos(filtros) => {
            let manager = EstoqueManager::new(client);
            let tela = servicos::tela_servicos(por_pagina);
            listar(tela, filtros, manager.listar_servicos(), por_pagina, formato).await
        }

        Comando::ServicoCriar { nome, descricao, preco } => {
            let novo = NovoServico {
                nome: nome.clone(),
                descricao: descricao.clone(),
                preco: *preco,
                empresa_id: id_ou_da_sessao(&client, None, Papel::Empresa).await?,
            };
            validacao::validar_novo_servico(&novo)?;
            let criado = EstoqueManager::new(client).criar_servico(&novo).await?;
            json_ou_mensagem(&criado, formato, &format!("✅ Serviço #{} incluído no catálogo.", criado.id))
        }

        Comando::Agenda { semana, anterior, proxima } => {
            let hoje = Local::now().date_naive();
            let referencia = match semana.as_deref() {
                Some(raw) => interpretar_dia(raw)
                    .ok_or_else(|| AppError::InternalError(format!("Data inválida para --semana: {}", raw)))?,
                None => hoje,
            };
            let referencia = if *anterior {
                semana_anterior(referencia)
            } else if *proxima {
                proxima_semana(referencia)
            } else {
                referencia
            };

            let agendamentos = AgendaManager::new(client).listar().await?;
            let semana = montar_semana(&agendamentos, referencia);
            Ok(render::semana(&semana, formato)?)
        }

        Comando::Painel => {
            let ordens = OrdemManager::new(client.clone());
            let relatorios = RelatorioManager::new(client.clone());
            let prestadores = PrestadorManager::new(client.clone());
            let estoque = EstoqueManager::new(client);

            let (ordens, relatorios, prestadores, estoque) = tokio::try_join!(
                ordens.listar_da_empresa(),
                relatorios.listar_da_empresa(),
                prestadores.listar_da_empresa(),
                estoque.listar(),
            )?;

            let resumo = ResumoPainel::calcular(&ordens, &relatorios, &prestadores, &estoque);
            Ok(render::resumo(&resumo, formato)?)
        }
    }
}

/// Registra a expiração se um 401 derrubou a sessão durante o comando
///
/// Lê o último estado publicado; funciona mesmo depois que o cliente (e a
/// sessão) já foram descartados.
pub fn registrar_expiracao(estados: &watch::Receiver<EstadoSessao>) -> bool {
    let expirou = *estados.borrow() == EstadoSessao::Expirada;
    if expirou {
        log_sessao_expirada();
    }
    expirou
}

/// Fetch → filtros das flags → página no formato pedido
async fn listar<T, F>(
    mut tela: Tela<T>,
    filtros: &FiltrosArgs,
    fetch: F,
    por_pagina: usize,
    formato: FormatoSaida,
) -> AppResult<String>
where
    T: RegistroFiltravel + render::LinhaTabela + Serialize,
    F: Future<Output = servicos_api::Result<Vec<T>>>,
{
    tela.carregar(fetch).await;
    if let Some(err) = tela.tomar_erro() {
        return Err(err.into());
    }

    filtros.aplicar_em(&mut tela, por_pagina);
    log_info(&format!(
        "[{}] {} de {} registros após filtros",
        tela.nome(),
        tela.visao().total_filtrado(),
        tela.visao().fonte().len()
    ));
    Ok(render::pagina(tela.visao(), formato)?)
}

/// Id informado na linha de comando ou, na falta dele, o da sessão
async fn id_ou_da_sessao(client: &ServicosClient, informado: Option<i64>, papel: Papel) -> AppResult<i64> {
    match informado {
        Some(id) => Ok(id),
        None => Ok(client.sessao().identificador(papel).await?),
    }
}

fn json_ou_mensagem<T: Serialize>(valor: &T, formato: FormatoSaida, mensagem: &str) -> AppResult<String> {
    match formato {
        FormatoSaida::Json => Ok(serde_json::to_string_pretty(valor)?),
        FormatoSaida::Tabela => Ok(mensagem.to_string()),
    }
}

async fn descrever_sessao(client: &ServicosClient, formato: FormatoSaida) -> AppResult<String> {
    let sessao = client.sessao();
    let claims = sessao.claims().await;

    if formato == FormatoSaida::Json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "autenticada": matches!(sessao.estado(), EstadoSessao::Autenticada { .. }),
            "claims": claims,
        }))?);
    }

    let Some(claims) = claims else {
        return Ok("Nenhuma sessão ativa. Use `gestao-servicos login`.".to_string());
    };

    let mut linhas = vec![format!(
        "Perfil: {}",
        claims.papel_declarado().map_or("desconhecido", |p| p.as_str())
    )];
    if let Some(nome) = claims.nome.as_deref().or(claims.sub.as_deref()) {
        linhas.push(format!("Usuário: {}", nome));
    }
    for papel in [Papel::Empresa, Papel::Prestador, Papel::Cliente] {
        if let Some(id) = claims.identificador(papel) {
            linhas.push(format!("Id de {}: {}", papel, id));
        }
    }
    if let Some(exp) = claims.expira_em() {
        let situacao = if claims.expirado_em(Utc::now()) { " (expirado)" } else { "" };
        linhas.push(format!(
            "Expira em: {}{}",
            formatar_instante(&exp.with_timezone(&Local)),
            situacao
        ));
    }
    Ok(linhas.join("\n"))
}
