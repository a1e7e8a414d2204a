/// Front-end de terminal da plataforma de gestão de serviços
///
/// - Sessão restaurada do arquivo de token a cada execução
/// - Cada subcomando corresponde a uma tela (relatórios, OS, estoque...)
/// - Filtros, ordenação e paginação rodam localmente sobre o que a API devolve

use anyhow::Context;
use clap::Parser;
use servicos_api::{ArmazenamentoArquivo, ServicosClient, Sessao};
use tracing_subscriber::EnvFilter;

use gestao_servicos::cli::{self, Cli};
use gestao_servicos::config::Settings;
use gestao_servicos::utils::logging::{log_config_loaded, log_error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Sem .env as variáveis vêm do ambiente
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let filtro_padrao = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtro_padrao)))
        .with_writer(std::io::stderr)
        .init();

    if dotenv.is_err() {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Carregar configurações
    let mut settings = Settings::new().context("Falha ao carregar configurações")?;
    if let Some(api_url) = &cli.api_url {
        settings.api.base_url = api_url.clone();
    }
    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    let sessao = Sessao::restaurar(ArmazenamentoArquivo::new(&settings.sessao.arquivo_token))
        .context("Falha ao ler o token salvo")?;

    // 401 em qualquer chamada derruba a sessão
    let estados = sessao.assinar();

    let client = ServicosClient::with_timeouts(
        settings.api.base_url.clone(),
        sessao,
        settings.api.timeout_seconds,
        settings.api.connect_timeout_seconds,
    )
    .context("Falha ao criar o cliente HTTP")?;

    let resultado = cli::executar(&cli, client, &settings).await;
    cli::registrar_expiracao(&estados);

    match resultado {
        Ok(saida) => {
            println!("{}", saida);
            Ok(())
        }
        Err(err) if err.exige_login() => {
            log_error(&err.to_string());
            anyhow::bail!("Sessão inválida ou expirada. Faça login com `gestao-servicos login <perfil>`.")
        }
        Err(err) => Err(err.into()),
    }
}
