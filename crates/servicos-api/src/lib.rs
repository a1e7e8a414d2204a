//! Cliente da API REST da plataforma de gestão de serviços
//!
//! Este crate concentra tudo que fala com o backend:
//!
//! - `session`: sessão do usuário (token persistido + estado observável)
//! - `jwt`: leitura dos claims do token (sem verificação de assinatura)
//! - `client`: cliente HTTP único (base URL, JSON, bearer, tratamento de 401)
//! - Gerenciadores por recurso: auth, ordens, relatórios, prestadores,
//!   estoque/serviços e agenda
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use servicos_api::{Papel, ServicosClient, Sessao};
//! use servicos_api::auth::AuthManager;
//! use servicos_api::relatorios::RelatorioManager;
//!
//! #[tokio::main]
//! async fn main() -> servicos_api::Result<()> {
//!     let sessao = Sessao::em_memoria();
//!     let client = ServicosClient::new("http://localhost:8080/api", sessao)?;
//!
//!     AuthManager::new(client.clone())
//!         .login(Papel::Empresa, "contato@empresa.com", "senha")
//!         .await?;
//!
//!     let relatorios = RelatorioManager::new(client).listar_da_empresa().await?;
//!     println!("{} relatórios", relatorios.len());
//!     Ok(())
//! }
//! ```

pub mod agenda;
pub mod auth;
pub mod client;
pub mod error;
pub mod estoque;
pub mod jwt;
pub mod ordens;
pub mod prestadores;
pub mod relatorios;
pub mod session;
pub mod types;

pub use client::{ServicosClient, BASE_URL_PADRAO};
pub use error::{ApiError, Result};
pub use jwt::{decodificar_claims, Claims, Papel};
pub use session::{ArmazenamentoArquivo, ArmazenamentoMemoria, ArmazenamentoToken, EstadoSessao, Sessao};
