//! Sessão do usuário
//!
//! Ciclo de vida do token: gravado no login, lido a cada requisição,
//! apagado no logout ou no primeiro 401. Cada transição é publicada num
//! canal `watch` para que as telas reajam (ex.: voltar ao login).

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::{watch, RwLock};

use crate::error::{ApiError, Result};
use crate::jwt::{decodificar_claims, Claims, Papel};

/// Onde o token sobrevive entre execuções
pub trait ArmazenamentoToken: Send + Sync {
    fn carregar(&self) -> Result<Option<String>>;
    fn salvar(&self, token: &str) -> Result<()>;
    fn remover(&self) -> Result<()>;
}

/// Armazenamento volátil, usado em testes e sessões efêmeras
#[derive(Debug, Default)]
pub struct ArmazenamentoMemoria {
    token: Mutex<Option<String>>,
}

impl ArmazenamentoMemoria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn com_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl ArmazenamentoMemoria {
    fn travar(&self) -> Result<MutexGuard<'_, Option<String>>> {
        self.token
            .lock()
            .map_err(|_| ApiError::Armazenamento(io::Error::new(io::ErrorKind::Other, "token em memória envenenado")))
    }
}

impl ArmazenamentoToken for ArmazenamentoMemoria {
    fn carregar(&self) -> Result<Option<String>> {
        Ok(self.travar()?.clone())
    }

    fn salvar(&self, token: &str) -> Result<()> {
        *self.travar()? = Some(token.to_string());
        Ok(())
    }

    fn remover(&self) -> Result<()> {
        *self.travar()? = None;
        Ok(())
    }
}

/// Token persistido em arquivo texto
#[derive(Debug, Clone)]
pub struct ArmazenamentoArquivo {
    caminho: PathBuf,
}

impl ArmazenamentoArquivo {
    pub fn new(caminho: impl Into<PathBuf>) -> Self {
        Self {
            caminho: caminho.into(),
        }
    }

    pub fn caminho(&self) -> &std::path::Path {
        &self.caminho
    }
}

impl ArmazenamentoToken for ArmazenamentoArquivo {
    fn carregar(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.caminho) {
            Ok(conteudo) => {
                let token = conteudo.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn salvar(&self, token: &str) -> Result<()> {
        if let Some(dir) = self.caminho.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        std::fs::write(&self.caminho, token)?;
        Ok(())
    }

    fn remover(&self) -> Result<()> {
        match std::fs::remove_file(&self.caminho) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Estado observável da sessão
#[derive(Debug, Clone, PartialEq)]
pub enum EstadoSessao {
    Anonima,
    Autenticada {
        papel: Option<Papel>,
        sub: Option<String>,
    },
    /// Backend recusou o token; a tela deve levar ao login
    Expirada,
}

struct SessaoInner {
    token: RwLock<Option<String>>,
    armazenamento: Box<dyn ArmazenamentoToken>,
    estado: watch::Sender<EstadoSessao>,
}

/// Sessão compartilhada entre o cliente HTTP e as telas
#[derive(Clone)]
pub struct Sessao {
    inner: Arc<SessaoInner>,
}

impl Sessao {
    /// Sessão vazia sobre o armazenamento dado (não lê o token salvo)
    pub fn new(armazenamento: impl ArmazenamentoToken + 'static) -> Self {
        let (estado, _) = watch::channel(EstadoSessao::Anonima);
        Self {
            inner: Arc::new(SessaoInner {
                token: RwLock::new(None),
                armazenamento: Box::new(armazenamento),
                estado,
            }),
        }
    }

    pub fn em_memoria() -> Self {
        Self::new(ArmazenamentoMemoria::new())
    }

    /// Recupera a sessão persistida
    ///
    /// Tokens ilegíveis ou já expirados são descartados do armazenamento.
    pub fn restaurar(armazenamento: impl ArmazenamentoToken + 'static) -> Result<Self> {
        let salvo = armazenamento.carregar()?;
        let sessao = Self::new(armazenamento);

        let Some(token) = salvo else {
            return Ok(sessao);
        };

        match decodificar_claims(&token) {
            Ok(claims) if !claims.expirado_em(Utc::now()) => {
                sessao.publicar(EstadoSessao::Autenticada {
                    papel: claims.papel_declarado(),
                    sub: claims.sub.clone(),
                });
                // Ainda não há leitores concorrentes
                if let Ok(mut guard) = sessao.inner.token.try_write() {
                    *guard = Some(token);
                }
            }
            Ok(_) => {
                tracing::info!("Token salvo expirado, descartando");
                sessao.inner.armazenamento.remover()?;
            }
            Err(e) => {
                tracing::warn!("Token salvo ilegível, descartando: {}", e);
                sessao.inner.armazenamento.remover()?;
            }
        }

        Ok(sessao)
    }

    /// Login: valida o formato, persiste e publica `Autenticada`
    pub async fn iniciar(&self, token: impl Into<String>) -> Result<Claims> {
        let token = token.into();
        let claims = decodificar_claims(&token)?;

        self.inner.armazenamento.salvar(&token)?;
        *self.inner.token.write().await = Some(token);

        self.publicar(EstadoSessao::Autenticada {
            papel: claims.papel_declarado(),
            sub: claims.sub.clone(),
        });
        tracing::info!("Sessão iniciada para {:?}", claims.sub);

        Ok(claims)
    }

    /// Logout explícito
    pub async fn encerrar(&self) -> Result<()> {
        *self.inner.token.write().await = None;
        self.inner.armazenamento.remover()?;
        self.publicar(EstadoSessao::Anonima);
        tracing::info!("Sessão encerrada");
        Ok(())
    }

    /// Chamado pelo cliente HTTP ao receber 401
    pub async fn expirar(&self) {
        *self.inner.token.write().await = None;
        if let Err(e) = self.inner.armazenamento.remover() {
            tracing::error!("Falha ao remover token expirado: {}", e);
        }
        self.publicar(EstadoSessao::Expirada);
        tracing::warn!("Sessão expirada pelo backend (401)");
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.token.read().await.clone()
    }

    /// Claims do token atual; `None` sem sessão ou com token ilegível
    pub async fn claims(&self) -> Option<Claims> {
        let token = self.token().await?;
        decodificar_claims(&token).ok()
    }

    /// Id do tenant para montar rotas (`/relatorios/empresa/{id}`)
    pub async fn identificador(&self, papel: Papel) -> Result<i64> {
        let token = self.token().await.ok_or(ApiError::SemSessao)?;
        decodificar_claims(&token)?
            .identificador(papel)
            .ok_or(ApiError::IdentificadorAusente(papel.as_str()))
    }

    pub fn estado(&self) -> EstadoSessao {
        self.inner.estado.borrow().clone()
    }

    pub fn assinar(&self) -> watch::Receiver<EstadoSessao> {
        self.inner.estado.subscribe()
    }

    fn publicar(&self, estado: EstadoSessao) {
        self.inner.estado.send_replace(estado);
    }
}

impl std::fmt::Debug for Sessao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sessao")
            .field("estado", &self.estado())
            .finish_non_exhaustive()
    }
}
