//! Tempo de vida das requisições de cada tela
//!
//! Cada fetch recebe um [`Ticket`] com a geração corrente. Um novo fetch ou a
//! desmontagem da tela avança a geração, e respostas com ticket antigo são
//! descartadas em vez de aplicadas.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Controle {
    geracao: AtomicU64,
    desmontado: AtomicBool,
}

#[derive(Debug, Clone, Default)]
pub struct Carregamento {
    controle: Arc<Controle>,
}

/// Prova de que uma resposta pertence ao fetch mais recente
#[derive(Debug, Clone)]
pub struct Ticket {
    geracao: u64,
    controle: Arc<Controle>,
}

impl Ticket {
    pub fn e_atual(&self) -> bool {
        !self.controle.desmontado.load(Ordering::Acquire)
            && self.controle.geracao.load(Ordering::Acquire) == self.geracao
    }

    pub fn geracao(&self) -> u64 {
        self.geracao
    }
}

impl Carregamento {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inicia um fetch e invalida todos os anteriores
    pub fn iniciar(&self) -> Ticket {
        let geracao = self.controle.geracao.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            geracao,
            controle: Arc::clone(&self.controle),
        }
    }

    /// Descarta o fetch em andamento sem iniciar outro
    pub fn cancelar(&self) {
        self.controle.geracao.fetch_add(1, Ordering::AcqRel);
    }

    /// Tela saiu de cena: nenhum ticket emitido volta a ser atual
    pub fn desmontar(&self) {
        self.controle.desmontado.store(true, Ordering::Release);
    }

    pub fn desmontado(&self) -> bool {
        self.controle.desmontado.load(Ordering::Acquire)
    }
}
