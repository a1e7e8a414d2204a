//! Fatiamento em páginas e navegação

use std::ops::Range;

/// Tamanhos oferecidos no seletor de itens por página
pub const TAMANHOS_PAGINA: [usize; 4] = [5, 10, 20, 50];

/// Página atual (1-based) e tamanho de página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginacao {
    pagina: usize,
    itens_por_pagina: usize,
}

impl Default for Paginacao {
    fn default() -> Self {
        Self::new(TAMANHOS_PAGINA[1])
    }
}

impl Paginacao {
    /// Tamanho zero é tratado como 1
    pub fn new(itens_por_pagina: usize) -> Self {
        Self {
            pagina: 1,
            itens_por_pagina: itens_por_pagina.max(1),
        }
    }

    pub fn pagina(&self) -> usize {
        self.pagina
    }

    pub fn itens_por_pagina(&self) -> usize {
        self.itens_por_pagina
    }

    /// `max(1, ceil(total / itens_por_pagina))`
    pub fn total_paginas(&self, total: usize) -> usize {
        total.div_ceil(self.itens_por_pagina).max(1)
    }

    /// Faixa de posições da página atual, limitada a `total`
    pub fn intervalo(&self, total: usize) -> Range<usize> {
        let inicio = (self.pagina - 1).saturating_mul(self.itens_por_pagina).min(total);
        let fim = inicio.saturating_add(self.itens_por_pagina).min(total);
        inicio..fim
    }

    pub fn fatia<'a, T>(&self, itens: &'a [T]) -> &'a [T] {
        &itens[self.intervalo(itens.len())]
    }

    /// Vai para a página `n`; retorna `false` sem mudar nada se `n` é a
    /// página atual ou está fora de `[1, total_paginas]`
    pub fn ir_para(&mut self, n: usize, total: usize) -> bool {
        if n == self.pagina || n < 1 || n > self.total_paginas(total) {
            return false;
        }
        self.pagina = n;
        true
    }

    pub fn primeira(&mut self, total: usize) -> bool {
        self.ir_para(1, total)
    }

    pub fn anterior(&mut self, total: usize) -> bool {
        match self.pagina.checked_sub(1) {
            Some(n) => self.ir_para(n, total),
            None => false,
        }
    }

    pub fn proxima(&mut self, total: usize) -> bool {
        self.ir_para(self.pagina + 1, total)
    }

    pub fn ultima(&mut self, total: usize) -> bool {
        let ultima = self.total_paginas(total);
        self.ir_para(ultima, total)
    }

    /// Trocar o tamanho sempre volta para a página 1
    pub fn definir_itens_por_pagina(&mut self, itens_por_pagina: usize) {
        self.itens_por_pagina = itens_por_pagina.max(1);
        self.pagina = 1;
    }

    /// Depois de um novo filtro: se a página atual deixou de existir, volta para 1
    pub fn reconciliar(&mut self, total: usize) -> bool {
        if self.pagina > self.total_paginas(total) {
            self.pagina = 1;
            return true;
        }
        false
    }

    /// "Página 2 de 3"
    pub fn rotulo(&self, total: usize) -> String {
        format!("Página {} de {}", self.pagina, self.total_paginas(total))
    }
}
