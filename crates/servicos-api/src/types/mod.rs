//! Registros trocados com o backend
//!
//! Campos aninhados e opcionais são `Option`: o backend omite relações não
//! carregadas e a interface não pode falhar por isso.

pub mod agendamento;
pub mod auth;
pub mod estoque;
pub mod ordem;
pub mod pessoa;
pub mod relatorio;
pub mod servico;

pub use agendamento::Agendamento;
pub use auth::{CadastroCliente, CadastroEmpresa, CadastroPrestador, LoginRequest, LoginResponse};
pub use estoque::{ItemEstoque, NovoItemEstoque};
pub use ordem::{AtualizacaoStatus, NovaOrdemServico, OrdemResumo, OrdemServico, StatusOrdem};
pub use pessoa::{Cliente, PessoaResumo, Prestador, StatusPrestador};
pub use relatorio::{NovoRelatorio, RelatorioServico};
pub use servico::{NovoServico, Servico};
