pub mod settings;

pub use settings::{ApiSettings, PaginacaoSettings, SessaoSettings, Settings};
