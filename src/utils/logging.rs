use tracing::{debug, error, info, warn};

pub fn log_config_loaded(env: &str) {
    info!("Configuração carregada para o ambiente: {}", env);
}

pub fn log_tela_carregada(tela: &str, total: usize) {
    info!("📥 [{}] {} registros carregados", tela, total);
}

pub fn log_resultado_descartado(tela: &str) {
    debug!("[{}] Resposta de requisição superada descartada", tela);
}

pub fn log_filtros_aplicados(tela: &str, total: usize, filtrados: usize) {
    debug!("[{}] Filtros aplicados: {} de {} registros", tela, filtrados, total);
}

pub fn log_sessao_expirada() {
    warn!("🔒 Sessão expirada, redirecionando para o login");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Erro de validação: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}
