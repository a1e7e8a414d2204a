/// Extratores de campo que cada tela fornece ao pipeline
///
/// Só `id`, `nome_ordenacao`, `data_criacao` e `campos_busca` são
/// obrigatórios; os demais retornam `None` para tipos sem aquele filtro.
/// Campos ausentes nunca geram erro: um `None` simplesmente não casa com
/// um critério preenchido.
pub trait RegistroFiltravel {
    fn id(&self) -> i64;

    /// Chave de ordenação por nome
    fn nome_ordenacao(&self) -> Option<&str>;

    /// Timestamp bruto de criação, como veio do backend
    fn data_criacao(&self) -> Option<&str>;

    /// Campos examinados pela busca livre
    fn campos_busca(&self) -> Vec<Option<&str>>;

    fn status(&self) -> Option<&str> {
        None
    }

    /// Valor comparado com a faixa mínima/máxima
    fn valor(&self) -> Option<f64> {
        None
    }

    /// Nome do vínculo filtrado à parte (ex.: nome do prestador)
    fn nome_vinculado(&self) -> Option<&str> {
        None
    }
}
