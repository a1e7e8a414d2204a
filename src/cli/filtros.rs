//! Flags de filtro, ordenação e página comuns às listagens

use chrono::{DateTime, Local, TimeZone};
use clap::Args;

use crate::pipeline::datas::{fim_do_dia, inicio_do_dia, interpretar_dia};
use crate::pipeline::{
    valor_de_texto, AtalhoData, CampoOrdenacao, CriteriosFiltro, Direcao, EspecOrdenacao, FiltroStatus,
    PoliticaAtalho, RegistroFiltravel,
};
use crate::telas::Tela;
use crate::utils::logging::log_warning;

#[derive(Args, Debug, Clone, Default)]
pub struct FiltrosArgs {
    /// Busca livre (sem acento e sem diferenciar maiúsculas)
    #[arg(short = 'b', long)]
    pub busca: Option<String>,

    /// Data inicial (AAAA-MM-DD ou DD/MM/AAAA)
    #[arg(long)]
    pub de: Option<String>,

    /// Data final, inclusiva
    #[arg(long)]
    pub ate: Option<String>,

    /// Período rápido: hoje, semana, mes
    #[arg(long)]
    pub atalho: Option<AtalhoData>,

    /// Descarta --de/--ate quando o atalho for aplicado
    #[arg(long, requires = "atalho")]
    pub sobrescrever_datas: bool,

    /// Status exato (ex.: PENDENTE, CONCLUIDA, ATIVO)
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Valor mínimo (aceita vírgula decimal)
    #[arg(long)]
    pub min: Option<String>,

    /// Valor máximo
    #[arg(long)]
    pub max: Option<String>,

    /// Nome do prestador vinculado
    #[arg(long)]
    pub prestador: Option<String>,

    /// Campo de ordenação: nome, id, data
    #[arg(long)]
    pub ordenar: Option<CampoOrdenacao>,

    /// Ordem decrescente
    #[arg(long, requires = "ordenar")]
    pub desc: bool,

    /// Página (começa em 1)
    #[arg(short = 'p', long, default_value_t = 1)]
    pub pagina: usize,

    /// Itens por página (padrão da configuração)
    #[arg(long)]
    pub por_pagina: Option<usize>,
}

impl FiltrosArgs {
    pub fn politica(&self) -> PoliticaAtalho {
        if self.sobrescrever_datas {
            PoliticaAtalho::Sobrescrever
        } else {
            PoliticaAtalho::Preservar
        }
    }

    /// Critérios equivalentes às flags; datas ilegíveis ficam sem limite
    pub fn criterios_em<Tz: TimeZone>(&self, agora: &DateTime<Tz>) -> CriteriosFiltro {
        let tz = agora.timezone();
        let inicio = self.de.as_deref().and_then(|raw| dia_ou_aviso("--de", raw)).map(|d| inicio_do_dia(d, &tz));
        let fim = self.ate.as_deref().and_then(|raw| dia_ou_aviso("--ate", raw)).map(|d| fim_do_dia(d, &tz));

        let mut criterios = CriteriosFiltro::new()
            .com_busca(self.busca.clone().unwrap_or_default())
            .com_periodo(inicio, fim)
            .com_status(self.status.as_deref().map(FiltroStatus::de_texto).unwrap_or_default())
            .com_valores(
                self.min.as_deref().and_then(valor_de_texto),
                self.max.as_deref().and_then(valor_de_texto),
            )
            .com_nome_vinculado(self.prestador.clone().unwrap_or_default());

        if let Some(atalho) = self.atalho {
            criterios.selecionar_atalho(atalho, agora, self.politica());
        }
        criterios
    }

    pub fn ordenacao(&self) -> Option<EspecOrdenacao> {
        let direcao = if self.desc { Direcao::Desc } else { Direcao::Asc };
        self.ordenar.map(|campo| EspecOrdenacao::new(campo, direcao))
    }

    /// Configura a tela com as flags; retorna `false` se a página pedida não existe
    pub fn aplicar_em<T: RegistroFiltravel>(&self, tela: &mut Tela<T>, por_pagina_padrao: usize) -> bool {
        tela.visao_mut().definir_itens_por_pagina(self.por_pagina.unwrap_or(por_pagina_padrao));
        tela.aplicar_filtros(self.criterios_em(&Local::now()));
        tela.visao_mut().definir_ordenacao_exata(self.ordenacao());

        if self.pagina == tela.visao().pagina_atual() {
            return true;
        }
        let ok = tela.ir_para_pagina(self.pagina);
        if !ok {
            log_warning(&format!(
                "Página {} não existe ({} no total), mostrando a página {}",
                self.pagina,
                tela.total_paginas(),
                tela.visao().pagina_atual()
            ));
        }
        ok
    }
}

fn dia_ou_aviso(flag: &str, raw: &str) -> Option<chrono::NaiveDate> {
    let dia = interpretar_dia(raw);
    if dia.is_none() {
        log_warning(&format!("{} '{}' não é uma data válida, ignorando", flag, raw));
    }
    dia
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::filtro::tests::Fake;
    use chrono::{FixedOffset, Utc};
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct Teste {
        #[command(flatten)]
        filtros: FiltrosArgs,
    }

    fn parse(args: &[&str]) -> FiltrosArgs {
        let mut completos = vec!["teste"];
        completos.extend_from_slice(args);
        Teste::try_parse_from(completos).unwrap().filtros
    }

    fn quarta() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 15, 14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_flags_viram_criterios() {
        let filtros = parse(&["-b", "joão", "--de", "01/05/2024", "--ate", "2024-05-31", "--min", "0", "--max", "abc"]);
        let criterios = filtros.criterios_em(&quarta());

        assert_eq!(criterios.busca, "joão");
        assert_eq!(criterios.data_inicio, Some(Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap()));
        assert_eq!(
            criterios.data_fim,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 2, 59, 59).unwrap() + chrono::Duration::nanoseconds(999_999_999))
        );
        assert_eq!(criterios.valor_min, Some(0.0));
        assert_eq!(criterios.valor_max, None);
        assert_eq!(criterios.status, FiltroStatus::Todos);
    }

    #[test]
    fn test_atalho_sobrescreve_datas_das_flags() {
        let filtros = parse(&["--de", "2024-01-01", "--atalho", "semana"]);
        let criterios = filtros.criterios_em(&quarta());
        assert_eq!(criterios.atalho(), Some(AtalhoData::Semana));
        assert_eq!(criterios.data_inicio, Some(Utc.with_ymd_and_hms(2024, 5, 12, 3, 0, 0).unwrap()));
    }

    #[test]
    fn test_politica_do_atalho() {
        assert_eq!(parse(&["--atalho", "hoje"]).politica(), PoliticaAtalho::Preservar);
        assert_eq!(
            parse(&["--atalho", "hoje", "--sobrescrever-datas"]).politica(),
            PoliticaAtalho::Sobrescrever
        );
        assert!(Teste::try_parse_from(["teste", "--sobrescrever-datas"]).is_err());
    }

    #[test]
    fn test_desc_exige_ordenar() {
        assert!(Teste::try_parse_from(["teste", "--desc"]).is_err());
        let filtros = parse(&["--ordenar", "data", "--desc"]);
        assert_eq!(filtros.ordenacao(), Some(EspecOrdenacao::new(CampoOrdenacao::Data, Direcao::Desc)));
    }

    #[test]
    fn test_pagina_inexistente_fica_na_primeira() {
        let mut tela: Tela<Fake> = Tela::new("teste", 4, vec![]);
        tela.visao_mut().substituir_fonte((1..=9).map(Fake::new).collect());

        assert!(parse(&["--por-pagina", "4", "-p", "3"]).aplicar_em(&mut tela, 10));
        assert_eq!(tela.visao().pagina_atual(), 3);

        assert!(!parse(&["--por-pagina", "4", "-p", "5"]).aplicar_em(&mut tela, 10));
        assert_eq!(tela.visao().pagina_atual(), 1);
    }
}
