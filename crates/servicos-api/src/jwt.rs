//! Leitura do payload de tokens JWT emitidos pelo backend
//!
//! O payload é apenas decodificado (base64url + JSON). A assinatura NÃO é
//! verificada: os claims servem para exibir dados e montar rotas com o id do
//! tenant, nunca como decisão de autorização. Quem autoriza é o backend.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{ApiError, Result};

/// Perfil de acesso da conta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Papel {
    Empresa,
    Prestador,
    Cliente,
}

impl Papel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Papel::Empresa => "empresa",
            Papel::Prestador => "prestador",
            Papel::Cliente => "cliente",
        }
    }
}

impl fmt::Display for Papel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Papel {
    type Err = String;

    /// Aceita "empresa", "EMPRESA" e "ROLE_EMPRESA"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.strip_prefix("role_").unwrap_or(&lower) {
            "empresa" => Ok(Papel::Empresa),
            "prestador" => Ok(Papel::Prestador),
            "cliente" => Ok(Papel::Cliente),
            _ => Err(format!("Perfil desconhecido: {}", s)),
        }
    }
}

/// Claims conhecidos do payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default, alias = "role", alias = "tipo", alias = "perfil")]
    pub papel: Option<String>,

    #[serde(default, deserialize_with = "id_flexivel")]
    pub id: Option<i64>,

    #[serde(default, alias = "empresaId", deserialize_with = "id_flexivel")]
    pub empresa_id: Option<i64>,

    #[serde(default, alias = "prestadorId", deserialize_with = "id_flexivel")]
    pub prestador_id: Option<i64>,

    #[serde(default, alias = "clienteId", deserialize_with = "id_flexivel")]
    pub cliente_id: Option<i64>,

    #[serde(default)]
    pub nome: Option<String>,

    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Perfil declarado no token, se reconhecível
    pub fn papel_declarado(&self) -> Option<Papel> {
        self.papel.as_deref().and_then(|p| p.parse().ok())
    }

    /// Id do tenant para o perfil pedido
    ///
    /// Usa o claim específico (`empresaId`, `prestadorId`, `clienteId`) e cai
    /// para `id` quando o token não declara outro perfil.
    pub fn identificador(&self, papel: Papel) -> Option<i64> {
        let especifico = match papel {
            Papel::Empresa => self.empresa_id,
            Papel::Prestador => self.prestador_id,
            Papel::Cliente => self.cliente_id,
        };

        especifico.or_else(|| match self.papel_declarado() {
            Some(declarado) if declarado != papel => None,
            _ => self.id,
        })
    }

    pub fn expira_em(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Token sem `exp` nunca é considerado expirado pelo cliente
    pub fn expirado_em(&self, agora: DateTime<Utc>) -> bool {
        self.expira_em().map(|exp| agora >= exp).unwrap_or(false)
    }
}

fn id_flexivel<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decodifica o segmento do meio de um JWT
pub fn decodificar_claims(token: &str) -> Result<Claims> {
    let partes: Vec<&str> = token.trim().split('.').collect();
    if partes.len() != 3 {
        return Err(ApiError::TokenInvalido(format!(
            "esperados 3 segmentos, encontrados {}",
            partes.len()
        )));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(partes[1].trim_end_matches('='))
        .map_err(|e| ApiError::TokenInvalido(format!("payload base64 inválido: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::TokenInvalido(format!("payload JSON inválido: {}", e)))
}

#[cfg(test)]
pub(crate) fn token_de_teste(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let corpo = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.assinatura", header, corpo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodifica_empresa() {
        let token = token_de_teste(&json!({"sub": "acme@x.com", "role": "EMPRESA", "empresaId": 42, "exp": 2000000000}));
        let claims = decodificar_claims(&token).unwrap();

        assert_eq!(claims.sub.as_deref(), Some("acme@x.com"));
        assert_eq!(claims.papel_declarado(), Some(Papel::Empresa));
        assert_eq!(claims.identificador(Papel::Empresa), Some(42));
        assert_eq!(claims.identificador(Papel::Prestador), None);
    }

    #[test]
    fn test_id_como_string_e_fallback() {
        let token = token_de_teste(&json!({"tipo": "ROLE_PRESTADOR", "id": "7"}));
        let claims = decodificar_claims(&token).unwrap();

        assert_eq!(claims.identificador(Papel::Prestador), Some(7));
        assert_eq!(claims.identificador(Papel::Empresa), None);
    }

    #[test]
    fn test_sem_papel_usa_id() {
        let token = token_de_teste(&json!({"id": 3}));
        let claims = decodificar_claims(&token).unwrap();
        assert_eq!(claims.identificador(Papel::Cliente), Some(3));
    }

    #[test]
    fn test_token_malformado() {
        assert!(matches!(decodificar_claims("abc"), Err(ApiError::TokenInvalido(_))));
        assert!(matches!(decodificar_claims("a.%%%.c"), Err(ApiError::TokenInvalido(_))));

        let nao_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("nada"));
        assert!(matches!(decodificar_claims(&nao_json), Err(ApiError::TokenInvalido(_))));
    }

    #[test]
    fn test_expiracao() {
        let claims = Claims {
            exp: Some(1_000),
            ..Default::default()
        };
        assert!(claims.expirado_em(Utc.timestamp_opt(1_000, 0).unwrap()));
        assert!(!claims.expirado_em(Utc.timestamp_opt(999, 0).unwrap()));
        assert!(!Claims::default().expirado_em(Utc::now()));
    }

    #[test]
    fn test_papel_from_str() {
        assert_eq!("ROLE_CLIENTE".parse::<Papel>(), Ok(Papel::Cliente));
        assert_eq!(" Empresa ".parse::<Papel>(), Ok(Papel::Empresa));
        assert!("admin".parse::<Papel>().is_err());
    }
}
