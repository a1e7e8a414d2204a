use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "jwt")]
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CadastroEmpresa {
    pub nome: String,
    pub cnpj: String,
    pub email: String,
    pub senha: String,
    pub telefone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadastroPrestador {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub senha: String,
    pub telefone: String,
    pub especialidade: String,
    pub empresa_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CadastroCliente {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub senha: String,
    pub telefone: String,
}
