//! Tipos de dados para requisições e respostas da API de moderação.
//!
//! As structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato esperado pelo endpoint `/api/v1/moderate-content`.

use serde::{Deserialize, Serialize};

/// Razão padrão quando a API aprova ou rejeita sem justificativa.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Corpo da requisição para o endpoint `/api/v1/moderate-content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// Texto a ser avaliado (a descrição do avatar solicitado).
    pub content: String,
    /// Identificador do usuário solicitante. Serializado como `user_id`.
    pub user_id: String,
}

/// Corpo da resposta retornada pela API de moderação.
///
/// O campo `reason` é opcional no contrato; [`ModerationVerdict::from`]
/// aplica [`DEFAULT_REASON`] quando ausente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResponse {
    /// Se o conteúdo foi aprovado pelas diretrizes.
    pub approved: bool,
    /// Justificativa da decisão, quando fornecida.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Veredito de moderação consumido pelo orquestrador de jobs.
///
/// Imutável após a construção; produzido apenas pelo cliente de moderação
/// ou pelo simulador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    pub approved: bool,
    pub reason: Option<String>,
}

impl ModerationVerdict {
    /// Veredito de aprovação com justificativa.
    pub fn approve(reason: impl Into<String>) -> Self {
        Self {
            approved: true,
            reason: Some(reason.into()),
        }
    }

    /// Veredito de rejeição com justificativa.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            reason: Some(reason.into()),
        }
    }
}

impl From<ModerationResponse> for ModerationVerdict {
    fn from(response: ModerationResponse) -> Self {
        Self {
            approved: response.approved,
            reason: Some(
                response
                    .reason
                    .unwrap_or_else(|| DEFAULT_REASON.to_string()),
            ),
        }
    }
}
