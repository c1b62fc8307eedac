//! Tipos de erro para o cliente da API de moderação de conteúdo.
//!
//! Define [`ModerationError`] com variantes para falha de transporte,
//! erros retornados pela API e respostas em formato inválido. Usa
//! `thiserror` para derivar `Display` e `Error` automaticamente a partir
//! dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao consultar o serviço de moderação.
///
/// As variantes cobrem os três cenários de falha do contrato:
/// - [`Transport`](ModerationError::Transport) — falha na camada de rede ou timeout
/// - [`Api`](ModerationError::Api) — a API retornou um status HTTP de erro (4xx/5xx)
/// - [`Format`](ModerationError::Format) — o corpo da resposta não tem o formato esperado
///
/// Uma rejeição de conteúdo NÃO é um erro: é um veredito normal com
/// `approved = false`.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("moderation API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Erro retornado pela API (ex.: 401 token inválido, 500 erro interno).
    /// Contém o código de status HTTP e a mensagem do corpo da resposta.
    #[error("moderation API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// O corpo da resposta não pôde ser decodificado como o JSON esperado.
    #[error("invalid response format from moderation API: {0}")]
    Format(String),
}
