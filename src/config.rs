//! Configuração do serviço carregada a partir de `avatarforge.toml`.
//!
//! A struct [`AvatarConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `MODERATION_API_TOKEN` tem precedência sobre o
//! arquivo para o token.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuração de nível superior carregada de `avatarforge.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarConfig {
    /// URL base do serviço de moderação de conteúdo.
    #[serde(default = "default_moderation_url")]
    pub moderation_url: String,

    /// Token bearer para autenticação na API de moderação.
    #[serde(default)]
    pub api_token: String,

    /// Quando `true`, usa o simulador local em vez de chamadas reais.
    #[serde(default = "default_simulate")]
    pub simulate: bool,
}

// Valor padrão para a URL de moderação.
fn default_moderation_url() -> String {
    "https://api.example.com".to_string()
}

// Simulação habilitada por padrão: o endpoint real pode não existir.
fn default_simulate() -> bool {
    true
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            moderation_url: default_moderation_url(),
            api_token: String::new(),
            simulate: default_simulate(),
        }
    }
}

impl AvatarConfig {
    /// Carrega a configuração de `avatarforge.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(Path::new("avatarforge.toml"))?;

        // Variável de ambiente tem precedência sobre o arquivo para o token.
        if let Ok(token) = std::env::var("MODERATION_API_TOKEN") {
            if !token.is_empty() {
                config.api_token = token;
            }
        }

        Ok(config)
    }

    /// Carrega a configuração do caminho fornecido, sem consultar o ambiente.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str::<AvatarConfig>(&contents)?)
        } else {
            Ok(Self::default())
        }
    }
}
