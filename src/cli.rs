//! Interface de linha de comando do AvatarForge baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (submit, demo)
//! e a flag global `--live` para forçar chamadas reais à API de moderação.

use clap::{Parser, Subcommand};

/// AvatarForge — serviço de geração de avatares com moderação de conteúdo.
#[derive(Debug, Parser)]
#[command(name = "avatarforge", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Força chamadas reais à API de moderação em vez da simulação local.
    #[arg(long, global = true, default_value_t = false)]
    pub live: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Envia um pedido de geração de avatar e imprime o resultado.
    Submit {
        /// Descrição do avatar desejado.
        prompt: String,

        /// Identificador do usuário solicitante.
        #[arg(long, default_value = "anonymous")]
        user: String,
    },

    /// Executa a demonstração embutida com casos aprovados e rejeitados.
    Demo,
}
