//! Interface de terminal do AvatarForge — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`SubmissionProgress`] acompanha visualmente
//! o processamento de um pedido de avatar no terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::job::{Job, JobStatus};

/// Indicador visual de progresso para o envio de um pedido de avatar.
///
/// Exibe um spinner animado durante a moderação e mensagens coloridas
/// para conclusão (verde), rejeição (amarelo) e falha (vermelho).
pub struct SubmissionProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para jobs concluídos.
    green: Style,
    // Estilo vermelho para jobs falhos.
    red: Style,
    // Estilo amarelo para jobs rejeitados.
    yellow: Style,
}

impl SubmissionProgress {
    /// Inicia o spinner com a descrição do pedido e retorna a instância.
    pub fn start(prompt: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("moderating: {prompt}"));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Finaliza o spinner e exibe o resultado final do job.
    pub fn complete(&self, job: &Job) {
        self.pb.finish_and_clear();
        match job.status {
            JobStatus::Completed => {
                println!("  {} Avatar ready", self.green.apply_to("✓"));
                if let Some(url) = &job.avatar_url {
                    println!("    {url}");
                }
            }
            JobStatus::Rejected => {
                println!(
                    "  {} Request rejected: {}",
                    self.yellow.apply_to("✗"),
                    job.error_message.as_deref().unwrap_or("no reason recorded")
                );
            }
            JobStatus::Failed => {
                println!(
                    "  {} Processing failed: {}",
                    self.red.apply_to("✗"),
                    job.error_message.as_deref().unwrap_or("no error recorded")
                );
            }
            JobStatus::Pending => {
                // submit_job sempre retorna estado terminal.
                println!("  job {} still pending", job.id);
            }
        }
    }

    /// Imprime o registro do job formatado em JSON com o status colorido.
    pub fn print_job(&self, job: &Job) {
        let status_style = match job.status {
            JobStatus::Completed => &self.green,
            JobStatus::Rejected => &self.yellow,
            _ => &self.red,
        };
        println!(
            "  job {} — {}",
            &job.id[..8.min(job.id.len())],
            status_style.apply_to(job.status)
        );
        if let Ok(json) = serde_json::to_string_pretty(job) {
            println!("{json}");
        }
    }
}
