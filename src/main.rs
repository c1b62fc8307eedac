use anyhow::Result;
use clap::Parser;
use console::Style;

use avatarforge::cli::{Cli, Command};
use avatarforge::moderation::ModerationProvider;
use avatarforge::ui::SubmissionProgress;
use avatarforge::{AvatarConfig, AvatarService, Job};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AvatarConfig::load()?;
    let simulate = config.simulate && !cli.live;

    match cli.command {
        Command::Submit { prompt, user } => {
            if simulate {
                run_submit(&AvatarService::simulated(), &user, &prompt).await;
            } else {
                let service = AvatarService::live(config.moderation_url, config.api_token);
                run_submit(&service, &user, &prompt).await;
            }
        }
        Command::Demo => run_demo().await,
    }

    Ok(())
}

async fn run_submit<P: ModerationProvider>(service: &AvatarService<P>, user: &str, prompt: &str) {
    let progress = SubmissionProgress::start(prompt);
    let job = service.submit_job(user, prompt).await;
    progress.complete(&job);
    progress.print_job(&job);
}

/// Walks the canonical scenarios against the simulator: approved content,
/// keyword-rejected content, empty content, and a status lookup.
async fn run_demo() {
    let bold = Style::new().bold();
    let dim = Style::new().dim();
    let service = AvatarService::simulated();
    let mut submitted: Vec<Job> = Vec::new();

    println!("{}", bold.apply_to("avatarforge demo (simulated moderation)"));

    let cases = [
        ("user123", "A friendly robot avatar with blue eyes and a smile"),
        ("user456", "Violent avatar with weapons and blood"),
        ("user789", ""),
    ];

    for (user, prompt) in cases {
        println!();
        println!("submitting for {user}: {prompt:?}");
        let progress = SubmissionProgress::start(prompt);
        let job = service.submit_job(user, prompt).await;
        progress.complete(&job);
        submitted.push(job);
    }

    println!();
    println!("{}", bold.apply_to("status lookup"));
    let first = &submitted[0];
    match service.job_status(&first.id) {
        Some(job) => println!(
            "  job {} -> {} (created {})",
            &job.id[..8],
            job.status,
            job.created_at
        ),
        None => println!("  job {} not found", first.id),
    }

    println!();
    println!("{}", bold.apply_to("summary"));
    for job in &submitted {
        println!(
            "  {} {} — {:?}",
            dim.apply_to(&job.id[..8]),
            job.status,
            job.prompt
        );
    }
    println!("{}", dim.apply_to(format!("{} jobs processed", submitted.len())));
}
