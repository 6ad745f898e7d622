use clap::Parser;
use dotenvy::dotenv;

use docvault::bootstrap::app_context::AppContext;
use docvault::bootstrap::config::Config;
use docvault::presentation::cli::render::{NoticeKind, notify};
use docvault::presentation::cli::{Cli, run};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "docvault=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = start(cli).await {
        tracing::debug!(error = ?err, "command_failed");
        notify(NoticeKind::Error, format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn start(cli: Cli) -> anyhow::Result<()> {
    let cfg = Config::from_env()?;
    tracing::debug!(?cfg, "starting docvault");
    let ctx = AppContext::build(cfg).await?;
    run(&ctx, cli.command).await
}
