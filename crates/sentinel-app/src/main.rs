use anyhow::Result;
use clap::Parser;

use sentinel_app::config::home_dir;
use sentinel_app::{build_controller, cli, logging, run_once, run_repl_mode, AppConfig, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        cli::print_completions(shell);
        return Ok(());
    }

    logging::init(cli.verbose);

    let config = AppConfig::from_cli(&cli, home_dir())?;
    let mut chat = build_controller(&config)?;

    match cli.once.as_deref() {
        Some(text) => run_once(&mut chat, text).await,
        None => run_repl_mode(&mut chat, &config).await,
    }
}
