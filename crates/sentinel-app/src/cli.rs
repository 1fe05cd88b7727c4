use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

/// CLI arguments for sentinel-chat
#[derive(Parser, Debug, Default)]
#[command(name = "sentinel-chat")]
#[command(about = "AGi Sentinel chat - the automation assistant in your terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the backend; /chat and /browse are appended to it
    #[arg(long, value_name = "URL", env = "SENTINEL_BASE_URL")]
    pub base_url: Option<String>,

    /// Use the development backend on http://127.0.0.1:5000
    #[arg(long)]
    pub local: bool,

    /// Full URL of the chat endpoint (overrides --base-url and --local)
    #[arg(long, value_name = "URL", env = "SENTINEL_CHAT_URL")]
    pub chat_url: Option<String>,

    /// Full URL of the browse endpoint (overrides --base-url and --local)
    #[arg(long, value_name = "URL", env = "SENTINEL_BROWSE_URL")]
    pub browse_url: Option<String>,

    /// Directory where the conversation history is kept (default: ~/.agi-sentinel)
    #[arg(long, value_name = "DIR", env = "SENTINEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Start with the AI switched off; toggle later with /ai on
    #[arg(long)]
    pub no_ai: bool,

    /// Abort backend requests after this many seconds
    #[arg(long, value_name = "SECS", env = "SENTINEL_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging (HTTP requests, history persistence)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Send a single message, print the reply and exit
    #[arg(long, value_name = "TEXT")]
    pub once: Option<String>,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "sentinel-chat",
            "--local",
            "--no-ai",
            "--timeout-secs",
            "15",
            "--once",
            "hola",
        ])
        .unwrap();
        assert!(cli.local);
        assert!(cli.no_ai);
        assert_eq!(cli.timeout_secs, Some(15));
        assert_eq!(cli.once.as_deref(), Some("hola"));
    }
}
