use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use sentinel_chat::Endpoints;
use sentinel_types::CONTEXT_WINDOW;

use crate::cli::Cli;

/// Name of the per-user data directory under $HOME
pub const DATA_DIR_NAME: &str = ".agi-sentinel";

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub data_dir: PathBuf,
    pub ai_enabled: bool,
    pub timeout: Option<Duration>,
    pub context_window: usize,
}

impl AppConfig {
    /// Resolve configuration.
    ///
    /// Precedence for each URL: explicit URL flag > `--local` > `--base-url`
    /// > hosted backend.
    pub fn from_cli(cli: &Cli, home: Option<PathBuf>) -> Result<Self> {
        let base = if cli.local {
            Endpoints::local()
        } else {
            match cli.base_url.as_deref() {
                Some(base) => Endpoints::from_base(base),
                None => Endpoints::remote(),
            }
        };

        let endpoints = Endpoints {
            chat_url: cli.chat_url.clone().unwrap_or(base.chat_url),
            browse_url: cli.browse_url.clone().unwrap_or(base.browse_url),
        };

        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => home
                .map(|home| home.join(DATA_DIR_NAME))
                .context("Failed to get home directory; pass --data-dir or set SENTINEL_DATA_DIR")?,
        };

        Ok(Self {
            endpoints,
            data_dir,
            ai_enabled: !cli.no_ai,
            timeout: cli.timeout_secs.map(Duration::from_secs),
            context_window: CONTEXT_WINDOW,
        })
    }
}

/// $HOME, or %USERPROFILE% on Windows
pub fn home_dir() -> Option<PathBuf> {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/ana"))
    }

    #[test]
    fn test_defaults_use_hosted_backend() {
        let config = AppConfig::from_cli(&Cli::default(), home()).unwrap();
        assert_eq!(config.endpoints, Endpoints::remote());
        assert_eq!(config.data_dir, PathBuf::from("/home/ana/.agi-sentinel"));
        assert!(config.ai_enabled);
        assert_eq!(config.timeout, None);
        assert_eq!(config.context_window, 10);
    }

    #[test]
    fn test_local_beats_base_url() {
        let cli = Cli {
            local: true,
            base_url: Some("https://elsewhere.example".to_string()),
            ..Cli::default()
        };
        let config = AppConfig::from_cli(&cli, home()).unwrap();
        assert_eq!(config.endpoints, Endpoints::local());
    }

    #[test]
    fn test_base_url_derives_both_endpoints() {
        let cli = Cli {
            base_url: Some("https://bot.example/".to_string()),
            ..Cli::default()
        };
        let config = AppConfig::from_cli(&cli, home()).unwrap();
        assert_eq!(config.endpoints.chat_url, "https://bot.example/chat");
        assert_eq!(config.endpoints.browse_url, "https://bot.example/browse");
    }

    #[test]
    fn test_explicit_urls_win() {
        let cli = Cli {
            local: true,
            chat_url: Some("http://chat.example/v1".to_string()),
            ..Cli::default()
        };
        let config = AppConfig::from_cli(&cli, home()).unwrap();
        assert_eq!(config.endpoints.chat_url, "http://chat.example/v1");
        assert_eq!(config.endpoints.browse_url, "http://127.0.0.1:5000/browse");
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli {
            no_ai: true,
            timeout_secs: Some(30),
            data_dir: Some(PathBuf::from("/tmp/sentinel")),
            ..Cli::default()
        };
        let config = AppConfig::from_cli(&cli, None).unwrap();
        assert!(!config.ai_enabled);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/sentinel"));
    }

    #[test]
    fn test_missing_home_without_data_dir_is_an_error() {
        assert!(AppConfig::from_cli(&Cli::default(), None).is_err());
    }
}
