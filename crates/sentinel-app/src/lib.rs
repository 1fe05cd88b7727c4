//! AGi Sentinel terminal chat
//!
//! Command-line front-end: argument parsing, configuration, logging and the
//! interactive loop around `sentinel_chat::ConversationController`.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod terminal_view;

pub use app::{build_controller, run_once, run_repl_mode, TerminalController};
pub use cli::Cli;
pub use config::AppConfig;
pub use terminal_view::TerminalView;
