pub mod repl;

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Stdout;

use sentinel_chat::{ConversationController, FileStore, HistoryStore, HttpBackend, SubmitOutcome};

use crate::config::AppConfig;
use crate::terminal_view::TerminalView;

pub use repl::{run_repl_mode, ReplCommand};

/// Controller as assembled for the terminal front-end
pub type TerminalController = ConversationController<HttpBackend, FileStore, TerminalView<Stdout>>;

/// Build the terminal controller from resolved configuration
pub fn build_controller(config: &AppConfig) -> Result<TerminalController> {
    let store = FileStore::new(&config.data_dir).with_context(|| {
        format!(
            "Failed to open history directory {}",
            config.data_dir.display()
        )
    })?;
    debug!("History directory: {}", store.dir().display());

    let mut backend = HttpBackend::new(config.endpoints.clone());
    if let Some(timeout) = config.timeout {
        backend = backend.with_timeout(timeout);
    }
    info!(
        "Chat endpoint: {}, browse endpoint: {}",
        config.endpoints.chat_url, config.endpoints.browse_url
    );

    let mut chat = ConversationController::new(
        HistoryStore::new(store),
        backend,
        TerminalView::stdout(),
    )
    .with_context_window(config.context_window);
    chat.set_ai_enabled(config.ai_enabled);
    Ok(chat)
}

/// Restore history, send one message and return
pub async fn run_once(chat: &mut TerminalController, text: &str) -> Result<()> {
    chat.boot();
    match chat.submit(text).await {
        SubmitOutcome::Ignored => anyhow::bail!("Nothing to send: the message is empty"),
        SubmitOutcome::Failed => anyhow::bail!("The backend did not answer"),
        _ => Ok(()),
    }
}
