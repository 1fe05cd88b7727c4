use log::{debug, warn};

use sentinel_api::Backend;
use sentinel_history::{HistoryStore, KeyValueStore};
use sentinel_types::{messages, Turn, CONTEXT_WINDOW};

use crate::command::Command;
use crate::view::{BusyGuard, ChatView, Status};

/// Result of one submission, mostly useful to tests and the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing happened
    Ignored,
    /// `/web` command handled; history untouched
    PageFetched { ok: bool },
    /// AI toggle is off; a fixed notice was shown
    AiDisabled,
    /// Model replied and the reply was stored
    Replied { model: String },
    /// Model call failed; the user turn stays, no assistant turn is added
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Typed,
    QuickAction,
}

/// Drives one conversation: input → history → backend → history → view.
///
/// Each submission runs to completion before the next one can start; the
/// busy guard around every network call is what the front-ends rely on to
/// keep a single request in flight.
pub struct ConversationController<B, S, V>
where
    B: Backend,
    S: KeyValueStore,
    V: ChatView,
{
    history: HistoryStore<S>,
    backend: B,
    view: V,
    ai_enabled: bool,
    context_window: usize,
}

impl<B, S, V> ConversationController<B, S, V>
where
    B: Backend,
    S: KeyValueStore,
    V: ChatView,
{
    pub fn new(history: HistoryStore<S>, backend: B, view: V) -> Self {
        Self {
            history,
            backend,
            view,
            ai_enabled: true,
            context_window: CONTEXT_WINDOW,
        }
    }

    /// Number of recent turns sent with each chat request
    pub fn with_context_window(mut self, turns: usize) -> Self {
        self.context_window = turns.max(1);
        self
    }

    /// Restore saved history and paint it. Returns whether anything was restored.
    pub fn boot(&mut self) -> bool {
        let restored = self.history.load();
        let visible: Vec<Turn> = self.history.visible_turns().cloned().collect();
        self.view.show_history(&visible);
        self.view.set_status(self.idle_status());
        restored
    }

    /// Handle text typed into the input box
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        self.handle(text, Origin::Typed).await
    }

    /// Handle a preset prompt; the input box is left alone
    pub async fn quick_action(&mut self, prompt: &str) -> SubmitOutcome {
        self.handle(prompt, Origin::QuickAction).await
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
        self.view.set_status(self.idle_status());
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// Forget the conversation and show the cleared notice
    pub fn clear(&mut self) {
        if let Err(e) = self.history.reset() {
            warn!("Could not persist cleared history: {}", e);
        }
        self.view.show_cleared();
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn idle_status(&self) -> Status {
        if self.ai_enabled {
            Status::Connected
        } else {
            Status::Paused
        }
    }

    async fn handle(&mut self, raw: &str, origin: Origin) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.view.show_user(text);
        if origin == Origin::Typed {
            self.view.clear_input();
        }

        match Command::parse(text) {
            Command::FetchPage(url) => self.fetch_page(url).await,
            Command::Chat(_) if !self.ai_enabled => {
                self.view.show_typing();
                self.view
                    .show_assistant(messages::AI_DISABLED, messages::META_LOCAL);
                SubmitOutcome::AiDisabled
            }
            Command::Chat(prompt) => self.chat(prompt).await,
        }
    }

    async fn fetch_page(&mut self, url: &str) -> SubmitOutcome {
        debug!("Fetching page {}", url);
        let _busy = BusyGuard::acquire(&self.view);
        self.view.show_typing();

        let reply = self.backend.fetch_page(url).await;
        if reply.ok {
            let text = format!("{}{}", messages::PAGE_EXCERPT_INTRO, reply.text);
            self.view.show_assistant(&text, messages::META_BROWSER);
        } else {
            self.view.show_assistant(&reply.text, messages::META_BROWSER);
        }
        SubmitOutcome::PageFetched { ok: reply.ok }
    }

    async fn chat(&mut self, prompt: &str) -> SubmitOutcome {
        self.history.append(Turn::user(prompt));
        self.view.set_status(Status::Querying);

        let _busy = BusyGuard::acquire(&self.view);
        self.view.show_typing();

        let context = self.history.last_n(self.context_window);
        debug!("Sending {} turns to the model", context.len());
        let reply = self.backend.send_chat(context).await;

        if !reply.ok {
            self.view.show_assistant(&reply.text, messages::META_ERROR);
            self.view.set_status(Status::Offline);
            return SubmitOutcome::Failed;
        }

        let model = reply.model_label().to_string();
        self.history.append(Turn::assistant(reply.text.clone()));
        if let Err(e) = self.history.persist() {
            warn!("Could not save history: {}", e);
        }

        self.view
            .show_assistant(&reply.text, &messages::model_meta(&model));
        self.view.set_status(Status::Connected);
        SubmitOutcome::Replied { model }
    }
}
