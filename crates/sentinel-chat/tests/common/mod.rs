use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use sentinel_chat::{
    Backend, BackendReply, ChatView, ConversationController, HistoryStore, KeyValueStore,
    MemoryStore, Status, StorageError, Turn,
};

/// Backend that replays queued replies and records every call
#[derive(Default)]
pub struct ScriptedBackend {
    chat_replies: RefCell<VecDeque<BackendReply>>,
    page_replies: RefCell<VecDeque<BackendReply>>,
    pub chat_calls: RefCell<Vec<Vec<Turn>>>,
    pub page_calls: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_chat(self, reply: BackendReply) -> Self {
        self.chat_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn reply_page(self, reply: BackendReply) -> Self {
        self.page_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn network_calls(&self) -> usize {
        self.chat_calls.borrow().len() + self.page_calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl Backend for ScriptedBackend {
    async fn send_chat(&self, turns: &[Turn]) -> BackendReply {
        self.chat_calls.borrow_mut().push(turns.to_vec());
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| BackendReply::failure("no scripted chat reply"))
    }

    async fn fetch_page(&self, url: &str) -> BackendReply {
        self.page_calls.borrow_mut().push(url.to_string());
        self.page_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| BackendReply::failure("no scripted page reply"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    User(String),
    Assistant { text: String, meta: String },
    Typing,
    Busy(bool),
    Status(Status),
    ClearInput,
    History(Vec<Turn>),
    Cleared,
}

/// View that records what it was asked to render
#[derive(Default)]
pub struct RecordingView {
    pub events: RefCell<Vec<ViewEvent>>,
    busy: Cell<bool>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Only the user and assistant bubbles, in order
    pub fn bubbles(&self) -> Vec<ViewEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ViewEvent::User(_) | ViewEvent::Assistant { .. }))
            .cloned()
            .collect()
    }

    pub fn take(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ChatView for RecordingView {
    fn show_user(&self, text: &str) {
        self.push(ViewEvent::User(text.to_string()));
    }

    fn show_assistant(&self, text: &str, meta: &str) {
        self.push(ViewEvent::Assistant {
            text: text.to_string(),
            meta: meta.to_string(),
        });
    }

    fn show_typing(&self) {
        self.push(ViewEvent::Typing);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        self.push(ViewEvent::Busy(busy));
    }

    fn set_status(&self, status: Status) {
        self.push(ViewEvent::Status(status));
    }

    fn clear_input(&self) {
        self.push(ViewEvent::ClearInput);
    }

    fn show_history(&self, turns: &[Turn]) {
        self.push(ViewEvent::History(turns.to_vec()));
    }

    fn show_cleared(&self) {
        self.push(ViewEvent::Cleared);
    }
}

/// Store that reads nothing and refuses every write, like a full or disabled localStorage
#[derive(Default)]
pub struct UnwritableStore {
    pub write_attempts: Cell<usize>,
}

impl KeyValueStore for UnwritableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts.set(self.write_attempts.get() + 1);
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

pub type TestController = ConversationController<ScriptedBackend, MemoryStore, RecordingView>;

pub fn controller_with(backend: ScriptedBackend, store: MemoryStore) -> TestController {
    controller_over(backend, store)
}

pub fn controller_over<S: KeyValueStore>(
    backend: ScriptedBackend,
    store: S,
) -> ConversationController<ScriptedBackend, S, RecordingView> {
    ConversationController::new(HistoryStore::new(store), backend, RecordingView::new())
}

pub fn assistant(text: &str, meta: &str) -> ViewEvent {
    ViewEvent::Assistant {
        text: text.to_string(),
        meta: meta.to_string(),
    }
}
