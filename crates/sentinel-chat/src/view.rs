use sentinel_types::Turn;

/// Connection indicator shown next to the model name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Querying,
    Connected,
    Offline,
    Paused,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Querying => "Consultando OpenAI...",
            Status::Connected => "IA conectada a OpenAI",
            Status::Offline => "Error con OpenAI",
            Status::Paused => "IA en pausa",
        }
    }

    /// Whether the indicator dot should read as online
    pub fn is_online(&self) -> bool {
        matches!(self, Status::Querying | Status::Connected)
    }
}

/// Presentation side of the chat.
///
/// Methods take `&self` so a [`BusyGuard`] can hold the view while the
/// controller keeps mutating its history; implementations use interior
/// mutability where they need state.
pub trait ChatView {
    fn show_user(&self, text: &str);

    /// Assistant-style bubble with a small annotation under it
    fn show_assistant(&self, text: &str, meta: &str);

    /// Placeholder while a reply is pending
    fn show_typing(&self) {}

    /// Enable or disable further submissions
    fn set_busy(&self, busy: bool);

    fn set_status(&self, _status: Status) {}

    /// Empty the text input after a typed submission
    fn clear_input(&self) {}

    /// Repaint restored turns at startup; never receives system turns
    fn show_history(&self, turns: &[Turn]);

    /// Wipe the transcript and show the memory-cleared notice
    fn show_cleared(&self);
}

/// Marks the view busy for as long as it lives.
///
/// Dropping the guard re-enables input on every exit path.
#[must_use = "the view is released as soon as the guard is dropped"]
pub struct BusyGuard<'a, V: ChatView + ?Sized> {
    view: &'a V,
}

impl<'a, V: ChatView + ?Sized> BusyGuard<'a, V> {
    pub fn acquire(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: ChatView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}
