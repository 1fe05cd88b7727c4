use colored::Colorize;
use std::cell::{Cell, RefCell};
use std::io::{self, Stdout, Write};

use sentinel_chat::{ChatView, Role, Status, Turn};
use sentinel_types::messages;

/// Renders the conversation as colored lines on a terminal
pub struct TerminalView<W: Write = Stdout> {
    out: RefCell<W>,
    busy: Cell<bool>,
    status: Cell<Option<Status>>,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            busy: Cell::new(false),
            status: Cell::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        // A closed stdout is not worth aborting the session over
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn assistant_bubble(&self, text: &str, meta: &str) {
        self.line(&format!("{} {}", "IA:".bright_cyan().bold(), text));
        if !meta.is_empty() {
            self.line(&format!("    {}", meta.bright_black()));
        }
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn show_user(&self, text: &str) {
        self.line(&format!("{} {}", "Tú:".bright_green().bold(), text));
    }

    fn show_assistant(&self, text: &str, meta: &str) {
        self.assistant_bubble(text, meta);
    }

    fn show_typing(&self) {
        self.line(&"IA está escribiendo...".bright_black().italic().to_string());
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn set_status(&self, status: Status) {
        if self.status.get() == Some(status) {
            return;
        }
        self.status.set(Some(status));
        let dot = if status.is_online() {
            "●".green()
        } else {
            "●".red()
        };
        self.line(&format!("{} {}", dot, status.label().bright_black()));
    }

    fn show_history(&self, turns: &[Turn]) {
        for turn in turns {
            match turn.role {
                Role::User => self.show_user(&turn.content),
                Role::Assistant => self.assistant_bubble(&turn.content, messages::META_RESTORED),
                Role::System => {}
            }
        }
    }

    fn show_cleared(&self) {
        self.assistant_bubble(messages::MEMORY_CLEARED, messages::META_SYSTEM);
    }
}
