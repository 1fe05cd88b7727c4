use log::{debug, info, warn};
use sentinel_types::{Role, Turn, DEFAULT_PERSONA, STORAGE_KEY};

use crate::error::Result;
use crate::store::KeyValueStore;

/// Sole owner of the conversation history.
///
/// Index 0 always holds the persona system turn of a fresh or reset history.
/// Every mutation goes through this type; views only ever see `turns()`.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    persona: String,
    turns: Vec<Turn>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Create a history holding only the default persona turn
    pub fn new(store: S) -> Self {
        Self::with_persona(store, DEFAULT_PERSONA)
    }

    pub fn with_persona(store: S, persona: impl Into<String>) -> Self {
        let persona = persona.into();
        Self {
            turns: vec![Turn::system(persona.clone())],
            store,
            persona,
        }
    }

    /// Adopt the persisted history if there is a usable one.
    ///
    /// Absent, malformed, non-array and empty payloads all leave the current
    /// history untouched. Failures are logged, never returned. Returns whether
    /// a persisted history was adopted.
    pub fn load(&mut self) -> bool {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                warn!("Could not read saved history: {}", e);
                return false;
            }
        };

        match serde_json::from_str::<Vec<Turn>>(&raw) {
            Ok(turns) if !turns.is_empty() => {
                info!("Restored {} turns from saved history", turns.len());
                self.turns = turns;
                true
            }
            Ok(_) => {
                debug!("Saved history is empty, keeping default");
                false
            }
            Err(e) => {
                warn!("Could not parse saved history: {}", e);
                false
            }
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Write the full history under the storage key, overwriting the old value
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.turns)?;
        self.store.set(STORAGE_KEY, &json)?;
        debug!("Persisted {} turns", self.turns.len());
        Ok(())
    }

    /// Go back to the single persona turn and persist immediately
    pub fn reset(&mut self) -> Result<()> {
        self.turns = vec![Turn::system(self.persona.clone())];
        info!("History cleared");
        self.persist()
    }

    /// The most recent `n` turns, oldest first
    pub fn last_n(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns a user should see again after a restart (everything but system turns)
    pub fn visible_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.role != Role::System)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
