//! Bounded calculation history
//!
//! Completed computations are kept oldest-first in a FIFO-evicting ledger and
//! written through to a [`KeyValueStore`] as a JSON array of
//! `"<expr> = <result>"` lines. Persistence is best effort: a failing store is
//! logged and the in-memory ledger stays authoritative.

use crate::calc::format::{format_number, parse_operand};
use crate::store::{KeyValueStore, StoreResult, HISTORY_KEY};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A single completed computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression that was evaluated, e.g. `"2 + 3"`
    pub expression: String,
    /// The result of the calculation
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// Returns the `"<expr> = <result>"` line
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }

    /// Parses a persisted `"<expr> = <result>"` line
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (expression, result) = line.rsplit_once(" = ")?;
        let result = match result.trim() {
            "NaN" => f64::NAN,
            other => parse_operand(other)?,
        };
        Some(Self::new(expression, result))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Append-only ledger capped at [`HistoryLedger::DEFAULT_MAX_ENTRIES`]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
    store: Option<Box<dyn KeyValueStore>>,
}

impl fmt::Debug for HistoryLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryLedger")
            .field("entries", &self.entries.len())
            .field("max_entries", &self.max_entries)
            .field("store", &self.store)
            .finish()
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLedger {
    /// Maximum number of entries kept
    pub const DEFAULT_MAX_ENTRIES: usize = 50;

    /// Number of entries shown by history displays
    pub const DISPLAY_ENTRIES: usize = 10;

    /// Creates an empty, unpersisted ledger
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates an unpersisted ledger with a custom cap
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
            store: None,
        }
    }

    /// Restores the ledger from `store` and writes every later change back.
    ///
    /// A missing key gives an empty ledger. Corrupt data is logged and
    /// ignored; only the newest entries up to the cap are kept.
    #[must_use]
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut ledger = Self::new();
        match store.get(HISTORY_KEY) {
            Ok(Some(json)) => match Self::parse_lines(&json) {
                Ok(entries) => {
                    for entry in entries {
                        ledger.push_entry(entry);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "ignoring corrupt persisted history"),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "history store unavailable, starting empty"),
        }
        tracing::debug!(entries = ledger.len(), "history loaded");
        ledger.store = Some(store);
        ledger
    }

    /// Attaches a store without loading from it
    pub fn attach_store(&mut self, store: Box<dyn KeyValueStore>) {
        self.store = Some(store);
    }

    /// Returns the attached store
    #[must_use]
    pub fn store(&self) -> Option<&dyn KeyValueStore> {
        self.store.as_deref()
    }

    /// Appends an entry, evicting the oldest ones beyond the cap, and persists
    pub fn append(&mut self, entry: HistoryEntry) {
        tracing::debug!(entry = %entry, "history append");
        self.push_entry(entry);
        self.persist();
    }

    /// Records a computation
    pub fn record(&mut self, expression: &str, result: f64) {
        self.append(HistoryEntry::new(expression, result));
    }

    /// Empties the ledger and removes its persisted copy
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.remove(HISTORY_KEY) {
                tracing::warn!(error = %e, "failed to remove persisted history");
            }
        }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cap
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Last `n` entries, newest first.
    ///
    /// The returned iterator is a read-only view; clone it to walk it again.
    pub fn recent(
        &self,
        n: usize,
    ) -> impl Iterator<Item = &HistoryEntry> + ExactSizeIterator + Clone {
        self.entries.iter().rev().take(n)
    }

    /// Display lines of the last `n` entries, newest first
    #[must_use]
    pub fn recent_lines(&self, n: usize) -> Vec<String> {
        self.recent(n).map(HistoryEntry::display).collect()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Serializes the ledger as a JSON array of display lines
    pub fn to_json(&self) -> StoreResult<String> {
        let lines: Vec<String> = self.entries.iter().map(HistoryEntry::display).collect();
        Ok(serde_json::to_string(&lines)?)
    }

    /// Builds an unpersisted ledger from a JSON array of display lines
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let mut ledger = Self::new();
        for entry in Self::parse_lines(json)? {
            ledger.push_entry(entry);
        }
        Ok(ledger)
    }

    fn parse_lines(json: &str) -> StoreResult<Vec<HistoryEntry>> {
        let lines: Vec<String> = serde_json::from_str(json)?;
        Ok(lines
            .iter()
            .filter_map(|line| {
                let entry = HistoryEntry::parse(line);
                if entry.is_none() {
                    tracing::warn!(line = %line, "skipping unreadable history line");
                }
                entry
            })
            .collect())
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    fn persist(&mut self) {
        if self.store.is_none() {
            return;
        }
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.set(HISTORY_KEY, &json) {
                tracing::warn!(error = %e, "failed to persist history");
            }
        }
    }
}
