//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions
//! - Tests

pub mod calc;
pub mod config;
pub mod convert;
pub mod history;
pub mod theme;
pub mod update;

pub use calc::execute_calc;
pub use config::execute_config;
pub use convert::{execute_bmi, execute_convert, execute_discount, execute_units};
pub use history::execute_history;
pub use theme::execute_theme;
pub use update::{execute_update_check, FileFeed};

use crate::config::CliConfig;
use crate::error::CliResult;
use flickers_core::calc::HistoryLedger;
use flickers_core::store::{FileStore, KeyValueStore, MemoryStore};

/// Opens the data file named by the configuration
pub fn open_store(config: &CliConfig) -> CliResult<FileStore> {
    Ok(FileStore::open(config.data_path())?)
}

/// Loads the history ledger.
///
/// An unreadable data file degrades to an in-memory ledger for this run.
#[must_use]
pub fn load_history(config: &CliConfig) -> HistoryLedger {
    let store: Box<dyn KeyValueStore> = match open_store(config) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                path = %config.data_path().display(),
                error = %e,
                "data file unavailable, history will not be saved"
            );
            Box::new(MemoryStore::new())
        }
    };
    HistoryLedger::load(store)
}
