#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps a local ledger of spending events, user categories, and a
//! monthly budget, persisting the whole aggregate to a key-value store after every
//! change and deriving monthly totals and budget status from it.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::LedgerManager;
pub use crate::errors::LedgerError;

use crate::config::Config;
use crate::storage::JsonFileStore;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
///
/// The startup log is emitted once per process even when a subscriber was
/// installed beforehand.
pub fn init(config: &Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(config.log_filter.as_deref());
        let build = utils::build_info::current();
        tracing::info!(build = %build.label(), "Expense Core tracing initialized.");
    });
}

/// Opens the ledger described by `config` on a [`JsonFileStore`].
///
/// Fails only when the data directory cannot be created; a missing or corrupt
/// stored ledger still opens, with defaults filling the gaps.
pub fn open_ledger(config: &Config) -> Result<LedgerManager, LedgerError> {
    let store = JsonFileStore::new(config.resolve_data_dir())?;
    Ok(LedgerManager::open_with_key(store, &config.storage_key))
}
