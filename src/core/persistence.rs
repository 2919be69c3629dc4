//! Write-through persistence of the ledger aggregate under a single key.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, warn};

use crate::errors::LedgerError;
use crate::ledger::LedgerState;
use crate::storage::KeyValueStore;

/// Key under which the whole aggregate is stored.
pub const DEFAULT_STORAGE_KEY: &str = "studentbudget_data";

/// Receives persistence failures that must not reach the ledger's callers.
pub trait PersistFailureSink: Send + Sync {
    fn report(&self, key: &str, err: &LedgerError);
}

/// Default sink: logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl PersistFailureSink for TracingSink {
    fn report(&self, key: &str, err: &LedgerError) {
        error!(key, error = %err, "failed to persist ledger state");
    }
}

/// Sink that keeps every reported failure message; handy for inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    failures: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures
            .lock()
            .map(|failures| failures.clone())
            .unwrap_or_default()
    }
}

impl PersistFailureSink for RecordingSink {
    fn report(&self, key: &str, err: &LedgerError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(format!("{key}: {err}"));
        }
    }
}

/// Reads the stored aggregate, falling back to defaults on any problem.
///
/// Never fails: absence, unreadable data, and unparseable payloads all yield the
/// first-run state, and salvageable payloads keep their valid parts.
pub fn load_state(store: &dyn KeyValueStore, key: &str) -> LedgerState {
    let Some(raw) = store.get(key) else {
        debug!(key, "no stored ledger, starting from defaults");
        return LedgerState::default();
    };
    match LedgerState::recover(&raw) {
        Ok(report) => {
            for warning in &report.warnings {
                warn!(key, "{warning}");
            }
            debug!(
                key,
                expenses = report.state.expenses.len(),
                categories = report.state.categories.len(),
                "restored ledger state"
            );
            report.state
        }
        Err(err) => {
            warn!(key, error = %err, "stored ledger unreadable, starting from defaults");
            LedgerState::default()
        }
    }
}

/// Observer that serializes and stores the aggregate after each mutation.
///
/// Writes happen synchronously in mutation order, so the last write always
/// reflects the latest state.
pub struct WriteThrough {
    store: Box<dyn KeyValueStore>,
    key: String,
    sink: Box<dyn PersistFailureSink>,
    failures: usize,
}

impl WriteThrough {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            sink: Box::new(TracingSink),
            failures: 0,
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn PersistFailureSink>) {
        self.sink = sink;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of writes that failed since the ledger was opened.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Persists `state`; failures are reported to the sink and swallowed.
    pub fn persist(&mut self, state: &LedgerState) -> bool {
        let outcome = state
            .to_json()
            .and_then(|payload| self.store.set(&self.key, &payload));
        match outcome {
            Ok(()) => true,
            Err(err) => {
                self.failures += 1;
                self.sink.report(&self.key, &err);
                false
            }
        }
    }
}
