#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use expense_core::{
    core::{LedgerManager, ManualClock, RecordingSink},
    storage::{JsonFileStore, MemoryStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Ledger over a shared in-memory store, with a controllable clock and a recording sink.
pub struct Harness {
    pub manager: LedgerManager,
    pub store: MemoryStore,
    pub clock: Arc<ManualClock>,
    pub sink: RecordingSink,
}

pub fn memory_harness() -> Harness {
    harness_over(MemoryStore::new())
}

pub fn harness_over(store: MemoryStore) -> Harness {
    let clock = Arc::new(ManualClock::new(instant(2024, 3, 15, 9)));
    let sink = RecordingSink::new();
    let manager = LedgerManager::open(store.clone())
        .with_clock(clock.clone())
        .with_failure_sink(sink.clone());
    Harness {
        manager,
        store,
        clock,
        sink,
    }
}

pub fn file_store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(dir.join("data")).expect("create json file store")
}
