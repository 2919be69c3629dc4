//! Ledger engine: clock, persistence, services, and the [`LedgerManager`] facade.

pub mod clock;
pub mod ledger_manager;
pub mod persistence;
pub mod services;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ledger_manager::LedgerManager;
pub use persistence::{PersistFailureSink, RecordingSink, TracingSink, DEFAULT_STORAGE_KEY};
