use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const DATA_DIR: &str = "data";
const HOME_ENV: &str = "EXPENSE_CORE_HOME";

/// Returns the application data directory, defaulting to `~/.expense_core`.
///
/// `EXPENSE_CORE_HOME` overrides the location.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the persisted ledger documents under `base`.
pub fn data_dir_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_nests_under_base() {
        let base = PathBuf::from("/tmp/expense-home");
        assert_eq!(data_dir_in(&base), base.join("data"));
    }
}
