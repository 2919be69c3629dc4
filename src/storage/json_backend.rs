use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::errors::Result;

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed store keeping one JSON document per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(key), FILE_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => Some(data),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored value");
                None
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn canonical_name(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "ledger".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension(format!("{}.{}", FILE_EXTENSION, TMP_SUFFIX));
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_then_get_roundtrips_and_leaves_no_tmp_file() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("data")).expect("store");
        store.set("studentbudget_data", "{\"expenses\":[]}").unwrap();

        assert_eq!(
            store.get("studentbudget_data").as_deref(),
            Some("{\"expenses\":[]}")
        );
        let path = store.path_for("studentbudget_data");
        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
        let path = store.path_for("My Ledger/../x");
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("my_ledger____x.json")
        );
        assert_eq!(
            store.path_for("   ").file_name().and_then(|n| n.to_str()),
            Some("ledger.json")
        );
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
        assert!(store.get("nothing-here").is_none());
    }

    #[test]
    fn unreadable_entry_reads_as_none() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
        fs::create_dir_all(store.path_for("a-directory")).unwrap();
        assert!(store.get("a-directory").is_none());
    }
}
