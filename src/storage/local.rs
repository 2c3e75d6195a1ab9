//! Durable local state: a key→string blob store, one JSON file per key.
//!
//! Loading never fails outward: a missing or corrupt blob yields that
//! entity's empty default, the same contract the app has always had for its
//! local storage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;
use crate::models::{CloudConfig, Student, TardyRecord};

pub const KEY_RECORDS: &str = "tardyRecords";
pub const KEY_ROSTER: &str = "masterStudentList";
pub const KEY_CLOUD: &str = "cloudConfig";

/// Everything the local store knows after a load.
#[derive(Debug, Default)]
pub struct PersistedState {
    pub records: Vec<TardyRecord>,
    pub roster: Vec<Student>,
    pub cloud_config: Option<CloudConfig>,
}

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw read of one blob. Absent file → None.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Raw write of one blob.
    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Remove one blob. Absent file is not an error.
    pub fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.key_path(key));
    }

    fn parse_or_default<T: Default + serde::de::DeserializeOwned>(&self, key: &str) -> T {
        self.get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Deserialize the three state blobs. Parse failures are swallowed and
    /// treated as "no prior state".
    pub fn load_state(&self) -> PersistedState {
        PersistedState {
            records: self.parse_or_default(KEY_RECORDS),
            roster: self.parse_or_default(KEY_ROSTER),
            cloud_config: self
                .get(KEY_CLOUD)
                .and_then(|raw| serde_json::from_str(&raw).ok()),
        }
    }

    /// Serialize and persist both state blobs together.
    pub fn save_state(&self, records: &[TardyRecord], roster: &[Student]) -> AppResult<()> {
        self.set(KEY_RECORDS, &serde_json::to_string(records)?)?;
        self.set(KEY_ROSTER, &serde_json::to_string(roster)?)?;
        Ok(())
    }

    pub fn save_cloud_config(&self, config: &CloudConfig) -> AppResult<()> {
        self.set(KEY_CLOUD, &serde_json::to_string(config)?)
    }

    pub fn clear_cloud_config(&self) {
        self.remove(KEY_CLOUD);
    }
}
