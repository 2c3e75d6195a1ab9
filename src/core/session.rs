//! The single writer. A `Session` owns the in-memory store, the durable
//! blob store and the optional cloud mirror, and performs the save/mirror
//! fan-out after each mutation.
//!
//! Policy: local state is authoritative; the cloud is a best-effort mirror.
//! Cloud pushes that fail are captured in the audit log and never fail the
//! operation. A cloud pull replaces in-memory state outright (full refresh,
//! no merge); a failed pull leaves in-memory state untouched.

use std::path::Path;

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::{CloudConfig, Student, TardyRecord};
use crate::storage::audit::AuditLog;
use crate::storage::cloud::{CloudTables, RestCloud};
use crate::storage::local::LocalStore;

pub struct Session {
    store: RecordStore,
    local: LocalStore,
    audit: AuditLog,
    cloud_config: Option<CloudConfig>,
    cloud: Option<Box<dyn CloudTables>>,
}

impl Session {
    pub fn open(cfg: &Config) -> Self {
        Self::open_dir(Path::new(&cfg.storage_dir))
    }

    /// Load durable state from `dir` and latch the loaded gate. Only after
    /// this point may saves run, so a fresh start can never persist its
    /// initial empty state over prior data.
    pub fn open_dir(dir: &Path) -> Self {
        let local = LocalStore::new(dir);
        let audit = AuditLog::new(dir);

        let state = local.load_state();
        let mut store = RecordStore::new();
        store.replace_all(state.records, state.roster);
        store.mark_loaded();

        let cloud = state
            .cloud_config
            .as_ref()
            .and_then(|c| RestCloud::new(c).ok())
            .map(|c| Box::new(c) as Box<dyn CloudTables>);

        Self {
            store,
            local,
            audit,
            cloud_config: state.cloud_config,
            cloud,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn cloud_config(&self) -> Option<&CloudConfig> {
        self.cloud_config.as_ref()
    }

    /// Swap in a different cloud backend (used by tests).
    pub fn set_cloud_backend(&mut self, backend: Box<dyn CloudTables>) {
        self.cloud = Some(backend);
    }

    /// Gated save: a no-op until the first load has completed.
    fn persist(&self) -> AppResult<()> {
        if self.store.is_loaded() {
            self.local
                .save_state(self.store.records(), self.store.roster())?;
        }
        Ok(())
    }

    /// Record a tardy event: mutate, save, mirror best-effort.
    pub fn add_record(&mut self, student: &Student) -> AppResult<TardyRecord> {
        let record = self.store.add_record(student)?;
        self.persist()?;
        self.audit.append(
            "add",
            &record.effective_id(),
            &format!("tardy event for {} ({})", record.name, record.nis),
        );
        if let Some(cloud) = &self.cloud {
            if let Err(e) = cloud.upsert_record(&record) {
                self.audit
                    .append("cloud_upsert_failed", &record.effective_id(), &e.to_string());
            }
        }
        Ok(record)
    }

    /// Delete by id. A miss is treated as success (idempotent no-op). The
    /// cloud delete is attempted with the same id regardless, mirroring the
    /// local dual-identity contract.
    pub fn delete_record(&mut self, id: &str) -> AppResult<bool> {
        let removed = self.store.delete_record(id);
        self.persist()?;
        self.audit.append(
            "del",
            id,
            if removed { "record deleted" } else { "no match (no-op)" },
        );
        if let Some(cloud) = &self.cloud {
            if let Err(e) = cloud.delete_record(id) {
                self.audit.append("cloud_delete_failed", id, &e.to_string());
            }
        }
        Ok(removed)
    }

    /// Merge imported students into the roster and save.
    pub fn import_roster(&mut self, students: Vec<Student>) -> AppResult<usize> {
        let count = students.len();
        self.store.upsert_roster(students);
        self.persist()?;
        self.audit
            .append("import", "roster", &format!("merged {count} students"));
        Ok(count)
    }

    /// Replace both entities outright (backup restore).
    pub fn restore(&mut self, records: Vec<TardyRecord>, roster: Vec<Student>) -> AppResult<()> {
        self.store.replace_all(records, roster);
        self.persist()?;
        self.audit.append("restore", "state", "restored from backup");
        Ok(())
    }

    /// Set or clear the cloud configuration. Setting persists the config and
    /// triggers a full pull; clearing removes the persisted config and leaves
    /// in-memory state untouched.
    pub fn configure_cloud(&mut self, config: Option<CloudConfig>) -> AppResult<bool> {
        match config {
            Some(cfg) => {
                self.local.save_cloud_config(&cfg)?;
                self.cloud = Some(Box::new(RestCloud::new(&cfg)?));
                self.cloud_config = Some(cfg);
                self.audit.append("cloud", "config", "cloud mirroring enabled");
                Ok(self.pull_cloud()?)
            }
            None => {
                self.local.clear_cloud_config();
                self.cloud = None;
                self.cloud_config = None;
                self.audit.append("cloud", "config", "cloud mirroring disabled");
                Ok(false)
            }
        }
    }

    /// Full-refresh pull: fetch both tables and replace in-memory state.
    /// Each table is applied independently; a failed fetch is logged and the
    /// corresponding entity keeps its current value. Returns whether anything
    /// was refreshed.
    pub fn pull_cloud(&mut self) -> AppResult<bool> {
        let Some(cloud) = &self.cloud else {
            return Ok(false);
        };

        let mut refreshed = false;

        match cloud.fetch_students() {
            Ok(roster) => {
                self.store.replace_roster(roster);
                refreshed = true;
            }
            Err(e) => self
                .audit
                .append("cloud_pull_failed", "students", &e.to_string()),
        }

        match cloud.fetch_records() {
            Ok(records) => {
                self.store.replace_records(records);
                refreshed = true;
            }
            Err(e) => self
                .audit
                .append("cloud_pull_failed", "tardy_records", &e.to_string()),
        }

        if refreshed {
            self.persist()?;
        }
        Ok(refreshed)
    }
}
