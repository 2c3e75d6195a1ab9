//! Remote table backend: a narrow capability trait plus a PostgREST-style
//! implementation over two tables, `students` and `tardy_records`.
//!
//! The cloud is a best-effort mirror, never a source of truth with conflict
//! resolution: callers pull the full tables and replace local state, and push
//! single-row upserts/deletes after local mutations.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::errors::{AppError, AppResult};
use crate::models::record::decompose_fallback_id;
use crate::models::{CloudConfig, Student, TardyRecord};

pub const STUDENTS_TABLE: &str = "students";
pub const RECORDS_TABLE: &str = "tardy_records";

/// Operations the core needs from a remote table store.
pub trait CloudTables {
    fn fetch_students(&self) -> AppResult<Vec<Student>>;
    /// Full record table, newest timestamp first.
    fn fetch_records(&self) -> AppResult<Vec<TardyRecord>>;
    fn upsert_record(&self, record: &TardyRecord) -> AppResult<()>;
    /// Delete matched by real id, or by nis+timestamp when `id` is a
    /// fallback identity.
    fn delete_record(&self, id: &str) -> AppResult<()>;
}

pub struct RestCloud {
    base_url: String,
    key: String,
    client: Client,
}

impl RestCloud {
    pub fn new(config: &CloudConfig) -> AppResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
            client,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        req.header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
    }

    fn check(resp: reqwest::blocking::Response, what: &str) -> AppResult<()> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(AppError::Cloud(format!(
                "{} failed with status {}",
                what,
                resp.status()
            )))
        }
    }
}

impl CloudTables for RestCloud {
    fn fetch_students(&self) -> AppResult<Vec<Student>> {
        let resp = self
            .authed(self.client.get(self.table_url(STUDENTS_TABLE)))
            .query(&[("select", "*")])
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    fn fetch_records(&self) -> AppResult<Vec<TardyRecord>> {
        let resp = self
            .authed(self.client.get(self.table_url(RECORDS_TABLE)))
            .query(&[("select", "*"), ("order", "timestamp.desc")])
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    fn upsert_record(&self, record: &TardyRecord) -> AppResult<()> {
        let resp = self
            .authed(self.client.post(self.table_url(RECORDS_TABLE)))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[record])
            .send()?;
        Self::check(resp, "record upsert")
    }

    fn delete_record(&self, id: &str) -> AppResult<()> {
        let req = if let Some((nis, timestamp)) = decompose_fallback_id(id) {
            self.client.delete(self.table_url(RECORDS_TABLE)).query(&[
                ("nis", format!("eq.{nis}")),
                ("timestamp", format!("eq.{timestamp}")),
            ])
        } else {
            self.client
                .delete(self.table_url(RECORDS_TABLE))
                .query(&[("id", format!("eq.{id}"))])
        };
        let resp = self.authed(req).send()?;
        Self::check(resp, "record delete")
    }
}
