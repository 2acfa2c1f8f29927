//! # Prefix Store
//!
//! Owns the durable, ordered collection of drill prefixes.
//!
//! The store is a single JSON document on disk, loaded once at open and
//! rewritten synchronously after every successful mutation. Records carry a
//! surrogate id that grows monotonically for the lifetime of the store and
//! is never reused after a delete. Prefix text is not validated on write;
//! the subnet calculator rejects malformed text at consumption time.
//!
//! Mutations and listing are lecturer-gated. Random selection is open, it
//! feeds the quiz path.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::access::{AdminGate, Unauthorized};

/// Starter prefixes for a fresh store: RFC1918 private ranges and RFC5737
/// documentation ranges, at prefix lengths from /8 down to /31.
const SEED_PREFIXES: &[&str] = &[
    "10.0.0.0/8",
    "10.10.0.0/16",
    "10.10.10.0/24",
    "10.10.10.128/25",
    "172.16.0.0/12",
    "172.16.0.0/19",
    "172.16.32.0/20",
    "172.16.48.0/21",
    "172.16.56.0/22",
    "172.16.60.0/23",
    "172.16.62.0/24",
    "172.16.62.128/25",
    "172.16.62.192/26",
    "192.168.0.0/16",
    "192.168.1.0/24",
    "192.168.1.128/25",
    "192.168.1.192/26",
    "192.168.1.224/27",
    "192.168.1.240/28",
    "192.168.1.248/29",
    "192.168.1.252/30",
    "192.168.1.254/31",
    "198.51.100.0/24",
    "198.51.100.0/26",
    "198.51.100.64/27",
    "198.51.100.96/28",
    "198.51.100.112/29",
    "198.51.100.120/30",
    "198.51.100.124/31",
    "203.0.113.0/24",
    "203.0.113.128/25",
    "203.0.113.192/26",
    "203.0.113.224/27",
    "203.0.113.240/28",
    "203.0.113.248/29",
    "203.0.113.252/30",
    "203.0.113.254/31",
];

/// One stored prefix. The id is assigned by the store and stable for the
/// record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRecord {
    pub id: u64,
    pub prefix: String,
}

/// On-disk shape of the store.
#[derive(Serialize, Deserialize)]
struct StoreDocument {
    next_id: u64,
    records: Vec<PrefixRecord>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Update or delete referenced an id that does not exist.
    #[error("no prefix record with id {id}")]
    NotFound { id: u64 },
    /// Insert or update was handed empty text.
    #[error("prefix text must not be empty")]
    EmptyPrefix,
    #[error(transparent)]
    Unauthorized(#[from] Unauthorized),
    #[error("prefix store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("prefix store document is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Durable, ordered prefix collection backed by one JSON document.
pub struct PrefixStore {
    path: PathBuf,
    next_id: u64,
    records: Vec<PrefixRecord>,
}

impl PrefixStore {
    /// Opens the store at `path`, creating and seeding it on first use.
    ///
    /// Seeding checks emptiness first: a store that already holds records
    /// is loaded as-is, a store with none receives the curated
    /// [`SEED_PREFIXES`] so the trainer is immediately usable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path: PathBuf = path.as_ref().to_path_buf();

        let mut store = if path.exists() {
            let text = fs::read_to_string(&path)?;
            let doc: StoreDocument = serde_json::from_str(&text)?;
            Self {
                path,
                next_id: doc.next_id,
                records: doc.records,
            }
        } else {
            Self {
                path,
                next_id: 1,
                records: Vec::new(),
            }
        };

        store.seed_if_empty()?;
        Ok(store)
    }

    fn seed_if_empty(&mut self) -> Result<(), StoreError> {
        if !self.records.is_empty() {
            return Ok(());
        }

        for prefix in SEED_PREFIXES {
            let id = self.next_id;
            self.next_id += 1;
            self.records.push(PrefixRecord {
                id,
                prefix: (*prefix).to_string(),
            });
        }
        self.persist()?;

        info!(count = SEED_PREFIXES.len(), "seeded empty prefix store");
        Ok(())
    }

    /// Appends a new record and returns its id. Lecturer-gated.
    ///
    /// The text is stored as given apart from trimming; format validation
    /// is deferred to the calculator.
    pub fn insert(&mut self, gate: &AdminGate, prefix: &str) -> Result<u64, StoreError> {
        gate.ensure_unlocked()?;

        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(StoreError::EmptyPrefix);
        }

        let id = self.next_id;
        self.records.push(PrefixRecord {
            id,
            prefix: prefix.to_string(),
        });
        self.next_id += 1;

        if let Err(err) = self.persist() {
            self.records.pop();
            self.next_id = id;
            return Err(err);
        }

        debug!(id, prefix, "inserted prefix record");
        Ok(id)
    }

    /// Replaces the text of an existing record. Lecturer-gated.
    pub fn update(&mut self, gate: &AdminGate, id: u64, new_prefix: &str) -> Result<(), StoreError> {
        gate.ensure_unlocked()?;

        let new_prefix = new_prefix.trim();
        if new_prefix.is_empty() {
            return Err(StoreError::EmptyPrefix);
        }

        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound { id })?;
        let previous: String = std::mem::replace(&mut record.prefix, new_prefix.to_string());

        if let Err(err) = self.persist() {
            if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
                record.prefix = previous;
            }
            return Err(err);
        }

        debug!(id, new_prefix, "updated prefix record");
        Ok(())
    }

    /// Removes a record. Remaining ids are not renumbered. Lecturer-gated.
    pub fn delete(&mut self, gate: &AdminGate, id: u64) -> Result<(), StoreError> {
        gate.ensure_unlocked()?;

        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound { id })?;
        let removed: PrefixRecord = self.records.remove(index);

        if let Err(err) = self.persist() {
            self.records.insert(index, removed);
            return Err(err);
        }

        debug!(id, "deleted prefix record");
        Ok(())
    }

    /// All records in ascending id order. Lecturer-gated.
    pub fn list_all(&self, gate: &AdminGate) -> Result<&[PrefixRecord], StoreError> {
        gate.ensure_unlocked()?;
        Ok(&self.records)
    }

    /// Uniformly random prefix text, resampled on every call.
    ///
    /// `None` iff the store holds no records, which is only reachable after
    /// every record has been deleted mid-session.
    pub fn random_pick(&self, rng: &mut impl Rng) -> Option<&str> {
        self.records.choose(rng).map(|record| record.prefix.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrites the whole document. Callers roll their in-memory change
    /// back when this fails, keeping mutations all-or-nothing.
    fn persist(&self) -> Result<(), StoreError> {
        let doc = StoreDocument {
            next_id: self.next_id,
            records: self.records.clone(),
        };
        let text = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
