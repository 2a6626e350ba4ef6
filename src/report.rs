//! In-memory model of a parsed compact meminfo section.
//!
//! A [`MemInfoReport`] holds one [`ProcessMemoryRecord`] per pid plus the
//! single "lost RAM" figure. Reports are only populated by the parser; once
//! handed back to the caller they are read-only.
//!
//! # Usage
//!
//! ```rust
//! use android_meminfo::CompactMemInfoParser;
//!
//! let report = CompactMemInfoParser::new().parse([
//!     "proc,cached,com.google.android.youtube,2964,19345,1005,e",
//!     "lostram,1005",
//! ]);
//!
//! assert_eq!(report.pss_of(2964).unwrap(), 19345);
//! assert_eq!(report.lost_ram(), 1005);
//!
//! let json = report.to_json_value().unwrap();
//! assert_eq!(json["processes"].as_array().unwrap().len(), 1);
//! ```

use ahash::{AHashMap as HashMap, AHashSet as HashSet};
use serde::{Deserialize, Serialize};

use crate::error::{MemInfoError, Result};

/// Memory facts for a single process, as reported on one `proc` line.
///
/// Serializes with the field names expected by downstream consumers:
/// `pid`, `name`, `type`, `pss`, `swapPss`, `hasActivities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMemoryRecord {
    pub(crate) pid: u32,
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) process_type: String,
    pub(crate) pss: u64,
    pub(crate) swap_pss: u64,
    pub(crate) has_activities: bool,
}

impl ProcessMemoryRecord {
    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification label from the report, e.g. `cached` or `fore`.
    pub fn process_type(&self) -> &str {
        &self.process_type
    }

    /// Proportional set size in kilobytes.
    pub fn pss_kb(&self) -> u64 {
        self.pss
    }

    /// Swapped PSS in kilobytes; 0 when the report omitted it or wrote `N/A`.
    pub fn swap_pss_kb(&self) -> u64 {
        self.swap_pss
    }

    pub fn has_activities(&self) -> bool {
        self.has_activities
    }
}

/// Serializable snapshot of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub processes: Vec<ProcessMemoryRecord>,
    #[serde(rename = "lostRam")]
    pub lost_ram: u64,
}

/// Parsed compact meminfo section, keyed by pid.
///
/// Records are kept in the order their pid was first seen. A later line for
/// the same pid replaces the record in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemInfoReport {
    records: Vec<ProcessMemoryRecord>,
    index: HashMap<u32, usize>,
    lost_ram: u64,
}

impl MemInfoReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, overwriting any earlier record with the same pid.
    pub(crate) fn upsert_process(&mut self, record: ProcessMemoryRecord) {
        match self.index.get(&record.pid) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(record.pid, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub(crate) fn set_lost_ram(&mut self, kb: u64) {
        self.lost_ram = kb;
    }

    /// All pids present in the report.
    pub fn process_ids(&self) -> HashSet<u32> {
        self.index.keys().copied().collect()
    }

    /// Looks up the record for `pid`.
    pub fn get(&self, pid: u32) -> Option<&ProcessMemoryRecord> {
        self.index.get(&pid).map(|&slot| &self.records[slot])
    }

    fn record(&self, pid: u32) -> Result<&ProcessMemoryRecord> {
        self.get(pid).ok_or(MemInfoError::UnknownPid(pid))
    }

    pub fn name_of(&self, pid: u32) -> Result<&str> {
        self.record(pid).map(ProcessMemoryRecord::name)
    }

    pub fn pss_of(&self, pid: u32) -> Result<u64> {
        self.record(pid).map(ProcessMemoryRecord::pss_kb)
    }

    pub fn swap_of(&self, pid: u32) -> Result<u64> {
        self.record(pid).map(ProcessMemoryRecord::swap_pss_kb)
    }

    pub fn type_of(&self, pid: u32) -> Result<&str> {
        self.record(pid).map(ProcessMemoryRecord::process_type)
    }

    pub fn has_activities_of(&self, pid: u32) -> Result<bool> {
        self.record(pid).map(ProcessMemoryRecord::has_activities)
    }

    /// Lost RAM in kilobytes, 0 if the input had no valid `lostram` line.
    pub fn lost_ram(&self) -> u64 {
        self.lost_ram
    }

    /// Iterates records in document order.
    pub fn processes(&self) -> impl Iterator<Item = &ProcessMemoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds the `{ processes, lostRam }` document for this report.
    pub fn to_document(&self) -> ReportDocument {
        ReportDocument {
            processes: self.records.clone(),
            lost_ram: self.lost_ram,
        }
    }

    /// Same as [`to_document`](Self::to_document), as a `serde_json::Value`.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.to_document())
    }

    /// Encodes the document as JSON text.
    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        let doc = self.to_document();
        if pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        }
    }
}
