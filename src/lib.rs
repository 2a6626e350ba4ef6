//! Android Compact Meminfo Library
//!
//! This library parses the "compact meminfo" section of an Android diagnostic
//! dump (the comma-separated output of `dumpsys meminfo -c`) into a report
//! keyed by pid, and serializes it into a JSON document for analysis tooling.
//!
//! # Features
//!
//! - **Best-Effort Parsing**: malformed lines are dropped, never fatal
//! - **Per-Process Facts**: PSS, swapped PSS, process type and activity flag
//! - **Lost RAM**: the single aggregate figure of unaccounted memory
//! - **Stable Document Shape**: `{ "processes": [...], "lostRam": <int> }`
//!
//! # Usage
//!
//! ```rust
//! use android_meminfo::{CompactMemInfoParser, MemInfoError};
//!
//! let input = [
//!     "oom,cached,141357",
//!     "proc,cached,com.google.android.youtube,2964,19345,N/A,e",
//!     "proc,cached,com.google.android.apps.plus,2877,9604,50,e",
//!     "lostram,1005",
//! ];
//!
//! let report = CompactMemInfoParser::new().parse(input);
//!
//! assert_eq!(report.process_ids().len(), 2);
//! assert_eq!(report.swap_of(2877), Ok(50));
//! assert_eq!(report.name_of(1), Err(MemInfoError::UnknownPid(1)));
//!
//! let doc = report.to_document();
//! assert_eq!(doc.processes.len(), 2);
//! assert_eq!(doc.lost_ram, 1005);
//! ```

pub mod error;
pub mod parser;
pub mod report;

// Re-export main types for convenience
pub use error::{MemInfoError, Result};
pub use parser::CompactMemInfoParser;
pub use report::{MemInfoReport, ProcessMemoryRecord, ReportDocument};
