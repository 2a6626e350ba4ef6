//! Error types for the compact meminfo library.
//!
//! Parsing itself never fails: a malformed line is dropped and the scan
//! continues. The only error a caller can observe is a query against a pid
//! that the report does not contain.

/// Errors returned by [`MemInfoReport`](crate::MemInfoReport) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemInfoError {
    #[error("no process with pid {0} in meminfo report")]
    UnknownPid(u32),
}

/// Convenience alias used by the report accessors.
pub type Result<T> = std::result::Result<T, MemInfoError>;

/// Reason a compact meminfo line was discarded.
///
/// Only used for diagnostics; callers of the parser never see it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum MalformedLine {
    #[error("{tag} line has {found} fields")]
    FieldCount { tag: &'static str, found: usize },

    #[error("invalid pid {0:?}")]
    Pid(String),

    #[error("invalid pss {0:?}")]
    Pss(String),

    #[error("invalid swap pss {0:?}")]
    Swap(String),

    #[error("invalid lostram value {0:?}")]
    LostRam(String),
}
