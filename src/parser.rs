//! Line parser for the compact meminfo section of an Android dump.
//!
//! Each line is a comma-separated record whose first field is a tag. Two tags
//! contribute to the report:
//!
//! - `proc,<type>,<name>,<pid>,<pss>[,<swap>],<activity flag>`
//! - `lostram,<kb>`
//!
//! Every other tag (`oom`, `cat`, `ram`, `time`, ...) is ignored. A line that
//! fails validation is dropped without affecting the rest of the parse.

use tracing::{debug, trace};

use crate::error::MalformedLine;
use crate::report::{MemInfoReport, ProcessMemoryRecord};

pub const PROC_TAG: &str = "proc";
pub const LOST_RAM_TAG: &str = "lostram";

/// Activity flag value meaning the process hosts at least one activity.
pub const HAS_ACTIVITIES_MARKER: &str = "a";

/// Placeholder written in the swap column when swap accounting is unavailable.
pub const SWAP_NOT_AVAILABLE: &str = "N/A";

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind {
    Process(ProcessMemoryRecord),
    LostRam(u64),
    Ignored,
    Malformed(MalformedLine),
}

/// Best-effort parser for compact meminfo lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactMemInfoParser;

impl CompactMemInfoParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses an ordered sequence of lines into a report.
    ///
    /// Never fails. Malformed lines are skipped and logged at debug level.
    pub fn parse<I, S>(&self, lines: I) -> MemInfoReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = MemInfoReport::new();

        for (lineno, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match classify_line(line) {
                LineKind::Process(record) => report.upsert_process(record),
                LineKind::LostRam(kb) => report.set_lost_ram(kb),
                LineKind::Ignored => trace!(lineno = lineno + 1, "ignoring line: {}", line),
                LineKind::Malformed(reason) => {
                    debug!(lineno = lineno + 1, "dropping malformed line ({}): {}", reason, line)
                }
            }
        }

        debug!(
            processes = report.len(),
            lost_ram = report.lost_ram(),
            "compact meminfo parsed"
        );
        report
    }

    /// Parses a block of text, one record per line (`\n` or `\r\n`).
    pub fn parse_str(&self, text: &str) -> MemInfoReport {
        self.parse(text.lines())
    }
}

/// Splits on commas, dropping trailing empty fields.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

pub(crate) fn classify_line(line: &str) -> LineKind {
    let fields = split_fields(line);
    let result = match fields.first() {
        Some(&PROC_TAG) => parse_proc(&fields).map(LineKind::Process),
        Some(&LOST_RAM_TAG) => parse_lost_ram(&fields).map(LineKind::LostRam),
        _ => Ok(LineKind::Ignored),
    };
    result.unwrap_or_else(LineKind::Malformed)
}

fn parse_proc(fields: &[&str]) -> Result<ProcessMemoryRecord, MalformedLine> {
    let (swap, flag) = match fields.len() {
        7 => (Some(fields[5]), fields[6]),
        6 => (None, fields[5]),
        found => {
            return Err(MalformedLine::FieldCount {
                tag: PROC_TAG,
                found,
            })
        }
    };

    let pid: u32 = fields[3]
        .parse()
        .map_err(|_| MalformedLine::Pid(fields[3].to_string()))?;
    let pss: u64 = fields[4]
        .parse()
        .map_err(|_| MalformedLine::Pss(fields[4].to_string()))?;
    let swap_pss = match swap {
        None | Some(SWAP_NOT_AVAILABLE) => 0,
        Some(v) => v.parse().map_err(|_| MalformedLine::Swap(v.to_string()))?,
    };

    Ok(ProcessMemoryRecord {
        pid,
        name: fields[2].to_string(),
        process_type: fields[1].to_string(),
        pss,
        swap_pss,
        has_activities: flag == HAS_ACTIVITIES_MARKER,
    })
}

fn parse_lost_ram(fields: &[&str]) -> Result<u64, MalformedLine> {
    if fields.len() != 2 {
        return Err(MalformedLine::FieldCount {
            tag: LOST_RAM_TAG,
            found: fields.len(),
        });
    }
    fields[1]
        .parse()
        .map_err(|_| MalformedLine::LostRam(fields[1].to_string()))
}
