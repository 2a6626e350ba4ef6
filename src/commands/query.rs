//! Query command implementation.
//!
//! Prints the recorded fields of one process.

use std::path::Path;

use android_meminfo::{CompactMemInfoParser, MemInfoReport};

use crate::input::read_input;

/// Formats the fields recorded for `pid`, failing if the pid is absent.
pub fn describe_process(
    report: &MemInfoReport,
    pid: u32,
) -> Result<String, android_meminfo::MemInfoError> {
    Ok(format!(
        "PID {}: {}\n   ├─ Type: {}\n   ├─ PSS: {} kB\n   ├─ Swap PSS: {} kB\n   └─ Activities: {}",
        pid,
        report.name_of(pid)?,
        report.type_of(pid)?,
        report.pss_of(pid)?,
        report.swap_of(pid)?,
        if report.has_activities_of(pid)? { "yes" } else { "no" },
    ))
}

/// Parses the input and prints one process.
pub fn command_query(input: Option<&Path>, pid: u32) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let report = CompactMemInfoParser::new().parse_str(&text);

    match describe_process(&report, pid) {
        Ok(description) => {
            println!("{description}");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {} ({} processes recorded)", e, report.len());
            std::process::exit(1);
        }
    }
}
