//! Turns the plaintext report of a discovery scan into [`Host`] records.
//!
//! The report is read once, line by line. [`extract`] holds the per-line
//! pattern matchers and [`machine`] the state machine that decides which
//! lines open a host, which belong to its port table and which close it.
//!
//! Parsing is best effort: lines that do not fit are skipped, absent fields
//! fall back to defaults, and input without any host yields an empty list.

use sweepr_common::network::host::Host;

pub mod extract;
mod machine;

pub use machine::{Phase, ReportParser};

/// Splits a raw report into its lines, keeping order and content.
///
/// Only the line terminator (`\n` or `\r\n`) is removed.
pub fn split_lines(report: &str) -> impl Iterator<Item = &str> {
    report.lines()
}

/// Parses a complete report into hosts, in the order they were reported.
pub fn parse_report(report: &str) -> Vec<Host> {
    let mut parser = ReportParser::new();
    for line in split_lines(report) {
        parser.feed(line);
    }
    parser.finish()
}
