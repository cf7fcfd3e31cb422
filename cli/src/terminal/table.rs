use colored::*;
use sweepr_common::network::host::Host;

use crate::terminal::{colors, format::{self, Cell}, print};

pub const HEADERS: [&str; 6] = [
    "Manufacturer",
    "OS type",
    "MAC Address",
    "IP Address",
    "Hostname",
    "Open ports",
];

const COLUMN_GAP: &str = " │ ";

fn column_widths(rows: &[Vec<Cell>]) -> Vec<usize> {
    HEADERS
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(Cell::width)
                .fold(header.len(), usize::max)
        })
        .collect()
}

fn pad(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

/// Formats hosts as aligned table lines: header, rule, then one line per host.
pub fn render(hosts: &[Host]) -> Vec<String> {
    let rows: Vec<Vec<Cell>> = hosts.iter().map(format::host_to_cells).collect();
    let widths: Vec<usize> = column_widths(&rows);
    let gap: String = COLUMN_GAP.color(colors::SEPARATOR).to_string();

    let header: String = HEADERS
        .iter()
        .zip(&widths)
        .map(|(title, width)| format!("{}{}", title.bold(), pad(*width, title.len())))
        .collect::<Vec<String>>()
        .join(gap.as_str());

    let rule: String = widths
        .iter()
        .map(|width| "─".repeat(*width))
        .collect::<Vec<String>>()
        .join("─┼─")
        .color(colors::SEPARATOR)
        .to_string();

    let mut lines: Vec<String> = vec![header.trim_end().to_string(), rule];
    for row in &rows {
        let line: String = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{}{}", cell.colored(), pad(*width, cell.width())))
            .collect::<Vec<String>>()
            .join(gap.as_str());
        lines.push(line.trim_end().to_string());
    }
    lines
}

pub fn print_hosts(hosts: &[Host]) {
    for line in render(hosts) {
        print::print(&line);
    }
}
