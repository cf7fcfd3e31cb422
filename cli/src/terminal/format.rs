use colored::*;
use sweepr_common::network::host::{Host, OsGuess, UNKNOWN_HOSTNAME};

use crate::terminal::colors;

const MISSING: &str = "-";

/// A table cell: the plain text used for width calculation and its color.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Color,
}

impl Cell {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    fn optional(value: Option<&str>, color: Color) -> Self {
        match value {
            Some(text) => Self::new(text, color),
            None => Self::new(MISSING, colors::MISSING),
        }
    }

    pub fn width(&self) -> usize {
        console::measure_text_width(&self.text)
    }

    pub fn colored(&self) -> ColoredString {
        self.text.color(self.color)
    }
}

pub fn os_color(os: OsGuess) -> Color {
    match os {
        OsGuess::Ios | OsGuess::MacOs => colors::OS_APPLE,
        OsGuess::Unknown => colors::OS_UNKNOWN,
    }
}

/// Open port numbers joined the way the table shows them, e.g. `22, 80`.
pub fn open_ports_text(host: &Host) -> Option<String> {
    let ports: Vec<String> = host.open_ports().map(|port| port.number.to_string()).collect();
    (!ports.is_empty()).then(|| ports.join(", "))
}

/// Cells in table column order.
pub fn host_to_cells(host: &Host) -> Vec<Cell> {
    let hostname: Cell = if host.hostname() == UNKNOWN_HOSTNAME {
        Cell::new(host.hostname(), colors::MISSING)
    } else {
        Cell::new(host.hostname(), colors::PRIMARY)
    };

    vec![
        Cell::optional(host.vendor(), colors::VENDOR),
        Cell::new(host.os_guess().to_string(), os_color(host.os_guess())),
        Cell::optional(host.mac_address(), colors::MAC_ADDR),
        Cell::new(host.ip_address(), colors::IPV4_ADDR),
        hostname,
        Cell::optional(open_ports_text(host).as_deref(), colors::PORTS),
    ]
}
