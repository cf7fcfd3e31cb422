//! Single-line field extractors.
//!
//! Every extractor looks for the *first* occurrence of its field in the line
//! (the vendor spans to the last closing parenthesis) and returns `None` when
//! there is none. None of them validates the whole line.

use once_cell::sync::Lazy;
use regex::Regex;
use sweepr_common::network::host::{Port, PortState};

/// Marker carried by every line that opens a host record.
pub const BOUNDARY_MARKER: &str = "scan report";
/// Token of the header line printed right before a port table.
pub const PORT_HEADER_TOKEN: &str = "PORT";
/// Token of the line closing a host record.
pub const TRAILER_TOKEN: &str = "MAC";

static IPV4_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}").expect("valid IPv4 pattern"));

static MAC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}").expect("valid MAC pattern"));

static VENDOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*)\)").expect("valid vendor pattern"));

static HOSTNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"scan report for\s+([A-Za-z0-9][A-Za-z0-9._-]*)\s+\(").expect("valid hostname pattern")
});

static STATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(open|closed|filtered)\b").expect("valid port state pattern"));

/// First dotted quad in the line. Octet ranges are not checked.
pub fn ipv4(line: &str) -> Option<&str> {
    IPV4_RE.find(line).map(|m| m.as_str())
}

/// First six colon-separated hex pairs in the line.
pub fn mac(line: &str) -> Option<&str> {
    MAC_RE.find(line).map(|m| m.as_str())
}

/// Everything between the first `(` and the last `)` of the line, verbatim.
///
/// Spanning to the last parenthesis keeps nested names such as
/// `Hon Hai Precision Ind. Co.(Foxconn)` whole.
pub fn vendor(line: &str) -> Option<&str> {
    VENDOR_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|vendor| !vendor.is_empty())
}

/// DNS-like name on a boundary line of the form `... for <name> (<ip>)`.
///
/// A bare address after the marker is not a hostname.
pub fn hostname(line: &str) -> Option<&str> {
    let name = HOSTNAME_RE.captures(line)?.get(1)?.as_str();
    let name = name.trim_end_matches('.');

    let is_address = IPV4_RE.find(name).is_some_and(|m| m.as_str() == name);
    (!name.is_empty() && !is_address).then_some(name)
}

/// A port table row such as `22/tcp  open  ssh`.
///
/// The first token must be `<number>/<protocol>` and a state keyword must be
/// present somewhere in the line.
pub fn port(line: &str) -> Option<Port> {
    let state = STATE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| PortState::from_keyword(m.as_str()))?;

    let token = line.split_whitespace().next()?;
    let (number, protocol) = token.split_once('/')?;
    let number: u16 = number.parse().ok()?;

    if protocol.is_empty() || !protocol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(Port::new(number, protocol, state))
}

pub fn is_boundary(line: &str) -> bool {
    line.contains(BOUNDARY_MARKER) && ipv4(line).is_some()
}

pub fn is_port_header(line: &str) -> bool {
    line.contains(PORT_HEADER_TOKEN)
}

pub fn is_trailer(line: &str) -> bool {
    line.contains(TRAILER_TOKEN)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
