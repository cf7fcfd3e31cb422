//! Coarse operating-system guess from vendor and port signature.

use sweepr_common::network::host::{OsGuess, Port};

/// iphone-sync, only ever open on iOS devices.
pub const IPHONE_SYNC_PORT: u16 = 62078;

const APPLE_VENDOR: &str = "Apple";

/// Guesses the OS of a host from its OUI vendor and its ports.
///
/// The vendor match is case-sensitive, matching how nmap prints vendor names.
pub fn infer_os(vendor: Option<&str>, ports: &[Port]) -> OsGuess {
    match vendor {
        Some(vendor) if vendor.contains(APPLE_VENDOR) => {
            let syncs = ports
                .iter()
                .any(|port| port.number == IPHONE_SYNC_PORT && port.is_open());
            if syncs { OsGuess::Ios } else { OsGuess::MacOs }
        }
        _ => OsGuess::Unknown,
    }
}
