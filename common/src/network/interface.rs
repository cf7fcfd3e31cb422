use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use tracing::debug;

use crate::error::ScanError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// Loopback never reaches other devices.
    IsLoopback,
    /// The interface does not have a MAC address.
    NoMacAddress,
    /// The interface does not support broadcast.
    NotBroadcast,
    /// The interface is a point-to-point link (e.g., a VPN).
    IsPointToPoint,
    /// The interface has no private IPv4 address to derive a subnet from.
    NoPrivateIpv4,
}

/// Finds the LAN subnet of this machine, as `address/prefix`.
///
/// The address part is the host's own address; nmap masks it with the prefix
/// before scanning.
pub fn get_lan_network() -> Result<Ipv4Network, ScanError> {
    let interface: NetworkInterface = select_lan_interface(datalink::interfaces())?;
    debug!("selected interface {} for discovery", interface.name);

    private_ipv4_net(&interface).ok_or(ScanError::NoLanNetwork(interface.name))
}

fn select_lan_interface(interfaces: Vec<NetworkInterface>) -> Result<NetworkInterface, ScanError> {
    interfaces
        .into_iter()
        .find(|interface| match is_viable_lan_interface(interface) {
            Ok(()) => true,
            Err(reason) => {
                debug!("skipping interface {}: {:?}", interface.name, reason);
                false
            }
        })
        .ok_or(ScanError::NoLanInterface)
}

fn is_viable_lan_interface(interface: &NetworkInterface) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if interface.mac.is_none() {
        return Err(ViabilityError::NoMacAddress);
    }
    if !interface.is_broadcast() {
        return Err(ViabilityError::NotBroadcast);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if private_ipv4_net(interface).is_none() {
        return Err(ViabilityError::NoPrivateIpv4);
    }

    Ok(())
}

fn private_ipv4_net(interface: &NetworkInterface) -> Option<Ipv4Network> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) if v4.ip().is_private() => Some(*v4),
        _ => None,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
