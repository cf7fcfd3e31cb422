use sweepr_common::network::host::{Host, OsGuess, PortState, UNKNOWN_HOSTNAME};
use sweepr_core::parser::parse_report;

fn ports_of(host: &Host) -> Vec<(u16, PortState)> {
    host.ports().iter().map(|port| (port.number, port.state)).collect()
}

#[test]
fn apple_host_without_sync_port_is_macos() {
    let report = "\
Nmap scan report for 192.168.1.10
Host is up (0.0050s latency).
PORT   STATE SERVICE
22/tcp open ssh
MAC Address: AA:BB:CC:DD:EE:FF (Apple)
";
    let hosts = parse_report(report);

    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].ip_address(), "192.168.1.10");
    assert_eq!(ports_of(&hosts[0]), vec![(22, PortState::Open)]);
    assert_eq!(hosts[0].os_guess(), OsGuess::MacOs);
}

#[test]
fn apple_host_with_sync_port_is_ios() {
    let report = "\
Nmap scan report for 192.168.1.10
Host is up (0.0050s latency).
PORT      STATE SERVICE
22/tcp    open  ssh
62078/tcp open
MAC Address: AA:BB:CC:DD:EE:FF (Apple)
";
    let hosts = parse_report(report);

    assert_eq!(ports_of(&hosts[0]), vec![(22, PortState::Open), (62078, PortState::Open)]);
    assert_eq!(hosts[0].os_guess(), OsGuess::Ios);
}

#[test]
fn non_apple_vendor_is_unknown() {
    let report = "\
Nmap scan report for 192.168.1.12
PORT      STATE SERVICE
62078/tcp open  iphone-sync
MAC Address: 00:14:22:AA:BB:CC (Dell Inc.)
";
    let hosts = parse_report(report);

    assert_eq!(hosts[0].vendor(), Some("Dell Inc."));
    assert_eq!(hosts[0].os_guess(), OsGuess::Unknown);
}

#[test]
fn host_without_port_header_has_no_ports() {
    let report = "\
Nmap scan report for 192.168.1.13
Host is up (0.0061s latency).
Nmap scan report for 192.168.1.14
Host is up (0.0070s latency).
";
    let hosts = parse_report(report);

    assert_eq!(hosts.len(), 2);
    assert!(hosts.iter().all(|host| host.ports().is_empty()));
}

#[test]
fn scanning_machine_without_trailer_is_kept() {
    let report = "\
Nmap scan report for 192.168.1.20
PORT   STATE SERVICE
80/tcp open  http
MAC Address: 10:20:30:40:50:60 (Netgear)

Nmap scan report for 192.168.1.5
Host is up (0.00011s latency).
PORT     STATE SERVICE
22/tcp   open  ssh

Nmap done: 256 IP addresses (2 hosts up) scanned in 2.05 seconds
";
    let hosts = parse_report(report);

    assert_eq!(hosts.len(), 2);
    let local = &hosts[1];
    assert_eq!(local.ip_address(), "192.168.1.5");
    assert_eq!(local.mac_address(), None);
    assert_eq!(local.vendor(), None);
    assert_eq!(local.os_guess(), OsGuess::Unknown);
    assert_eq!(ports_of(local), vec![(22, PortState::Open)]);
}

#[test]
fn windows_line_endings_are_handled() {
    let report = "Nmap scan report for 192.168.1.10\r\nPORT   STATE SERVICE\r\n22/tcp open ssh\r\nMAC Address: AA:BB:CC:DD:EE:FF (Apple)\r\n";
    let hosts = parse_report(report);

    assert_eq!(hosts[0].vendor(), Some("Apple"));
    assert_eq!(hosts[0].os_guess(), OsGuess::MacOs);
}

#[test]
fn home_lan_report() {
    let hosts = parse_report(crate::HOME_LAN);

    let summary: Vec<(&str, &str, OsGuess)> = hosts
        .iter()
        .map(|host| (host.ip_address(), host.hostname(), host.os_guess()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("192.168.1.1", "router.lan", OsGuess::Unknown),
            ("192.168.1.20", UNKNOWN_HOSTNAME, OsGuess::MacOs),
            ("192.168.1.31", "iphone.lan", OsGuess::Ios),
            ("192.168.1.40", UNKNOWN_HOSTNAME, OsGuess::Unknown),
            ("192.168.1.5", "workstation.lan", OsGuess::Unknown),
        ]
    );

    assert_eq!(
        ports_of(&hosts[1]),
        vec![(22, PortState::Open), (3283, PortState::Filtered), (5900, PortState::Open)]
    );
    assert_eq!(hosts[3].mac_address(), Some("00:14:22:AA:BB:CC"));
    assert!(hosts[3].ports().is_empty());
}
