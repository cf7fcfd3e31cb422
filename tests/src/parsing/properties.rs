use sweepr_common::network::host::UNKNOWN_HOSTNAME;
use sweepr_core::{os::infer_os, parser::{extract, parse_report, split_lines}};

#[test]
fn parsing_twice_gives_equal_hosts() {
    assert_eq!(parse_report(crate::HOME_LAN), parse_report(crate::HOME_LAN));
}

#[test]
fn hosts_follow_boundary_order() {
    let boundary_ips: Vec<&str> = split_lines(crate::HOME_LAN)
        .filter(|line| line.contains("scan report"))
        .filter_map(extract::ipv4)
        .collect();

    let parsed_ips: Vec<String> = parse_report(crate::HOME_LAN)
        .iter()
        .map(|host| host.ip_address().to_string())
        .collect();

    assert_eq!(parsed_ips, boundary_ips);
}

#[test]
fn ports_follow_line_order() {
    let report = "\
Nmap scan report for 10.0.0.2
PORT     STATE    SERVICE
8080/tcp open     http-proxy
21/tcp   closed   ftp
443/tcp  filtered https
22/tcp   open     ssh
MAC Address: 00:11:22:33:44:55 (Raspberry Pi Trading)
";
    let numbers: Vec<u16> = parse_report(report)[0].ports().iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![8080, 21, 443, 22]);
}

#[test]
fn hostname_is_never_empty() {
    for host in parse_report(crate::HOME_LAN) {
        assert!(!host.hostname().is_empty());
        if !host.hostname().ends_with(".lan") {
            assert_eq!(host.hostname(), UNKNOWN_HOSTNAME);
        }
    }
}

#[test]
fn os_guess_depends_only_on_vendor_and_ports() {
    for host in parse_report(crate::HOME_LAN) {
        assert_eq!(host.os_guess(), infer_os(host.vendor(), host.ports()));
    }
}
