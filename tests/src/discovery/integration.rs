use async_trait::async_trait;
use pnet::ipnetwork::Ipv4Network;
use sweepr_common::error::ScanError;
use sweepr_core::scanner::{self, ReportSource};

/// Hands back a fixed report instead of running a scanner.
struct FixtureSource {
    report: &'static str,
}

#[async_trait]
impl ReportSource for FixtureSource {
    async fn fetch_report(&self, _target: &Ipv4Network) -> Result<String, ScanError> {
        Ok(self.report.to_string())
    }
}

struct FailingSource;

#[async_trait]
impl ReportSource for FailingSource {
    async fn fetch_report(&self, _target: &Ipv4Network) -> Result<String, ScanError> {
        Err(ScanError::ScannerFailed {
            status: "exit status: 1".to_string(),
            stderr: "Failed to resolve target".to_string(),
        })
    }
}

fn home_subnet() -> Ipv4Network {
    "192.168.1.5/24".parse().unwrap()
}

#[tokio::test]
async fn discovery_over_fixture_report() {
    let source = FixtureSource { report: crate::HOME_LAN };

    let hosts = scanner::perform_discovery(&source, &home_subnet()).await.unwrap();

    assert_eq!(hosts.len(), 5, "Found incorrect amount of hosts: {}", hosts.len());
}

#[tokio::test]
async fn discovery_results_serialize_for_renderers() {
    let source = FixtureSource { report: crate::HOME_LAN };
    let hosts = scanner::perform_discovery(&source, &home_subnet()).await.unwrap();

    let json = serde_json::to_value(&hosts).unwrap();
    let iphone = &json[2];
    assert_eq!(iphone["ip_address"], "192.168.1.31");
    assert_eq!(iphone["manufacturer"], "Apple");
    assert_eq!(iphone["os_type"], "iOS");
    assert_eq!(iphone["mac_address"], "F0:99:B6:0A:0B:0C");
    assert_eq!(iphone["hostname"], "iphone.lan");
    assert_eq!(iphone["open_ports"], serde_json::json!([62078]));
    assert_eq!(iphone["ports"][0]["state"], "open");

    let local = &json[4];
    assert!(local["mac_address"].is_null());
    assert_eq!(local["os_type"], "Unknown");
}

#[tokio::test]
async fn report_without_hosts_is_empty_not_an_error() {
    let source = FixtureSource {
        report: "Starting Nmap 7.94\nNote: Host seems down.\nNmap done: 256 IP addresses (0 hosts up)\n",
    };

    let hosts = scanner::perform_discovery(&source, &home_subnet()).await.unwrap();
    assert!(hosts.is_empty());
}

#[tokio::test]
async fn scanner_failure_is_surfaced() {
    let result = scanner::perform_discovery(&FailingSource, &home_subnet()).await;

    match result {
        Err(ScanError::ScannerFailed { stderr, .. }) => assert!(stderr.contains("resolve")),
        other => panic!("expected scanner failure, got {other:?}"),
    }
}
