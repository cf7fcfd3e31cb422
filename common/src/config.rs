use pnet::ipnetwork::Ipv4Network;

/// Ports scanned when the user does not pass `--ports`.
///
/// 62078 is iphone-sync, 64084 is the macOS content cache.
pub const DEFAULT_PORTS: &[u16] = &[
    21, 22, 53, 80, 88, 110, 143, 443, 445, 993, 995, 3283, 3389, 5900, 57621, 60159, 62078,
    64084,
];

pub const DEFAULT_SCANNER: &str = "nmap";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path or name of the scanner binary.
    pub scanner: String,
    /// Ports handed to the scanner's `-p` flag.
    pub ports: Vec<u16>,
    /// Overrides the auto-detected LAN subnet.
    pub target: Option<Ipv4Network>,
    /// Emit JSON instead of the table.
    pub json: bool,
    /// 0 prints everything, 1 hides headers, 2 prints only results.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: DEFAULT_SCANNER.to_string(),
            ports: DEFAULT_PORTS.to_vec(),
            target: None,
            json: false,
            quiet: 0,
        }
    }
}

impl Config {
    /// Renders the port list the way `nmap -p` expects it.
    pub fn port_spec(&self) -> String {
        self.ports
            .iter()
            .map(|port| port.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }
}
