use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Substituted whenever the scan report does not name a host.
pub const UNKNOWN_HOSTNAME: &str = "Unknown Hostname";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    Open,
    Closed,
    Filtered,
}

impl PortState {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "filtered" => Some(Self::Filtered),
            _ => None,
        }
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Filtered => "filtered",
        };
        f.write_str(keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Port {
    #[serde(rename = "port")]
    pub number: u16,
    pub protocol: String,
    pub state: PortState,
}

impl Port {
    pub fn new(number: u16, protocol: impl Into<String>, state: PortState) -> Self {
        Self {
            number,
            protocol: protocol.into(),
            state,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number, self.protocol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum OsGuess {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "MacOS")]
    MacOs,
    #[default]
    Unknown,
}

impl fmt::Display for OsGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ios => "iOS",
            Self::MacOs => "MacOS",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A finalized host as reported by one scan.
///
/// Instances are only produced by the report parser and are never mutated
/// afterwards, which is why the fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    ip_address: String,
    hostname: String,
    mac_address: Option<String>,
    vendor: Option<String>,
    os_guess: OsGuess,
    ports: Vec<Port>,
}

impl Host {
    pub fn new(
        ip_address: impl Into<String>,
        hostname: Option<String>,
        mac_address: Option<String>,
        vendor: Option<String>,
        os_guess: OsGuess,
        ports: Vec<Port>,
    ) -> Self {
        let hostname = hostname
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string());

        Self {
            ip_address: ip_address.into(),
            hostname,
            mac_address,
            vendor,
            os_guess,
            ports,
        }
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn os_guess(&self) -> OsGuess {
        self.os_guess
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|port| port.is_open())
    }
}

impl Serialize for Host {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let open_ports: Vec<u16> = self.open_ports().map(|port| port.number).collect();

        let mut state = serializer.serialize_struct("Host", 7)?;
        state.serialize_field("manufacturer", &self.vendor)?;
        state.serialize_field("os_type", &self.os_guess)?;
        state.serialize_field("ip_address", &self.ip_address)?;
        state.serialize_field("mac_address", &self.mac_address)?;
        state.serialize_field("hostname", &self.hostname)?;
        state.serialize_field("open_ports", &open_ports)?;
        state.serialize_field("ports", &self.ports)?;
        state.end()
    }
}
