use std::collections::HashSet;
use std::mem;

use sweepr_common::network::host::{Host, Port};
use tracing::{debug, trace};

use super::extract;
use crate::os;

/// Mutable view of a host while its record is still being read.
#[derive(Debug, Default)]
struct HostBuilder {
    ip_address: String,
    hostname: Option<String>,
    mac_address: Option<String>,
    vendor: Option<String>,
    ports: Vec<Port>,
}

impl HostBuilder {
    fn from_boundary(ip_address: &str, line: &str) -> Self {
        Self {
            ip_address: ip_address.to_string(),
            hostname: extract::hostname(line).map(str::to_string),
            ..Self::default()
        }
    }

    fn apply_trailer(&mut self, line: &str) {
        self.mac_address = extract::mac(line).map(str::to_string);
        self.vendor = extract::vendor(line).map(str::to_string);
    }

    fn build(self) -> Host {
        let os_guess = os::infer_os(self.vendor.as_deref(), &self.ports);
        Host::new(
            self.ip_address,
            self.hostname,
            self.mac_address,
            self.vendor,
            os_guess,
            self.ports,
        )
    }
}

#[derive(Debug, Default)]
enum State {
    /// No host record is open.
    #[default]
    Seeking,
    /// A host is open; its port table has not started or has no header.
    AwaitingTrailer(HostBuilder),
    /// The previous line was the port header, rows are being read.
    InPortTable(HostBuilder),
}

/// Observable phase of a [`ReportParser`], mirroring its internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Seeking,
    AwaitingTrailer,
    InPortTable,
}

/// Incremental parser over the lines of one report.
///
/// Each report needs its own instance; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct ReportParser {
    state: State,
    hosts: Vec<Host>,
    seen: HashSet<String>,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Seeking => Phase::Seeking,
            State::AwaitingTrailer(_) => Phase::AwaitingTrailer,
            State::InPortTable(_) => Phase::InPortTable,
        }
    }

    /// Hosts finalized so far.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn feed(&mut self, line: &str) {
        if extract::is_boundary(line) {
            self.flush();
            if let Some(ip_address) = extract::ipv4(line) {
                self.state = State::AwaitingTrailer(HostBuilder::from_boundary(ip_address, line));
            }
            return;
        }

        self.state = match mem::take(&mut self.state) {
            State::Seeking => State::Seeking,
            State::AwaitingTrailer(mut builder) => {
                if extract::is_port_header(line) {
                    State::InPortTable(builder)
                } else if extract::is_trailer(line) {
                    builder.apply_trailer(line);
                    self.finalize(builder);
                    State::Seeking
                } else {
                    State::AwaitingTrailer(builder)
                }
            }
            State::InPortTable(mut builder) => {
                if extract::is_blank(line) {
                    // The scanning machine has no MAC line; its table ends here.
                    self.finalize(builder);
                    State::Seeking
                } else if extract::is_trailer(line) {
                    builder.apply_trailer(line);
                    self.finalize(builder);
                    State::Seeking
                } else {
                    match extract::port(line) {
                        Some(port) => builder.ports.push(port),
                        None => trace!("skipping non-port line in port table: {line:?}"),
                    }
                    State::InPortTable(builder)
                }
            }
        };
    }

    /// Flushes any open record and returns every host in report order.
    pub fn finish(mut self) -> Vec<Host> {
        self.flush();
        self.hosts
    }

    fn flush(&mut self) {
        match mem::take(&mut self.state) {
            State::Seeking => {}
            State::AwaitingTrailer(builder) | State::InPortTable(builder) => self.finalize(builder),
        }
    }

    fn finalize(&mut self, builder: HostBuilder) {
        if !self.seen.insert(builder.ip_address.clone()) {
            debug!("dropping duplicate record for {}", builder.ip_address);
            return;
        }

        let host = builder.build();
        debug!(
            "host {} finalized with {} port(s), os {}",
            host.ip_address(),
            host.ports().len(),
            host.os_guess()
        );
        self.hosts.push(host);
    }
}
