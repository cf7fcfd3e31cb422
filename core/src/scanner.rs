//! The seam between discovery and the external scanner.
//!
//! [`ReportSource`] is what the rest of the tool depends on: anything able to
//! hand back a finished plaintext report for a subnet. [`NmapRunner`] is the
//! production implementation; tests plug in canned reports instead.
//!
//! Reports are always fully materialized before parsing starts, so the parser
//! never waits on I/O.

use std::io::ErrorKind;
use std::process::Output;

use async_trait::async_trait;
use pnet::ipnetwork::Ipv4Network;
use sweepr_common::{config::Config, error::ScanError, network::host::Host};
use tokio::process::Command;
use tracing::{debug, info};

use crate::parser;

#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Runs one scan against `target` and returns its complete report.
    async fn fetch_report(&self, target: &Ipv4Network) -> Result<String, ScanError>;
}

/// Runs `nmap` as a child process and captures its normal output.
#[derive(Debug, Clone)]
pub struct NmapRunner {
    program: String,
    port_spec: String,
}

impl NmapRunner {
    pub fn new(program: impl Into<String>, port_spec: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            port_spec: port_spec.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.scanner.clone(), cfg.port_spec())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for a TCP-ACK ping sweep over the configured ports.
    pub fn args(&self, target: &Ipv4Network) -> Vec<String> {
        vec![
            "-PA".to_string(),
            "-p".to_string(),
            self.port_spec.clone(),
            target.to_string(),
        ]
    }

    /// Makes sure the scanner binary can be started at all.
    pub async fn ensure_available(&self) -> Result<String, ScanError> {
        let output = self.run(&["--version".to_string()]).await?;
        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        debug!("using scanner: {version}");
        Ok(version)
    }

    async fn run(&self, args: &[String]) -> Result<Output, ScanError> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ScanError::ScannerNotFound(self.program.clone()),
                _ => ScanError::Io(e),
            })?;

        if !output.status.success() {
            return Err(ScanError::ScannerFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

#[async_trait]
impl ReportSource for NmapRunner {
    async fn fetch_report(&self, target: &Ipv4Network) -> Result<String, ScanError> {
        let args = self.args(target);
        info!("running {} {}", self.program, args.join(" "));

        let output = self.run(&args).await?;
        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Executes one discovery cycle: fetch the report, then parse it.
pub async fn perform_discovery(
    source: &dyn ReportSource,
    target: &Ipv4Network,
) -> Result<Vec<Host>, ScanError> {
    let report = source.fetch_report(target).await?;
    if report.trim().is_empty() {
        return Err(ScanError::EmptyReport);
    }

    let hosts = parser::parse_report(&report);
    debug!("parsed {} host(s) from {} byte report", hosts.len(), report.len());
    Ok(hosts)
}
