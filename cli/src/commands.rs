pub mod discover;

use clap::{CommandFactory, Parser};
use pnet::ipnetwork::Ipv4Network;
use sweepr_common::config::{Config, DEFAULT_PORTS, DEFAULT_SCANNER};

#[derive(Parser, Debug)]
#[command(name = "sweepr")]
#[command(version, about = "Discovers devices on the local network and guesses what they are.")]
pub struct CommandLine {
    /// Scan the network for hosts and their open ports
    #[arg(short, long)]
    pub scan: bool,

    /// Print results as JSON instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Subnet to scan, e.g. 192.168.1.0/24 (defaults to the LAN of this machine)
    #[arg(short, long, value_name = "CIDR")]
    pub target: Option<Ipv4Network>,

    /// Ports to scan
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', default_values_t = DEFAULT_PORTS.to_vec())]
    pub ports: Vec<u16>,

    /// Scanner binary to run
    #[arg(long = "nmap", value_name = "PATH", default_value = DEFAULT_SCANNER)]
    pub scanner: String,

    /// Reduce output; repeat to print only results
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_usage() -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    pub fn to_config(&self) -> Config {
        Config {
            scanner: self.scanner.clone(),
            ports: self.ports.clone(),
            target: self.target,
            json: self.json,
            quiet: self.quiet,
        }
    }
}
