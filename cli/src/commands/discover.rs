use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use pnet::ipnetwork::Ipv4Network;
use tracing::{info, warn};

use crate::{mprint, terminal::{colors, print, spinner, table}};
use sweepr_common::{config::Config, network::{host::Host, interface}};
use sweepr_core::scanner::{self, NmapRunner};

pub async fn discover(cfg: &Config) -> anyhow::Result<()> {
    warn_if_unprivileged();

    let runner: NmapRunner = NmapRunner::from_config(cfg);
    runner.ensure_available().await?;

    let target: Ipv4Network = match cfg.target {
        Some(target) => target,
        None => interface::get_lan_network().context("could not determine the local subnet")?,
    };

    print::header("network discovery", cfg);
    info!("Scanning {target} on ports {}", cfg.port_spec());

    spinner::start(format!("Waiting for {} to finish...", runner.program()));
    let start_time: Instant = Instant::now();
    let result = scanner::perform_discovery(&runner, &target).await;
    spinner::stop();

    let hosts: Vec<Host> = result.with_context(|| format!("scan of {target} failed"))?;

    if cfg.json {
        println!("{}", render_json(&hosts)?);
        return Ok(());
    }

    discovery_ends(&hosts, start_time.elapsed(), cfg);
    Ok(())
}

/// The complete stdout of a `--json` run.
fn render_json(hosts: &[Host]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(hosts)
}

fn warn_if_unprivileged() {
    if !is_root::is_root() {
        warn!("Not running as root: nmap cannot read MAC addresses, vendors and OS guesses will be missing");
    }
}

fn discovery_ends(hosts: &[Host], total_time: Duration, cfg: &Config) {
    if hosts.is_empty() {
        print::header("zero hosts detected", cfg);
        print::no_results();
        return;
    }

    if cfg.quiet < 2 {
        mprint!();
    }
    table::print_hosts(hosts);
    print_summary(hosts.len(), total_time, cfg);
}

fn print_summary(hosts_len: usize, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let active_hosts: ColoredString = format!("{hosts_len}").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "{} Total number of Hosts up: {active_hosts} ({total_time})",
        "Scan Complete.".color(colors::TEXT_DEFAULT)
    );

    mprint!();
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => print::print(&output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepr_common::network::host::{OsGuess, Port, PortState};

    #[test]
    fn json_output_parses_as_host_list() {
        let hosts = vec![
            Host::new(
                "192.168.1.31",
                Some("iphone.lan".into()),
                Some("F0:99:B6:0A:0B:0C".into()),
                Some("Apple".into()),
                OsGuess::Ios,
                vec![Port::new(62078, "tcp", PortState::Open)],
            ),
            Host::new("192.168.1.5", None, None, None, OsGuess::Unknown, Vec::new()),
        ];
        let cfg = Config {
            json: true,
            ..Config::default()
        };

        let stdout: String = print::header_line("network discovery", &cfg)
            .into_iter()
            .chain(std::iter::once(render_json(&hosts).unwrap()))
            .collect::<Vec<String>>()
            .join("\n");

        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let parsed = parsed.as_array().unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["os_type"], "iOS");
        assert!(parsed[1]["mac_address"].is_null());
    }
}
