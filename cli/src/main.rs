mod commands;
mod terminal;

use commands::{CommandLine, discover};
use sweepr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    if !commands.scan {
        return CommandLine::print_usage();
    }

    let cfg: Config = commands.to_config();
    print::banner(&cfg);
    discover::discover(&cfg).await
}
