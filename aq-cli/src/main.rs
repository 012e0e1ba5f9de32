//! AQ CLI - renders per-day charts from periodic air-sensor capture files.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aq-cli",
    version,
    about = "Air-quality sensor log charting toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aq_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    aq_cmd::run(cli.command)
}
