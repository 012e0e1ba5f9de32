//! Command implementations for the air-sensor log CLI.

use clap::Subcommand;
use std::path::PathBuf;

pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render one multi-panel chart per calendar day of logged data
    Render {
        /// Directory containing capture files (sync_<unix-end-time>.csv)
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: PathBuf,

        /// Output directory for per-day PNG charts
        #[arg(short = 'o', long, default_value = "plots")]
        out_dir: PathBuf,

        /// Seconds between consecutive rows within one capture file
        #[arg(long, default_value_t = 15)]
        interval_secs: i64,

        /// Absolute z-score above which a row is dropped as an outlier
        #[arg(long, default_value_t = 3.0)]
        z_threshold: f64,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            data_dir,
            out_dir,
            interval_secs,
            z_threshold,
        } => render::run_render(&data_dir, &out_dir, interval_secs, z_threshold),
    }
}
