//! Batch render of per-day charts from raw capture files.
//!
//! The orchestrating driver: load -> clean -> partition -> render, each
//! stage configured explicitly and run sequentially. Fatal errors are not
//! caught; charts already written stay on disk.

use anyhow::Context;
use aq_chart::DayChart;
use aq_data::{partition_days, Cleaner, Loader};
use chrono::TimeDelta;
use log::info;
use std::path::Path;

pub fn run_render(
    data_dir: &Path,
    out_dir: &Path,
    interval_secs: i64,
    z_threshold: f64,
) -> anyhow::Result<()> {
    let interval =
        TimeDelta::try_seconds(interval_secs).context("sampling interval out of range")?;

    let loader = Loader::new(interval);
    let samples = loader.load_dir(data_dir)?;
    info!("loaded {} rows from {}", samples.len(), data_dir.display());

    let samples = Cleaner::new(z_threshold).clean(samples);

    let chart = DayChart::new(out_dir)?;
    let mut days = 0usize;
    for bucket in partition_days(&samples) {
        info!("rendering {}", bucket.date);
        chart.render_day(&bucket)?;
        days += 1;
    }

    info!(
        "render complete: {} day charts in {}",
        days,
        out_dir.display()
    );
    Ok(())
}
