use anyhow::{bail, Context};
use aq_model::{Reading, Sample};
use chrono::{DateTime, NaiveDateTime, TimeDelta};
use csv::{ReaderBuilder, Trim};
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Filename prefix written by capture firmware after clock sync was added:
/// `sync_<unix-end-time>.csv`. Earlier files are named `<unix-end-time>.csv`.
const SYNC_PREFIX: &str = "sync_";

/// Loads per-window capture files into one sorted dataset.
///
/// Capture files carry no timestamp column; rows are evenly spaced at the
/// sampling interval and the filename encodes the window's end time, so the
/// loader backdates each row from the end of the file.
pub struct Loader {
    sampling_interval: TimeDelta,
}

impl Loader {
    pub fn new(sampling_interval: TimeDelta) -> Self {
        Loader { sampling_interval }
    }

    /// Load every capture file in `dir` and return the concatenation of
    /// their rows, sorted ascending by time.
    ///
    /// A file that parses to zero data rows is skipped and the run
    /// continues; a directory with no capture files at all, a filename
    /// without a numeric end-time stem, or a malformed table is fatal.
    /// Overlapping windows are not deduplicated.
    pub fn load_dir(&self, dir: &Path) -> anyhow::Result<Vec<Sample>> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("reading capture directory {}", dir.display()))?;
        let mut paths: Vec<PathBuf> = entries
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        if paths.is_empty() {
            bail!("no capture files (*.csv) in {}", dir.display());
        }
        // Deterministic visit order; the dataset is re-sorted by time below.
        paths.sort();

        let mut samples: Vec<Sample> = Vec::new();
        for path in &paths {
            let end_time = end_time_from_path(path)?;
            let file = File::open(path)
                .with_context(|| format!("opening capture file {}", path.display()))?;
            let window = self
                .read_window(file, end_time)
                .with_context(|| format!("parsing capture file {}", path.display()))?;
            if window.is_empty() {
                info!("{}: no data rows, skipped", path.display());
                continue;
            }
            info!(
                "{}: {} rows ending {}",
                path.display(),
                window.len(),
                end_time
            );
            samples.extend(window);
        }

        samples.sort_by_key(|s| s.time);
        Ok(samples)
    }

    /// Parse one capture window, stamping row `i` of `n` with
    /// `end_time - (n - 1 - i) * sampling_interval` so the last row lands
    /// exactly on the window's end time.
    pub fn read_window<R: Read>(
        &self,
        reader: R,
        end_time: NaiveDateTime,
    ) -> anyhow::Result<Vec<Sample>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);
        let readings = rdr
            .deserialize()
            .collect::<Result<Vec<Reading>, _>>()
            .context("malformed capture table")?;

        let n = readings.len();
        Ok(readings
            .into_iter()
            .enumerate()
            .map(|(i, reading)| Sample {
                time: end_time - self.sampling_interval * (n - 1 - i) as i32,
                reading,
            })
            .collect())
    }
}

/// Decode the window end time from a capture filename:
/// `sync_<secs>.csv` or `<secs>.csv`, seconds since the Unix epoch.
pub fn end_time_from_path(path: &Path) -> anyhow::Result<NaiveDateTime> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("capture file {} has no filename stem", path.display()))?;
    let digits = stem.strip_prefix(SYNC_PREFIX).unwrap_or(stem);
    let secs: i64 = digits.parse().with_context(|| {
        format!(
            "capture filename {} does not encode a unix end time",
            path.display()
        )
    })?;
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.naive_utc())
        .with_context(|| format!("end time {} out of range", secs))
}
