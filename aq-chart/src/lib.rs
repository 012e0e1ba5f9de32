//! Per-day chart rendering.
//!
//! Each calendar-day bucket becomes one PNG with three vertically stacked,
//! time-aligned panels: gas concentration, temperature by sensor location,
//! and humidity by sensor location.

use anyhow::Context;
use aq_data::DayBucket;
use aq_model::{Measure, Sample};
use chrono::NaiveDateTime;
use log::info;
use plotters::coord::types::RangedDateTime;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// One chart panel: a named group of line series sharing a y axis.
struct Panel {
    y_desc: &'static str,
    measures: &'static [Measure],
}

const PANELS: [Panel; 3] = [
    Panel {
        y_desc: "Concentration (ppm / ppb)",
        measures: &Measure::GAS,
    },
    Panel {
        y_desc: "Temperature (°C)",
        measures: &Measure::TEMPERATURE,
    },
    Panel {
        y_desc: "Humidity (%RH)",
        measures: &Measure::HUMIDITY,
    },
];

/// Renders one figure per day bucket into a fixed output directory.
///
/// Each figure is fully drawn and flushed to disk before the next begins,
/// bounding peak memory to roughly one day's plotted data. Existing files
/// are overwritten.
pub struct DayChart {
    out_dir: PathBuf,
    size: (u32, u32),
}

impl DayChart {
    /// Create a renderer writing into `out_dir`, creating it if absent.
    pub fn new(out_dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("creating output directory {}", out_dir.display()))?;
        Ok(DayChart {
            out_dir: out_dir.to_path_buf(),
            size: (1024, 1280),
        })
    }

    /// Draw the bucket's three panels and write `<YYYY-MM-DD>.png`.
    ///
    /// An empty bucket still produces a (series-free) chart file.
    pub fn render_day(&self, bucket: &DayBucket) -> anyhow::Result<PathBuf> {
        let day = bucket.date.format("%Y-%m-%d").to_string();
        let out_path = self.out_dir.join(format!("{day}.png"));

        {
            let root = BitMapBackend::new(&out_path, self.size).into_drawing_area();
            root.fill(&WHITE)?;
            let titled = root.titled(&day, ("sans-serif", 40))?;
            let areas = titled.split_evenly((3, 1));
            for (panel, area) in PANELS.iter().zip(areas.iter()) {
                draw_panel(area, panel, bucket)?;
            }
            root.present()
                .with_context(|| format!("writing chart {}", out_path.display()))?;
        }

        info!("{}: {} rows plotted", out_path.display(), bucket.samples.len());
        Ok(out_path)
    }
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: &Panel,
    bucket: &DayBucket,
) -> anyhow::Result<()> {
    let (y_min, y_max) = value_range(bucket.samples, panel.measures);

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(
            RangedDateTime::from(bucket.start()..bucket.end()),
            y_min..y_max,
        )?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc(panel.y_desc)
        .x_label_formatter(&|t: &NaiveDateTime| t.format("%H:%M").to_string())
        .draw()?;

    for (idx, measure) in panel.measures.iter().copied().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        let points = bucket
            .samples
            .iter()
            .filter_map(move |s| measure.value(&s.reading).map(|v| (s.time, v)));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(measure.name())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Padded min/max over the values present in the given columns; falls back
/// to a unit range when the bucket holds nothing to plot.
fn value_range(samples: &[Sample], measures: &[Measure]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in samples {
        for m in measures {
            if let Some(v) = m.value(&s.reading) {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    if min > max {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(0.5);
    (min - pad, max + pad)
}
