use aq_model::{Sample, MEASURES};
use log::info;

/// Population mean and standard deviation of one tracked column.
#[derive(Debug, Clone, Copy)]
struct ColumnStats {
    mean: f64,
    std_dev: f64,
}

impl ColumnStats {
    fn compute(values: &[f64]) -> ColumnStats {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        ColumnStats {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Standardized deviation of `value`. A constant column scores zero,
    /// so it never ejects rows.
    fn z_score(&self, value: f64) -> f64 {
        if self.std_dev == 0.0 {
            0.0
        } else {
            (value - self.mean) / self.std_dev
        }
    }
}

/// Drops incomplete rows, then rows that are statistical outliers in any
/// tracked column.
///
/// The z-score statistics are computed once over the whole missing-free
/// dataset before any outlier is dropped; they are not recomputed as rows
/// fall out.
pub struct Cleaner {
    z_threshold: f64,
}

impl Cleaner {
    pub fn new(z_threshold: f64) -> Self {
        Cleaner { z_threshold }
    }

    pub fn clean(&self, samples: Vec<Sample>) -> Vec<Sample> {
        let total = samples.len();
        let complete: Vec<Sample> = samples
            .into_iter()
            .filter(|s| s.reading.is_complete())
            .collect();
        let n_complete = complete.len();
        if complete.is_empty() {
            info!("cleaner: {} rows in, 0 kept", total);
            return complete;
        }

        let stats: Vec<ColumnStats> = MEASURES
            .iter()
            .map(|m| {
                let values: Vec<f64> = complete
                    .iter()
                    .filter_map(|s| m.value(&s.reading))
                    .collect();
                ColumnStats::compute(&values)
            })
            .collect();

        let kept: Vec<Sample> = complete
            .into_iter()
            .filter(|s| {
                MEASURES.iter().zip(&stats).all(|(m, st)| match m.value(&s.reading) {
                    Some(v) => st.z_score(v).abs() <= self.z_threshold,
                    None => false,
                })
            })
            .collect();

        info!(
            "cleaner: {} rows in, {} incomplete dropped, {} outliers dropped, {} kept",
            total,
            total - n_complete,
            n_complete - kept.len(),
            kept.len()
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_model::Reading;
    use chrono::{DateTime, NaiveDateTime};

    fn ts(secs: i64) -> NaiveDateTime {
        DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    fn sample(secs: i64, co2: f64) -> Sample {
        Sample {
            time: ts(secs),
            reading: Reading {
                co2: Some(co2),
                tvoc: Some(10.0),
                hum_ext: Some(45.0),
                hum_room: Some(46.0),
                hum_wall: Some(47.0),
                hum_ceiling: Some(48.0),
                temp_ext: Some(20.0),
                temp_room: Some(21.0),
                temp_wall: Some(22.0),
                temp_ceiling: Some(23.0),
            },
        }
    }

    #[test]
    fn test_missing_values_dropped() {
        let mut incomplete = sample(15, 410.0);
        incomplete.reading.hum_wall = None;
        let samples = vec![sample(0, 400.0), incomplete, sample(30, 420.0)];
        let kept = Cleaner::new(3.0).clean(samples);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|s| s.reading.hum_wall.is_some()));
    }

    #[test]
    fn test_extreme_outlier_dropped() {
        // Eleven ordinary rows plus one reading 1000x their scale; only the
        // outlier exceeds |z| = 3.
        let mut samples: Vec<Sample> = (0..11).map(|i| sample(i * 15, 400.0)).collect();
        samples.push(sample(11 * 15, 400_000.0));
        let kept = Cleaner::new(3.0).clean(samples);
        assert_eq!(kept.len(), 11);
        assert!(kept.iter().all(|s| s.reading.co2 == Some(400.0)));
    }

    #[test]
    fn test_in_bounds_rows_kept() {
        let samples: Vec<Sample> = (0..10)
            .map(|i| sample(i * 15, 400.0 + i as f64))
            .collect();
        let kept = Cleaner::new(3.0).clean(samples.clone());
        assert_eq!(kept, samples);
    }

    #[test]
    fn test_constant_column_keeps_rows() {
        // Zero standard deviation must not eject every row.
        let samples: Vec<Sample> = (0..5).map(|i| sample(i * 15, 400.0)).collect();
        let kept = Cleaner::new(3.0).clean(samples.clone());
        assert_eq!(kept, samples);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let kept = Cleaner::new(3.0).clean(Vec::new());
        assert!(kept.is_empty());
    }
}
