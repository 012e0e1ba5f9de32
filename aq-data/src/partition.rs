use aq_model::{DateRange, Sample};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// One calendar day's contiguous slice of the sorted dataset.
#[derive(Debug, Clone, Copy)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub samples: &'a [Sample],
}

impl DayBucket<'_> {
    /// Midnight opening the bucket's day.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_hms_opt(0, 0, 0).unwrap()
    }

    /// Midnight of the following day (exclusive bound).
    pub fn end(&self) -> NaiveDateTime {
        self.start() + TimeDelta::try_days(1).unwrap()
    }
}

/// Walk the cleaned dataset one calendar day at a time.
///
/// Buckets run from the date of the earliest sample up to, but not
/// including, the date of the latest sample, so samples on that final
/// date fall outside every bucket. Days with no samples still yield an
/// (empty) bucket. Input must be sorted by time.
pub fn partition_days(samples: &[Sample]) -> DayPartitions<'_> {
    let first = samples.iter().map(|s| s.time).min();
    let last = samples.iter().map(|s| s.time).max();
    let days = match (first, last) {
        (Some(first), Some(last)) => DateRange(first.date(), last.date()),
        _ => DateRange(NaiveDate::default(), NaiveDate::default()),
    };
    DayPartitions { samples, days }
}

/// Iterator over a dataset's [`DayBucket`]s.
pub struct DayPartitions<'a> {
    samples: &'a [Sample],
    days: DateRange,
}

impl<'a> Iterator for DayPartitions<'a> {
    type Item = DayBucket<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.days.next()?;
        let day_start = date.and_hms_opt(0, 0, 0).unwrap();
        let day_end = day_start + TimeDelta::try_days(1).unwrap();
        let lo = self.samples.partition_point(|s| s.time < day_start);
        let hi = self.samples.partition_point(|s| s.time < day_end);
        Some(DayBucket {
            date,
            samples: &self.samples[lo..hi],
        })
    }
}
