use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// up to, but not including, the end date (half-open).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 < self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_iteration() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let range = DateRange(start, end);
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], start);
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_date_range_excludes_end() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let dates: Vec<NaiveDate> = DateRange(start, end).collect();
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn test_date_range_empty_when_equal() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let dates: Vec<NaiveDate> = DateRange(start, start).collect();
        assert_eq!(dates.len(), 0);
    }

    #[test]
    fn test_date_range_empty_when_reversed() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let dates: Vec<NaiveDate> = DateRange(start, end).collect();
        assert_eq!(dates.len(), 0);
    }
}
