//! Calendar helpers
//!
//! Dates are stored as `YYYY-MM-DD` text, so string comparison in SQL matches
//! calendar order as long as every value uses that exact layout.

use crate::StorageError;
use chrono::{Months, NaiveDate};

/// Layout of every stored and accepted date
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// Rejects anything chrono would accept but that would not compare correctly
/// against the stored text, such as unpadded months or days.
pub fn parse_date(value: &str) -> Result<NaiveDate, StorageError> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(StorageError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| StorageError::InvalidDate(value.to_string()))
}

/// Same day one calendar year earlier; Feb 29 maps to Feb 28.
pub(crate) fn one_year_before(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

/// The trailing twelve months ending at the latest measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationWindow {
    pub latest: NaiveDate,
    pub cutoff: NaiveDate,
}

impl ObservationWindow {
    /// Window ending at `latest`
    pub fn ending_at(latest: NaiveDate) -> Self {
        Self {
            latest,
            cutoff: one_year_before(latest),
        }
    }

    /// Cutoff formatted for comparison against stored dates
    pub fn cutoff_str(&self) -> String {
        self.cutoff.format(DATE_FORMAT).to_string()
    }

    /// Whether a date lies inside the window (both ends inclusive)
    #[cfg(test)]
    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        date >= self.cutoff && date <= self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_accepts_padded_dates() {
        assert_eq!(parse_date("2017-08-23").unwrap(), ymd(2017, 8, 23));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["2017-8-23", "20170823", "2017/08/23", "2017-02-30", "tomorrow", ""] {
            assert!(
                matches!(parse_date(bad), Err(StorageError::InvalidDate(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_one_year_before() {
        assert_eq!(one_year_before(ymd(2017, 8, 23)), ymd(2016, 8, 23));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        assert_eq!(one_year_before(ymd(2016, 2, 29)), ymd(2015, 2, 28));
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let window = ObservationWindow::ending_at(ymd(2017, 8, 23));
        assert_eq!(window.cutoff_str(), "2016-08-23");
        assert!(window.contains(ymd(2016, 8, 23)));
        assert!(window.contains(ymd(2017, 8, 23)));
        assert!(!window.contains(ymd(2016, 8, 22)));
    }

    proptest! {
        #[test]
        fn prop_cutoff_is_one_calendar_year_back(days in 0i64..40_000) {
            let latest = ymd(1950, 1, 1) + chrono::Duration::days(days);
            let cutoff = one_year_before(latest);

            prop_assert_eq!(cutoff.year(), latest.year() - 1);
            prop_assert_eq!(cutoff.month(), latest.month());
            if !(latest.month() == 2 && latest.day() == 29) {
                prop_assert_eq!(cutoff.day(), latest.day());
            } else {
                prop_assert_eq!(cutoff.day(), 28);
            }
        }
    }
}
