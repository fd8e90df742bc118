use chrono::{Datelike, NaiveDate};

use crate::error::{StoryError, StoryResult};

use super::scale::LinearScale;

/// Parses a `"22-Jan"` style month label (two-digit year, abbreviated
/// English month) into the first day of that month.
pub fn parse_month_label(label: &str) -> StoryResult<NaiveDate> {
    let trimmed = label.trim();
    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%y-%b-%d").map_err(|_| {
        StoryError::InvalidData(format!("malformed month label `{label}`, expected `yy-Mon`"))
    })
}

/// Formats a date back into the `"22-Jan"` label form used on date axes.
#[must_use]
pub fn format_month_label(date: NaiveDate) -> String {
    date.format("%y-%b").to_string()
}

/// First days of every month from `start` to `end` inclusive.
///
/// Both endpoints are snapped to the first of their month; an inverted
/// span yields an empty vec.
#[must_use]
pub fn month_boundaries(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut boundaries = Vec::new();
    let mut cursor = first_of_month(start);
    let stop = first_of_month(end);
    while cursor <= stop {
        boundaries.push(cursor);
        cursor = next_month(cursor);
    }
    boundaries
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Date axis scale: calendar dates mapped through a linear day axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthScale {
    domain_start: NaiveDate,
    domain_end: NaiveDate,
    days: LinearScale,
}

impl MonthScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> StoryResult<Self> {
        if domain.0 >= domain.1 {
            return Err(StoryError::InvalidData(format!(
                "month scale domain must be increasing, got {} .. {}",
                domain.0, domain.1
            )));
        }
        let days = LinearScale::new((day_number(domain.0), day_number(domain.1)), range)?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            days,
        })
    }

    #[must_use]
    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.days.range()
    }

    /// Pixel position of a date. Dates outside the domain extrapolate
    /// linearly, matching the underlying day axis.
    #[must_use]
    pub fn position(&self, date: NaiveDate) -> f64 {
        self.days.position(day_number(date))
    }

    /// Month-boundary tick dates across the visible domain.
    #[must_use]
    pub fn month_ticks(&self) -> Vec<NaiveDate> {
        month_boundaries(self.domain_start, self.domain_end)
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
