//! Closed date interval used to restrict a meteo table.

use crate::engine::error::ResolutionError;
use crate::types::traits::any_date::AnyDate;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An inclusive `[start, end]` range of days.
///
/// # Examples
///
/// ```
/// use meteo_forcing::{Period, Year};
/// use chrono::NaiveDate;
///
/// let period = Period::new("2001-03-01", Year(2001)).unwrap();
/// assert_eq!(period.start, NaiveDate::from_ymd_opt(2001, 3, 1).unwrap());
/// assert_eq!(period.end, NaiveDate::from_ymd_opt(2001, 12, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Builds a period from the first day of `start` to the last day of `end`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::DateParsing`] if a bound cannot be resolved to a date and
    /// [`ResolutionError::InvalidPeriod`] if `start` falls after `end`.
    pub fn new(start: impl AnyDate, end: impl AnyDate) -> Result<Self, ResolutionError> {
        let start = start
            .get_date_range()
            .ok_or(ResolutionError::DateParsing)?
            .start;
        let end = end.get_date_range().ok_or(ResolutionError::DateParsing)?.end;
        if start > end {
            return Err(ResolutionError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both bounds included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
