use chrono::NaiveDate;

/// A calendar year, accepted wherever a date range is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);

impl Year {
    pub fn get(self) -> i32 {
        self.0
    }

    /// 366 for leap years, 365 otherwise.
    pub fn day_count(self) -> u32 {
        if NaiveDate::from_ymd_opt(self.0, 2, 29).is_some() {
            366
        } else {
            365
        }
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Year(year)
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StartEndDate {
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }
}
