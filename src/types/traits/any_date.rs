use crate::types::traits::types::{StartEndDate, Year};
use chrono::NaiveDate;

/// Formats accepted for textual dates, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Anything that resolves to an inclusive range of calendar days.
///
/// Single days resolve to a range where `start == end`; a [`Year`] spans
/// January 1st to December 31st.
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate::single(self))
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        let trimmed = self.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .and_then(|date| date.get_date_range())
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}
