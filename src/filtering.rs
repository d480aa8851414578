use crate::types::variables::DATE;
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataType, LazyFrame};

/// Row filter on the `Date` column of a daily table.
pub trait DailyFrameFilterExt {
    /// Keeps rows dated within `[start_date, end_date]`.
    fn filter_daily(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame;
}

impl DailyFrameFilterExt for LazyFrame {
    fn filter_daily(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame {
        self.filter(
            col(DATE)
                .cast(DataType::Date)
                .gt_eq(lit(start_date))
                .and(col(DATE).cast(DataType::Date).lt_eq(lit(end_date))),
        )
    }
}
