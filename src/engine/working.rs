//! Column access over the table being resolved.

use crate::engine::error::ResolutionError;
use crate::filtering::DailyFrameFilterExt;
use crate::presence::column_missing;
use crate::types::period::Period;
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

/// Days between 0001-01-01 and the Unix epoch, the origin of polars dates.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub(crate) fn date_to_epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

pub(crate) fn epoch_days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

/// The table being resolved. Numeric columns are read as `f64`, nulls as NaN.
pub(crate) struct WorkingTable {
    frame: DataFrame,
}

impl WorkingTable {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn has(&self, name: &str) -> bool {
        !column_missing(&self.frame, name)
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    fn series_as(&self, name: &str, dtype: &DataType, expected: &'static str) -> Result<Series, ResolutionError> {
        self.frame
            .column(name)?
            .as_materialized_series()
            .cast(dtype)
            .map_err(|source| ResolutionError::ColumnType {
                column: name.to_string(),
                expected,
                source,
            })
    }

    pub fn values(&self, name: &str) -> Result<Vec<f64>, ResolutionError> {
        let series = self.series_as(name, &DataType::Float64, "Float64")?;
        let values = series
            .f64()?
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect();
        Ok(values)
    }

    pub fn set(&mut self, name: &str, values: Vec<f64>) -> Result<(), ResolutionError> {
        self.frame.with_column(Series::new(name.into(), values))?;
        Ok(())
    }

    pub fn set_i32(&mut self, name: &str, values: Vec<i32>) -> Result<(), ResolutionError> {
        self.frame.with_column(Series::new(name.into(), values))?;
        Ok(())
    }

    /// Reads a column of dates, accepting Date, Datetime or ISO text columns.
    pub fn dates(&self, name: &str) -> Result<Vec<NaiveDate>, ResolutionError> {
        let series = self
            .series_as(name, &DataType::Date, "Date")?
            .cast(&DataType::Int32)?;
        let days = series.i32()?;
        days.into_iter()
            .enumerate()
            .map(|(row, days)| {
                days.ok_or(ResolutionError::NullDate { row })
                    .and_then(|days| epoch_days_to_date(days).ok_or(ResolutionError::DateOutOfRange))
            })
            .collect()
    }

    pub fn set_dates(&mut self, name: &str, dates: &[NaiveDate]) -> Result<(), ResolutionError> {
        let days: Vec<i32> = dates.iter().copied().map(date_to_epoch_days).collect();
        let series = Series::new(name.into(), days).cast(&DataType::Date)?;
        self.frame.with_column(series)?;
        Ok(())
    }

    /// Orders rows by ascending `name`, keeping the input order of ties.
    pub fn sort_by(&mut self, name: &str) -> Result<(), ResolutionError> {
        let frame = std::mem::take(&mut self.frame);
        self.frame = frame
            .lazy()
            .sort([name], SortMultipleOptions::default().with_maintain_order(true))
            .collect()?;
        Ok(())
    }

    /// Keeps the rows whose date lies within `period`.
    pub fn retain_period(&mut self, period: Period) -> Result<(), ResolutionError> {
        let frame = std::mem::take(&mut self.frame);
        self.frame = frame.lazy().filter_daily(period.start, period.end).collect()?;
        Ok(())
    }

    /// Drops every column not in `names` and orders the rest like `names`.
    pub fn project(&mut self, names: &[&str]) -> Result<(), ResolutionError> {
        self.frame = self.frame.select(names.iter().copied())?;
        Ok(())
    }
}
