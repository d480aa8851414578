use crate::types::period::Period;
use chrono::NaiveDate;

/// A requested period narrowed to the dates actually available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClippedPeriod {
    pub period: Period,
    /// One message per clipped bound.
    pub notices: Vec<String>,
}

/// Clips `requested` to `[first, last]`, the span covered by the data.
pub(crate) fn clip_period(requested: Period, first: NaiveDate, last: NaiveDate) -> ClippedPeriod {
    let mut period = requested;
    let mut notices = Vec::new();

    if requested.start < first {
        notices.push(format!(
            "Meteo data do not cover the requested period start ({}): start set to {} ({} days later)",
            requested.start,
            first,
            (first - requested.start).num_days()
        ));
        period.start = first;
    }
    if requested.end > last {
        notices.push(format!(
            "Meteo data do not cover the requested period end ({}): end set to {} ({} days earlier)",
            requested.end,
            last,
            (requested.end - last).num_days()
        ));
        period.end = last;
    }

    ClippedPeriod { period, notices }
}
