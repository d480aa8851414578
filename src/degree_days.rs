//! Growing degree days.

/// Default base temperature (Celsius).
pub const DEFAULT_MIN_TT: f64 = 5.0;
/// Default ceiling temperature (Celsius).
pub const DEFAULT_MAX_TT: f64 = 30.0;

/// Growing degree days of one day from its mean temperature.
///
/// Returns `tmean - min_tt` when it lies within `[0, max_tt - min_tt]`, and `0.0`
/// otherwise: days hotter than the ceiling contribute nothing rather than the full span.
///
/// # Examples
///
/// ```
/// use meteo_forcing::gdd;
///
/// assert_eq!(gdd(25.0, 5.0, 28.0), 20.0);
/// assert_eq!(gdd(5.0, 5.0, 28.0), 0.0);
/// assert_eq!(gdd(40.0, 5.0, 28.0), 0.0);
/// ```
pub fn gdd(tmean: f64, min_tt: f64, max_tt: f64) -> f64 {
    let degrees = tmean - min_tt;
    if degrees < 0.0 || degrees > max_tt - min_tt {
        0.0
    } else {
        degrees
    }
}

/// Growing degree days from the daily extremes, averaged before calling [`gdd`].
pub fn gdd_from_extremes(tmax: f64, tmin: f64, min_tt: f64, max_tt: f64) -> f64 {
    gdd((tmax + tmin) / 2.0, min_tt, max_tt)
}

/// Row-wise [`gdd_from_extremes`] over daily series of equal length.
pub fn gdd_series(tmax: &[f64], tmin: &[f64], min_tt: f64, max_tt: f64) -> Vec<f64> {
    tmax.iter()
        .zip(tmin)
        .map(|(&high, &low)| gdd_from_extremes(high, low, min_tt, max_tt))
        .collect()
}
