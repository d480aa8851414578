/// Running count of consecutive dry days.
///
/// A wet day (rain > 0) and the first dry day after it both count 0; each further
/// dry day adds one. Rows must be in date order. A NaN (null) rain value counts as a
/// dry day, like an absent Rain column.
///
/// # Examples
///
/// ```
/// use meteo_forcing::days_without_rain;
///
/// assert_eq!(
///     days_without_rain(&[0.0, 0.0, 3.0, 0.0, 0.0, 0.0]),
///     vec![0.0, 1.0, 0.0, 0.0, 1.0, 2.0]
/// );
/// ```
pub fn days_without_rain(rain: &[f64]) -> Vec<f64> {
    let mut counts = Vec::with_capacity(rain.len());
    let mut previous: Option<(f64, f64)> = None;
    for &today in rain {
        let count = match previous {
            Some((yesterday, count)) if !is_wet(today) && !is_wet(yesterday) => count + 1.0,
            _ => 0.0,
        };
        counts.push(count);
        previous = Some((today, count));
    }
    counts
}

fn is_wet(rain: f64) -> bool {
    rain > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_on_rain() {
        assert_eq!(
            days_without_rain(&[0.0, 0.0, 3.0, 0.0, 0.0, 0.0]),
            vec![0.0, 1.0, 0.0, 0.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_all_wet_and_empty() {
        assert_eq!(days_without_rain(&[1.0, 2.0, 0.5]), vec![0.0, 0.0, 0.0]);
        assert!(days_without_rain(&[]).is_empty());
    }

    #[test]
    fn test_null_rain_counts_as_dry() {
        assert_eq!(
            days_without_rain(&[2.0, f64::NAN, f64::NAN, 1.0]),
            vec![0.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_long_drought() {
        let counts = days_without_rain(&[0.0; 5]);
        assert_eq!(counts, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
