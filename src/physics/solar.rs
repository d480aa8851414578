//! Solar geometry.

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::f64::consts::PI;

/// Solar constant (MJ m-2 min-1).
const GSC: f64 = 0.0820;

fn day_angle(doy: f64) -> f64 {
    2.0 * PI * (doy - 1.0) / 365.0
}

/// Solar declination (rad), Spencer (1971).
pub fn declination(doy: u32) -> f64 {
    let b = day_angle(doy as f64);
    0.006918 - 0.399912 * b.cos() + 0.070257 * b.sin() - 0.006758 * (2.0 * b).cos()
        + 0.000907 * (2.0 * b).sin()
        - 0.002697 * (3.0 * b).cos()
        + 0.00148 * (3.0 * b).sin()
}

/// Equation of time (minutes), Spencer (1971).
pub fn equation_of_time(doy: u32) -> f64 {
    let b = day_angle(doy as f64);
    229.18
        * (0.000075 + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.04089 * (2.0 * b).sin())
}

/// Solar zenith angle (rad) at the UTC instant `instant` for a site in decimal degrees.
pub fn solar_zenith_angle(instant: NaiveDateTime, latitude: f64, longitude: f64) -> f64 {
    let doy = instant.ordinal();
    let ut_hours =
        instant.hour() as f64 + instant.minute() as f64 / 60.0 + instant.second() as f64 / 3600.0;
    let solar_time = ut_hours + longitude / 15.0 + equation_of_time(doy) / 60.0;
    let hour_angle = (15.0 * (solar_time - 12.0)).to_radians();

    let lat = latitude.to_radians();
    let decl = declination(doy);
    let cos_zenith = lat.sin() * decl.sin() + lat.cos() * decl.cos() * hour_angle.cos();
    cos_zenith.clamp(-1.0, 1.0).acos()
}

/// Daily extraterrestrial radiation (MJ m-2 d-1), FAO-56 eq. 21.
pub fn extraterrestrial_radiation(doy: u32, latitude: f64) -> f64 {
    let j = doy as f64;
    let inverse_distance = 1.0 + 0.033 * (2.0 * PI * j / 365.0).cos();
    let decl = 0.409 * (2.0 * PI * j / 365.0 - 1.39).sin();
    let lat = latitude.to_radians();
    let sunset_angle = (-lat.tan() * decl.tan()).clamp(-1.0, 1.0).acos();

    24.0 * 60.0 / PI
        * GSC
        * inverse_distance
        * (sunset_angle * lat.sin() * decl.sin() + lat.cos() * decl.cos() * sunset_angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon_utc(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_zenith_equator_equinox() {
        let zenith = solar_zenith_angle(noon_utc(2021, 3, 20), 0.0, 0.0);
        assert!(zenith < 0.05, "got {}", zenith);
    }

    #[test]
    fn test_zenith_mid_latitude_solstice() {
        let zenith = solar_zenith_angle(noon_utc(2021, 6, 21), 45.0, 0.0);
        assert!((zenith - (45.0f64 - 23.44).to_radians()).abs() < 0.01, "got {}", zenith);
    }

    #[test]
    fn test_zenith_night_side() {
        let zenith = solar_zenith_angle(noon_utc(2021, 6, 21), 45.0, 180.0);
        assert!(zenith > PI / 2.0);
    }

    #[test]
    fn test_extraterrestrial_radiation_fao_example() {
        // FAO-56 example 8: 20 degrees south on 3 September.
        let ra = extraterrestrial_radiation(246, -20.0);
        assert!((ra - 32.2).abs() < 0.2, "got {}", ra);
    }

    #[test]
    fn test_extraterrestrial_radiation_polar_night() {
        assert!(extraterrestrial_radiation(355, 80.0).abs() < 1e-9);
    }
}
