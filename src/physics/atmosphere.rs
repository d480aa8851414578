//! Barometric pressure and air density. Temperatures in Celsius, pressures in kPa.

use crate::physics::humidity::vpd_to_actual;

const KELVIN: f64 = 273.15;
/// Sea-level reference pressure (kPa).
const PRESSURE0: f64 = 101.325;
const GRAVITY: f64 = 9.81;
/// Gas constant of dry air (J kg-1 K-1).
const RD: f64 = 287.0586;
/// Ratio of the molecular weights of water vapour and dry air.
const EPSILON: f64 = 0.622;

/// Atmospheric pressure (kPa) at `elevation` (m) from the hypsometric equation.
///
/// With a vapour pressure deficit (kPa) the virtual temperature replaces `tair`.
pub fn pressure_from_elevation(elevation: f64, tair: f64, vpd: Option<f64>) -> f64 {
    let dry = hypsometric(elevation, tair + KELVIN);
    match vpd {
        Some(vpd) => hypsometric(elevation, virtual_temperature(tair, dry, vpd)),
        None => dry,
    }
}

fn hypsometric(elevation: f64, temperature_k: f64) -> f64 {
    PRESSURE0 / (GRAVITY * elevation / (RD * temperature_k)).exp()
}

/// Virtual temperature (K) of moist air.
pub fn virtual_temperature(tair: f64, pressure: f64, vpd: f64) -> f64 {
    let vapour = vpd_to_actual(vpd, tair);
    (tair + KELVIN) / (1.0 - (1.0 - EPSILON) * vapour / pressure)
}

/// Density of dry air (kg m-3).
pub fn air_density(tair: f64, pressure: f64) -> f64 {
    pressure * 1000.0 / (RD * (tair + KELVIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sea_level_pressure() {
        assert_eq!(pressure_from_elevation(0.0, 15.0, None), PRESSURE0);
        assert_eq!(pressure_from_elevation(0.0, 15.0, Some(1.0)), PRESSURE0);
    }

    #[test]
    fn test_pressure_decreases_with_elevation() {
        let dry = pressure_from_elevation(1000.0, 15.0, None);
        assert!((dry - 89.99).abs() < 0.05, "got {}", dry);
        // Moist air is lighter, so the pressure drop over the column is smaller.
        let moist = pressure_from_elevation(1000.0, 15.0, Some(0.5));
        assert!(moist > dry);
    }

    #[test]
    fn test_air_density() {
        assert!((air_density(20.0, 101.325) - 1.204).abs() < 1e-3);
    }
}
