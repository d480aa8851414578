//! Vapour pressure relations. Temperatures in Celsius, pressures in kPa.

// Sonntag (1990) coefficients over water.
const ESAT_A: f64 = 0.6112;
const ESAT_B: f64 = 17.62;
const ESAT_C: f64 = 243.12;

/// Saturation vapour pressure (kPa) at `tair`.
pub fn saturation_vapour_pressure(tair: f64) -> f64 {
    ESAT_A * (ESAT_B * tair / (ESAT_C + tair)).exp()
}

/// Vapour pressure deficit (kPa) from relative humidity as a fraction (0-1).
pub fn rh_to_vpd(rh: f64, tair: f64) -> f64 {
    let esat = saturation_vapour_pressure(tair);
    esat - rh.clamp(0.0, 1.0) * esat
}

/// Relative humidity as a fraction (0-1) from the vapour pressure deficit (kPa).
pub fn vpd_to_rh(vpd: f64, tair: f64) -> f64 {
    (1.0 - vpd / saturation_vapour_pressure(tair)).clamp(0.0, 1.0)
}

/// Actual vapour pressure (kPa) from the vapour pressure deficit (kPa).
pub fn vpd_to_actual(vpd: f64, tair: f64) -> f64 {
    (saturation_vapour_pressure(tair) - vpd).max(0.0)
}
