//! Net radiation and diffuse fraction from daily shortwave radiation.

use crate::physics::humidity::{saturation_vapour_pressure, vpd_to_actual};
use crate::physics::solar::extraterrestrial_radiation;

/// Stefan-Boltzmann constant (MJ K-4 m-2 d-1).
const SIGMA: f64 = 4.903e-9;
const KELVIN: f64 = 273.16;

/// Humidity input of [`net_radiation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Humidity {
    /// Relative humidity (%).
    Relative(f64),
    /// Vapour pressure deficit (hPa).
    Deficit(f64),
}

/// Daily inputs of [`net_radiation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetRadiationInput {
    pub doy: u32,
    /// Incoming shortwave radiation (MJ m-2 d-1).
    pub rad: f64,
    pub tmax: f64,
    pub tmin: f64,
    pub tair: f64,
    pub humidity: Humidity,
    pub latitude: f64,
    /// Site elevation (m).
    pub elevation: f64,
    pub albedo: f64,
}

impl NetRadiationInput {
    /// Actual vapour pressure (kPa), against saturation at `tair` for both humidity forms.
    fn actual_vapour_pressure(&self) -> f64 {
        match self.humidity {
            Humidity::Relative(rh) => rh / 100.0 * saturation_vapour_pressure(self.tair),
            Humidity::Deficit(vpd) => vpd_to_actual(vpd / 10.0, self.tair),
        }
    }
}

/// Daily net radiation (MJ m-2 d-1), FAO-56 eqs. 37-40.
pub fn net_radiation(input: &NetRadiationInput) -> f64 {
    let ra = extraterrestrial_radiation(input.doy, input.latitude);
    let clear_sky = (0.75 + 2e-5 * input.elevation) * ra;
    // Relative shortwave radiation, capped at clear sky; taken as clear under polar night.
    let relative = if clear_sky > 0.0 {
        (input.rad / clear_sky).min(1.0)
    } else {
        1.0
    };
    let vapour = input.actual_vapour_pressure().max(0.0);
    let longwave = SIGMA
        * ((input.tmax + KELVIN).powi(4) + (input.tmin + KELVIN).powi(4))
        / 2.0
        * (0.34 - 0.14 * vapour.sqrt())
        * (1.35 * relative - 0.35);

    (1.0 - input.albedo) * input.rad - longwave
}

/// Daily diffuse fraction of incident radiation, Spitters et al. (1986).
pub fn diffuse_fraction(doy: u32, rad: f64, latitude: f64) -> f64 {
    let ra = extraterrestrial_radiation(doy, latitude);
    if ra <= 0.0 {
        return 1.0;
    }
    let transmissivity = rad / ra;
    if transmissivity < 0.07 {
        1.0
    } else if transmissivity < 0.35 {
        1.0 - 2.3 * (transmissivity - 0.07).powi(2)
    } else if transmissivity < 0.75 {
        1.33 - 1.46 * transmissivity
    } else {
        0.23
    }
}
