//! Physical relations the resolution engine delegates to.
//!
//! The engine only talks to [`MeteoPhysics`]; [`StandardPhysics`] wires it to the
//! functions of the submodules. Units follow the submodules: Celsius, kPa, m,
//! MJ m-2 d-1, decimal degrees, radians.

pub mod atmosphere;
pub mod humidity;
pub mod radiation;
pub mod solar;

use chrono::NaiveDateTime;
pub use radiation::{Humidity, NetRadiationInput};

/// Collaborators used to derive variables that cannot be read from the input.
pub trait MeteoPhysics {
    /// Solar zenith angle (rad) at a UTC instant.
    fn solar_zenith(&self, instant: NaiveDateTime, latitude: f64, longitude: f64) -> f64;

    /// Vapour pressure deficit (kPa) from relative humidity as a fraction.
    fn rh_to_vpd(&self, rh: f64, tair: f64) -> f64;

    /// Relative humidity as a fraction from the vapour pressure deficit (kPa).
    fn vpd_to_rh(&self, vpd: f64, tair: f64) -> f64;

    /// Atmospheric pressure (kPa) at `elevation`, optionally corrected with the VPD (kPa).
    fn pressure_from_elevation(&self, elevation: f64, tair: f64, vpd: Option<f64>) -> f64;

    /// Air density (kg m-3) from temperature and pressure (kPa).
    fn air_density(&self, tair: f64, pressure: f64) -> f64;

    /// Daily net radiation (MJ m-2 d-1).
    fn net_radiation(&self, input: &NetRadiationInput) -> f64;

    /// Daily diffuse fraction of incident radiation.
    fn diffuse_fraction(&self, doy: u32, rad: f64, latitude: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPhysics;

impl MeteoPhysics for StandardPhysics {
    fn solar_zenith(&self, instant: NaiveDateTime, latitude: f64, longitude: f64) -> f64 {
        solar::solar_zenith_angle(instant, latitude, longitude)
    }

    fn rh_to_vpd(&self, rh: f64, tair: f64) -> f64 {
        humidity::rh_to_vpd(rh, tair)
    }

    fn vpd_to_rh(&self, vpd: f64, tair: f64) -> f64 {
        humidity::vpd_to_rh(vpd, tair)
    }

    fn pressure_from_elevation(&self, elevation: f64, tair: f64, vpd: Option<f64>) -> f64 {
        atmosphere::pressure_from_elevation(elevation, tair, vpd)
    }

    fn air_density(&self, tair: f64, pressure: f64) -> f64 {
        atmosphere::air_density(tair, pressure)
    }

    fn net_radiation(&self, input: &NetRadiationInput) -> f64 {
        radiation::net_radiation(input)
    }

    fn diffuse_fraction(&self, doy: u32, rad: f64, latitude: f64) -> f64 {
        radiation::diffuse_fraction(doy, rad, latitude)
    }
}
