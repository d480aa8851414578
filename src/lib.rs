//! Resolve incomplete daily weather records into complete crop-model forcing tables.
//!
//! A raw daily table (a polars [`polars::frame::DataFrame`]) may lack any of the
//! meteorological variables a crop model needs. [`MeteoEngine`] fills them in a fixed
//! dependency order: each variable is taken from the input, derived from variables
//! resolved before it (with a warning), or reported as a terminating error. The result
//! is a [`MeteoTable`] with exactly the [`CANONICAL_VARIABLES`] and their units.

mod assembly;
mod degree_days;
mod engine;
mod error;
mod escalation;
mod filtering;
mod input;
mod physics;
mod presence;
mod types;

pub use assembly::MeteoTable;
pub use degree_days::{gdd, gdd_from_extremes, gdd_series, DEFAULT_MAX_TT, DEFAULT_MIN_TT};
pub use engine::dry_days::days_without_rain;
pub use engine::error::ResolutionError;
pub use engine::{MeteoEngine, DEFAULT_TIME_ZONE};
pub use error::MeteoError;
pub use escalation::{warn_var, Diagnostic, Resolution, Severity};
pub use input::csv::{read_meteo_csv, read_meteo_csv_str};
pub use input::error::InputError;
pub use input::parameters::{parse_parameters, read_parameters};
pub use physics::{Humidity, MeteoPhysics, NetRadiationInput, StandardPhysics};
pub use presence::{column_missing, is_missing, parameter_missing, FieldSource};

pub use types::parameters::{keys, ParamValue, Parameters};
pub use types::period::Period;
pub use types::traits::any_date::AnyDate;
pub use types::traits::types::{StartEndDate, Year};
pub use types::variables::{UnitTable, CANONICAL_VARIABLES, IDENTIFIER_VARIABLES};

/// Individual physical relations, for callers that need them outside the engine.
pub mod formulas {
    pub use crate::physics::atmosphere::{air_density, pressure_from_elevation, virtual_temperature};
    pub use crate::physics::humidity::{rh_to_vpd, saturation_vapour_pressure, vpd_to_actual, vpd_to_rh};
    pub use crate::physics::radiation::{diffuse_fraction, net_radiation};
    pub use crate::physics::solar::{
        declination, equation_of_time, extraterrestrial_radiation, solar_zenith_angle,
    };
}
