//! Canonical variable names of a resolved daily meteo table and their units.

use serde::Serialize;

pub const YEAR: &str = "year";
pub const DOY: &str = "DOY";
pub const DATE: &str = "Date";
pub const RAIN: &str = "Rain";
pub const TAIR: &str = "Tair";
pub const RH: &str = "RH";
pub const RAD: &str = "RAD";
pub const PRESSURE: &str = "Pressure";
pub const WIND_SPEED: &str = "WindSpeed";
pub const CO2: &str = "CO2";
pub const DEGREE_DAYS: &str = "DegreeDays";
pub const PAR: &str = "PAR";
pub const FDIFF: &str = "FDiff";
pub const VPD: &str = "VPD";
pub const RN: &str = "Rn";
pub const TMAX: &str = "Tmax";
pub const TMIN: &str = "Tmin";
pub const DAYS_WITHOUT_RAIN: &str = "DaysWithoutRain";
pub const AIR_DENSITY: &str = "Air_Density";
pub const ZEN: &str = "ZEN";

/// Column order of every resolved table.
pub const CANONICAL_VARIABLES: [&str; 20] = [
    YEAR,
    DOY,
    DATE,
    RAIN,
    TAIR,
    RH,
    RAD,
    PRESSURE,
    WIND_SPEED,
    CO2,
    DEGREE_DAYS,
    PAR,
    FDIFF,
    VPD,
    RN,
    TMAX,
    TMIN,
    DAYS_WITHOUT_RAIN,
    AIR_DENSITY,
    ZEN,
];

/// Calendar identifiers, never rounded.
pub const IDENTIFIER_VARIABLES: [&str; 3] = [YEAR, DOY, DATE];

const UNITS: [(&str, &str); 20] = [
    (YEAR, "year"),
    (DOY, "day"),
    (DATE, "date"),
    (RAIN, "mm"),
    (TAIR, "Celsius"),
    (RH, "%"),
    (RAD, "MJ m-2 d-1"),
    (PRESSURE, "hPa"),
    (WIND_SPEED, "m s-1"),
    (CO2, "ppm"),
    (DEGREE_DAYS, "Celsius"),
    (PAR, "MJ m-2 d-1"),
    (FDIFF, "Fraction"),
    (VPD, "hPa"),
    (RN, "MJ m-2 d-1"),
    (TMAX, "Celsius"),
    (TMIN, "Celsius"),
    (DAYS_WITHOUT_RAIN, "day"),
    (AIR_DENSITY, "kg m-3"),
    (ZEN, "rad"),
];

/// Physical unit of each canonical variable, in canonical column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitTable {
    units: Vec<(&'static str, &'static str)>,
}

impl UnitTable {
    pub fn get(&self, variable: &str) -> Option<&'static str> {
        self.units
            .iter()
            .find(|(name, _)| *name == variable)
            .map(|(_, unit)| *unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.units.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            units: UNITS.to_vec(),
        }
    }
}
