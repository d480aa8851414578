//! The fixed resolution order.
//!
//! Each step declares the resolved columns it depends on, the raw input columns it
//! may fall back to, and the columns it produces. A step may only depend on columns
//! produced by an earlier step.

use crate::degree_days::{gdd_series, DEFAULT_MAX_TT, DEFAULT_MIN_TT};
use crate::engine::dry_days::days_without_rain;
use crate::engine::error::ResolutionError;
use crate::engine::period::clip_period;
use crate::engine::working::WorkingTable;
use crate::escalation::{warn_var, Diagnostic, Resolution, Severity};
use crate::physics::{Humidity, MeteoPhysics, NetRadiationInput};
use crate::presence::parameter_missing;
use crate::types::parameters::{keys, Parameters};
use crate::types::period::Period;
use crate::types::variables::*;
use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, warn};

const PAR_FLOOR: f64 = 0.1;
const WIND_SPEED_FLOOR: f64 = 0.01;
const PERIOD: &str = "Period";

/// State threaded through the steps of one resolution.
pub(crate) struct Resolver<'a> {
    pub table: WorkingTable,
    pub parameters: &'a Parameters,
    pub physics: &'a dyn MeteoPhysics,
    pub period: Option<Period>,
    pub time_zone: &'a str,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        table: WorkingTable,
        parameters: &'a Parameters,
        physics: &'a dyn MeteoPhysics,
        period: Option<Period>,
        time_zone: &'a str,
    ) -> Self {
        Self {
            table,
            parameters,
            physics,
            period,
            time_zone,
            diagnostics: Vec::new(),
        }
    }

    fn escalate(
        &mut self,
        variable: &str,
        replacement: Option<&str>,
        severity: Severity,
    ) -> Result<(), ResolutionError> {
        match warn_var(variable, replacement, severity) {
            Resolution::Resolved => Ok(()),
            Resolution::Warned(message) => {
                self.notice(variable, message);
                Ok(())
            }
            Resolution::Failed(message) => Err(ResolutionError::MissingVariable {
                variable: variable.to_string(),
                message,
            }),
        }
    }

    fn notice(&mut self, variable: &str, message: String) {
        warn!("{}", message);
        self.diagnostics.push(Diagnostic {
            variable: variable.to_string(),
            message,
        });
    }

    /// Numeric parameter `key` needed to produce `variable`; fails when it is absent.
    fn require_parameter(&mut self, key: &str, variable: &str) -> Result<f64, ResolutionError> {
        if parameter_missing(self.parameters, key) {
            self.escalate(variable, Some(&format!("the {key} parameter")), Severity::Error)?;
        }
        self.numeric_parameter(key)
    }

    /// Numeric parameter `key`, or `default` with a warning when it is absent.
    fn parameter_or(&mut self, key: &str, default: f64, variable: &str) -> Result<f64, ResolutionError> {
        if parameter_missing(self.parameters, key) {
            self.notice(
                variable,
                format!("{key} parameter missing, using {default} to compute {variable}"),
            );
            return Ok(default);
        }
        self.numeric_parameter(key)
    }

    fn numeric_parameter(&self, key: &str) -> Result<f64, ResolutionError> {
        self.parameters
            .number(key)
            .ok_or_else(|| ResolutionError::InvalidParameter {
                key: key.to_string(),
                expected: "a number",
            })
    }

    fn floor_column(&mut self, name: &str, floor: f64) -> Result<(), ResolutionError> {
        let floored = self
            .table
            .values(name)?
            .into_iter()
            .map(|value| if value < floor { floor } else { value })
            .collect();
        self.table.set(name, floored)
    }
}

type StepFn = fn(&mut Resolver<'_>) -> Result<(), ResolutionError>;

pub(crate) struct ResolutionStep {
    pub name: &'static str,
    /// Columns that must already be resolved.
    pub inputs: &'static [&'static str],
    /// Raw input columns read, when present, before they are resolved.
    pub raw_inputs: &'static [&'static str],
    pub produces: &'static [&'static str],
    pub run: StepFn,
}

pub(crate) const RESOLUTION_ORDER: &[ResolutionStep] = &[
    ResolutionStep {
        name: "date",
        inputs: &[],
        raw_inputs: &[],
        produces: &[DATE],
        run: resolve_date,
    },
    ResolutionStep {
        name: "period",
        inputs: &[DATE],
        raw_inputs: &[],
        produces: &[],
        run: restrict_period,
    },
    ResolutionStep {
        name: "shortwave radiation",
        inputs: &[],
        raw_inputs: &[PAR],
        produces: &[RAD],
        run: resolve_rad,
    },
    ResolutionStep {
        name: "photosynthetically active radiation",
        inputs: &[RAD],
        raw_inputs: &[],
        produces: &[PAR],
        run: resolve_par,
    },
    ResolutionStep {
        name: "temperature extremes",
        inputs: &[],
        raw_inputs: &[],
        produces: &[TMAX, TMIN],
        run: require_temperature_extremes,
    },
    ResolutionStep {
        name: "air temperature",
        inputs: &[TMAX, TMIN],
        raw_inputs: &[],
        produces: &[TAIR],
        run: resolve_tair,
    },
    ResolutionStep {
        name: "vapour pressure deficit",
        inputs: &[TAIR],
        raw_inputs: &[RH],
        produces: &[VPD],
        run: resolve_vpd,
    },
    ResolutionStep {
        name: "pressure",
        inputs: &[TAIR, VPD],
        raw_inputs: &[],
        produces: &[PRESSURE],
        run: resolve_pressure,
    },
    ResolutionStep {
        name: "rain",
        inputs: &[],
        raw_inputs: &[],
        produces: &[RAIN],
        run: resolve_rain,
    },
    ResolutionStep {
        name: "wind speed",
        inputs: &[],
        raw_inputs: &[],
        produces: &[WIND_SPEED],
        run: resolve_wind_speed,
    },
    ResolutionStep {
        name: "CO2",
        inputs: &[],
        raw_inputs: &[],
        produces: &[CO2],
        run: resolve_co2,
    },
    ResolutionStep {
        name: "degree days",
        inputs: &[TMAX, TMIN],
        raw_inputs: &[],
        produces: &[DEGREE_DAYS],
        run: resolve_degree_days,
    },
    ResolutionStep {
        name: "diffuse fraction",
        inputs: &[DATE, RAD],
        raw_inputs: &[],
        produces: &[FDIFF],
        run: resolve_fdiff,
    },
    ResolutionStep {
        name: "calendar",
        inputs: &[DATE],
        raw_inputs: &[],
        produces: &[YEAR, DOY],
        run: compute_calendar,
    },
    ResolutionStep {
        name: "solar zenith angle",
        inputs: &[DATE],
        raw_inputs: &[],
        produces: &[ZEN],
        run: compute_zenith,
    },
    ResolutionStep {
        name: "net radiation",
        inputs: &[DOY, RAD, TMAX, TMIN, TAIR, VPD],
        raw_inputs: &[RH],
        produces: &[RN],
        run: compute_net_radiation,
    },
    ResolutionStep {
        name: "days without rain",
        inputs: &[RAIN],
        raw_inputs: &[],
        produces: &[DAYS_WITHOUT_RAIN],
        run: compute_days_without_rain,
    },
    ResolutionStep {
        name: "air density",
        inputs: &[TAIR, PRESSURE],
        raw_inputs: &[],
        produces: &[AIR_DENSITY],
        run: compute_air_density,
    },
    ResolutionStep {
        name: "relative humidity",
        inputs: &[TAIR, VPD],
        raw_inputs: &[],
        produces: &[RH],
        run: resolve_rh,
    },
];

/// Start of the daily sequence when neither a Date column nor `Start_Date` is given.
fn fallback_start_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2000, 1, 1)
}

fn resolve_date(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(DATE) {
        let dates = r.table.dates(DATE)?;
        r.table.set_dates(DATE, &dates)?;
        // Running counters downstream read rows in date order.
        return r.table.sort_by(DATE);
    }

    let (start, source) = if parameter_missing(r.parameters, keys::START_DATE) {
        let start = fallback_start_date().ok_or(ResolutionError::DateOutOfRange)?;
        (start, format!("a daily sequence from {start} (no Start_Date parameter)"))
    } else {
        let start = r
            .parameters
            .date(keys::START_DATE)
            .ok_or_else(|| ResolutionError::InvalidParameter {
                key: keys::START_DATE.to_string(),
                expected: "a date (YYYY-MM-DD)",
            })?;
        (start, format!("a daily sequence from the Start_Date parameter ({start})"))
    };

    let dates = (0..r.table.height())
        .map(|offset| {
            start
                .checked_add_signed(Duration::days(offset as i64))
                .ok_or(ResolutionError::DateOutOfRange)
        })
        .collect::<Result<Vec<_>, _>>()?;
    r.table.set_dates(DATE, &dates)?;
    r.escalate(DATE, Some(&source), Severity::Warn)
}

fn restrict_period(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    let Some(requested) = r.period else {
        return Ok(());
    };
    let dates = r.table.dates(DATE)?;
    let period = match (dates.iter().min(), dates.iter().max()) {
        (Some(&first), Some(&last)) => {
            let clipped = clip_period(requested, first, last);
            for notice in clipped.notices {
                r.notice(PERIOD, notice);
            }
            clipped.period
        }
        _ => requested,
    };
    debug!("Restricting meteo data to {}", period);
    r.table.retain_period(period)
}

fn resolve_rad(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(RAD) {
        return Ok(());
    }
    if !r.table.has(PAR) {
        return r.escalate(RAD, Some(PAR), Severity::Error);
    }
    let fpar = r.require_parameter(keys::FPAR, RAD)?;
    let rad = r.table.values(PAR)?.into_iter().map(|par| par / fpar).collect();
    r.table.set(RAD, rad)?;
    r.escalate(RAD, Some("PAR and the FPAR parameter"), Severity::Warn)
}

fn resolve_par(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if !r.table.has(PAR) {
        let fpar = r.require_parameter(keys::FPAR, PAR)?;
        let par = r.table.values(RAD)?.into_iter().map(|rad| rad * fpar).collect();
        r.table.set(PAR, par)?;
        r.escalate(PAR, Some("RAD and the FPAR parameter"), Severity::Warn)?;
    }
    r.floor_column(PAR, PAR_FLOOR)
}

fn require_temperature_extremes(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    for variable in [TMAX, TMIN] {
        if !r.table.has(variable) {
            r.escalate(variable, None, Severity::Error)?;
        }
    }
    Ok(())
}

fn resolve_tair(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(TAIR) {
        return Ok(());
    }
    let tmax = r.table.values(TMAX)?;
    let tmin = r.table.values(TMIN)?;
    // Half the diurnal range, not the mean of the extremes.
    let tair = tmax.iter().zip(&tmin).map(|(high, low)| (high - low) / 2.0).collect();
    r.table.set(TAIR, tair)?;
    r.escalate(TAIR, Some("Tmax and Tmin"), Severity::Warn)
}

fn resolve_vpd(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(VPD) {
        return Ok(());
    }
    if !r.table.has(RH) {
        return r.escalate(VPD, Some(RH), Severity::Error);
    }
    let rh = r.table.values(RH)?;
    let tair = r.table.values(TAIR)?;
    let vpd = rh
        .iter()
        .zip(&tair)
        .map(|(&rh, &tair)| r.physics.rh_to_vpd(rh / 100.0, tair) * 10.0)
        .collect();
    r.table.set(VPD, vpd)?;
    r.escalate(VPD, Some("RH and Tair"), Severity::Warn)
}

fn resolve_pressure(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(PRESSURE) {
        return Ok(());
    }
    let elevation = r.require_parameter(keys::ELEVATION, PRESSURE)?;
    let tair = r.table.values(TAIR)?;
    let vpd = if r.table.has(VPD) {
        Some(r.table.values(VPD)?)
    } else {
        None
    };
    let pressure = tair
        .iter()
        .enumerate()
        .map(|(row, &tair)| {
            let vpd_kpa = vpd.as_ref().map(|vpd| vpd[row] / 10.0);
            r.physics.pressure_from_elevation(elevation, tair, vpd_kpa) * 10.0
        })
        .collect();
    r.table.set(PRESSURE, pressure)?;
    let source = if vpd.is_some() {
        "the Elevation parameter, Tair and VPD"
    } else {
        "the Elevation parameter and Tair"
    };
    r.escalate(PRESSURE, Some(source), Severity::Warn)
}

fn resolve_rain(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(RAIN) {
        return Ok(());
    }
    r.table.set(RAIN, vec![0.0; r.table.height()])?;
    r.escalate(RAIN, Some("a constant 0 (no rain)"), Severity::Warn)
}

fn resolve_constant(r: &mut Resolver<'_>, variable: &str, key: &str) -> Result<(), ResolutionError> {
    if r.table.has(variable) {
        return Ok(());
    }
    let value = r.require_parameter(key, variable)?;
    r.table.set(variable, vec![value; r.table.height()])?;
    r.escalate(variable, Some(&format!("the constant {key} parameter")), Severity::Warn)
}

fn resolve_wind_speed(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    resolve_constant(r, WIND_SPEED, keys::WIND_SPEED)?;
    r.floor_column(WIND_SPEED, WIND_SPEED_FLOOR)
}

fn resolve_co2(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    resolve_constant(r, CO2, keys::CO2)
}

fn resolve_degree_days(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(DEGREE_DAYS) {
        return Ok(());
    }
    let min_tt = r.parameter_or(keys::MIN_TT, DEFAULT_MIN_TT, DEGREE_DAYS)?;
    let max_tt = r.parameter_or(keys::MAX_TT, DEFAULT_MAX_TT, DEGREE_DAYS)?;
    let tmax = r.table.values(TMAX)?;
    let tmin = r.table.values(TMIN)?;
    r.table.set(DEGREE_DAYS, gdd_series(&tmax, &tmin, min_tt, max_tt))?;
    r.escalate(
        DEGREE_DAYS,
        Some("Tmax, Tmin and the MinTT and MaxTT parameters"),
        Severity::Warn,
    )
}

fn resolve_fdiff(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(FDIFF) {
        return Ok(());
    }
    let latitude = r.require_parameter(keys::LATITUDE, FDIFF)?;
    let dates = r.table.dates(DATE)?;
    let rad = r.table.values(RAD)?;
    let fdiff = dates
        .iter()
        .zip(&rad)
        .map(|(date, &rad)| r.physics.diffuse_fraction(date.ordinal(), rad, latitude))
        .collect();
    r.table.set(FDIFF, fdiff)?;
    r.escalate(FDIFF, Some("DOY, RAD and the Latitude parameter"), Severity::Warn)
}

fn compute_calendar(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    let dates = r.table.dates(DATE)?;
    r.table.set_i32(YEAR, dates.iter().map(|date| date.year()).collect())?;
    r.table
        .set_i32(DOY, dates.iter().map(|date| date.ordinal() as i32).collect())
}

/// `true` for the time zone names under which dates are read as UTC.
fn is_utc(time_zone: &str) -> bool {
    matches!(
        time_zone.trim().to_ascii_uppercase().as_str(),
        "UTC" | "GMT" | "ETC/UTC" | "ETC/GMT" | "Z"
    )
}

fn compute_zenith(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    let latitude = r.require_parameter(keys::LATITUDE, ZEN)?;
    let longitude = r.require_parameter(keys::LONGITUDE, ZEN)?;
    let correction_hours = if is_utc(r.time_zone) {
        r.parameter_or(keys::TIMEZONE_CF, 0.0, ZEN)?
    } else {
        r.notice(
            ZEN,
            format!(
                "Time zone {} differs from the parameter file time zone (UTC/GMT), \
                 TimezoneCF correction not applied",
                r.time_zone
            ),
        );
        0.0
    };
    // TimezoneCF is the offset (hours) from local clock time to UTC.
    let correction = Duration::try_seconds((correction_hours * 3600.0).round() as i64).ok_or_else(|| {
        ResolutionError::InvalidParameter {
            key: keys::TIMEZONE_CF.to_string(),
            expected: "an offset in hours",
        }
    })?;

    let zenith = r
        .table
        .dates(DATE)?
        .into_iter()
        .map(|date| {
            let instant = date
                .and_hms_opt(12, 0, 0)
                .and_then(|noon| noon.checked_add_signed(correction))
                .ok_or(ResolutionError::DateOutOfRange)?;
            Ok(r.physics.solar_zenith(instant, latitude, longitude))
        })
        .collect::<Result<Vec<_>, ResolutionError>>()?;
    r.table.set(ZEN, zenith)
}

fn compute_net_radiation(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    let albedo = r.require_parameter(keys::ALBEDO, RN)?;
    let latitude = r.require_parameter(keys::LATITUDE, RN)?;
    let elevation = r.parameter_or(keys::ELEVATION, 0.0, RN)?;

    let humidity: Vec<Humidity> = if r.table.has(RH) {
        r.table.values(RH)?.into_iter().map(Humidity::Relative).collect()
    } else {
        r.table.values(VPD)?.into_iter().map(Humidity::Deficit).collect()
    };
    let doy = r.table.values(DOY)?;
    let rad = r.table.values(RAD)?;
    let tmax = r.table.values(TMAX)?;
    let tmin = r.table.values(TMIN)?;
    let tair = r.table.values(TAIR)?;

    let rn = (0..r.table.height())
        .map(|row| {
            r.physics.net_radiation(&NetRadiationInput {
                doy: doy[row] as u32,
                rad: rad[row],
                tmax: tmax[row],
                tmin: tmin[row],
                tair: tair[row],
                humidity: humidity[row],
                latitude,
                elevation,
                albedo,
            })
        })
        .collect();
    r.table.set(RN, rn)
}

fn compute_days_without_rain(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    let rain = r.table.values(RAIN)?;
    r.table.set(DAYS_WITHOUT_RAIN, days_without_rain(&rain))
}

fn compute_air_density(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    let tair = r.table.values(TAIR)?;
    let pressure = r.table.values(PRESSURE)?;
    let density = tair
        .iter()
        .zip(&pressure)
        .map(|(&tair, &pressure)| r.physics.air_density(tair, pressure / 10.0))
        .collect();
    r.table.set(AIR_DENSITY, density)
}

fn resolve_rh(r: &mut Resolver<'_>) -> Result<(), ResolutionError> {
    if r.table.has(RH) {
        return Ok(());
    }
    let vpd = r.table.values(VPD)?;
    let tair = r.table.values(TAIR)?;
    let rh = vpd
        .iter()
        .zip(&tair)
        .map(|(&vpd, &tair)| r.physics.vpd_to_rh(vpd / 10.0, tair) * 100.0)
        .collect();
    r.table.set(RH, rh)?;
    r.escalate(RH, Some("VPD and Tair"), Severity::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_steps_only_depend_on_earlier_outputs() {
        let mut resolved: HashSet<&str> = HashSet::new();
        for step in RESOLUTION_ORDER {
            for input in step.inputs {
                assert!(
                    resolved.contains(input),
                    "step '{}' reads '{}' before it is resolved",
                    step.name,
                    input
                );
            }
            resolved.extend(step.produces.iter().copied());
        }
    }

    #[test]
    fn test_raw_inputs_are_read_before_resolution() {
        let mut resolved: HashSet<&str> = HashSet::new();
        for step in RESOLUTION_ORDER {
            for raw in step.raw_inputs {
                assert!(
                    CANONICAL_VARIABLES.contains(raw),
                    "step '{}' reads unknown column '{}'",
                    step.name,
                    raw
                );
                assert!(
                    !resolved.contains(raw) && !step.inputs.contains(raw),
                    "step '{}' lists '{}' as raw although it is already resolved",
                    step.name,
                    raw
                );
            }
            resolved.extend(step.produces.iter().copied());
        }
    }

    #[test]
    fn test_steps_produce_every_canonical_variable_once() {
        let produced: Vec<&str> = RESOLUTION_ORDER
            .iter()
            .flat_map(|step| step.produces.iter().copied())
            .collect();
        let unique: HashSet<&str> = produced.iter().copied().collect();
        assert_eq!(produced.len(), unique.len());
        assert_eq!(unique, CANONICAL_VARIABLES.iter().copied().collect());
    }

    #[test]
    fn test_is_utc() {
        assert!(is_utc("UTC"));
        assert!(is_utc("gmt"));
        assert!(is_utc("Etc/UTC"));
        assert!(!is_utc("Europe/Paris"));
    }
}
