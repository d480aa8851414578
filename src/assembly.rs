//! Final projection of a resolved table.

use crate::engine::error::ResolutionError;
use crate::engine::working::WorkingTable;
use crate::escalation::Diagnostic;
use crate::types::variables::{UnitTable, CANONICAL_VARIABLES, IDENTIFIER_VARIABLES};
use log::info;
use polars::frame::DataFrame;

const DECIMALS: i32 = 4;

/// A complete daily meteo table: the 20 canonical columns, their units, and the
/// warnings raised while resolving it.
#[derive(Debug, Clone)]
pub struct MeteoTable {
    /// One row per day, columns in [`CANONICAL_VARIABLES`] order.
    pub frame: DataFrame,
    pub units: UnitTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl MeteoTable {
    pub fn unit(&self, variable: &str) -> Option<&'static str> {
        self.units.get(variable)
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Warnings raised for `variable`.
    pub fn diagnostics_for<'a>(&'a self, variable: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.variable == variable)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Projects `table` onto the canonical columns and rounds every non-identifier column.
pub(crate) fn assemble(
    mut table: WorkingTable,
    diagnostics: Vec<Diagnostic>,
) -> Result<MeteoTable, ResolutionError> {
    table.project(&CANONICAL_VARIABLES)?;
    for name in CANONICAL_VARIABLES
        .iter()
        .filter(|name| !IDENTIFIER_VARIABLES.contains(*name))
    {
        let rounded = table
            .values(name)?
            .into_iter()
            .map(|value| round_to(value, DECIMALS))
            .collect();
        table.set(name, rounded)?;
    }

    let frame = table.into_frame();
    info!(
        "Meteo computation done: {} days, {} warnings",
        frame.height(),
        diagnostics.len()
    );
    Ok(MeteoTable {
        frame,
        units: UnitTable::default(),
        diagnostics,
    })
}
