use crate::error::Result;
use crate::trips::{self, TRIP_DURATION, TripTable};
use crate::utils::fmt_opt;
use polars::prelude::ChunkAgg as _;
use std::fmt;
use std::io::Write;

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: Option<f64>,
}

pub fn compute(table: &TripTable) -> Result<DurationStats> {
    let durations = trips::float_values(table.series(TRIP_DURATION)?)?;
    Ok(DurationStats {
        total: durations.sum().unwrap_or(0.0),
        mean: durations.mean(),
    })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    super::run_report(out, "Calculating Trip Duration...", || compute(table))
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total time travelled: {} seconds.", fmt_opt(Some(self.total)))?;
        writeln!(f, "Average time travelled: {} seconds.", fmt_opt(self.mean))
    }
}
