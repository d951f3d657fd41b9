use super::frequency;
use crate::error::Result;
use crate::trips::{DAY_OF_WEEK, MONTH, START_TIME, TripTable};
use crate::utils::fmt_or_na;
use polars::prelude::*;
use std::fmt;
use std::io::Write;

const HOUR: &str = "hour";

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<String>,
    pub day: Option<String>,
    pub hour: Option<i64>,
}

pub fn compute(table: &TripTable) -> Result<TimeStats> {
    let month = frequency::text_mode(table.series(MONTH)?)?;
    let day = frequency::text_mode(table.series(DAY_OF_WEEK)?)?;

    let hours = table
        .frame()
        .clone()
        .lazy()
        .select([col(START_TIME).dt().hour().alias(HOUR)])
        .collect()?;
    let hour = frequency::integer_mode(hours.column(HOUR)?.as_materialized_series())?;

    Ok(TimeStats { month, day, hour })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    super::run_report(out, "Calculating The Most Frequent Times of Travel...", || {
        compute(table)
    })
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most popular month of travel: {}", fmt_or_na(self.month.as_deref()))?;
        writeln!(f, "Most popular day of travel: {}", fmt_or_na(self.day.as_deref()))?;
        writeln!(f, "Most popular hour of travel: {}", fmt_or_na(self.hour))
    }
}
