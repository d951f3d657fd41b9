//! The four statistics reports printed for every loaded table.
//!
//! Each submodule exposes a `compute` function returning a plain result struct
//! and a `report` function that prints it. Reports only read the table.

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

use crate::error::Result;
use crate::trips::TripTable;
use std::fmt;
use std::io::Write;
use std::time::Instant;

pub const SEPARATOR: &str = "----------------------------------------";

/// Runs all four reports in order.
pub fn report_all<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    time::report(table, out)?;
    station::report(table, out)?;
    duration::report(table, out)?;
    user::report(table, out)?;
    Ok(())
}

fn run_report<W, S, F>(out: &mut W, heading: &str, compute: F) -> Result<()>
where
    W: Write,
    S: fmt::Display,
    F: FnOnce() -> Result<S>,
{
    writeln!(out, "\n{heading}\n")?;

    let started = Instant::now();
    let stats = compute()?;
    write!(out, "{stats}")?;
    let elapsed = started.elapsed();

    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")?;

    tracing::debug!(heading, elapsed_us = elapsed.as_micros() as u64, "report finished");
    Ok(())
}
