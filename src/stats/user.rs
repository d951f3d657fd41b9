//! User demographics: user types for every city, gender and birth year where
//! the dataset records them.

use super::frequency;
use crate::error::Result;
use crate::trips::{self, TripTable, USER_TYPE};
use crate::utils::fmt_or_na;
use polars::prelude::{ChunkAgg as _, Series};
use std::fmt;
use std::io::Write;

/// Label for rows with no value in a counted column.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: Option<i64>,
    pub most_recent: Option<i64>,
    /// Every year sharing the highest count, ascending.
    pub most_common: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// `(value, count)` by descending count.
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the dataset has no birth-year column.
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute(table: &TripTable) -> Result<UserStats> {
    let user_types = value_counts(table.series(USER_TYPE)?)?;
    let genders = table.gender().map(value_counts).transpose()?;
    let birth_years = table.birth_year().map(birth_year_stats).transpose()?;

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

/// Counts every distinct value; missing values are counted as [`UNKNOWN`] so
/// the counts always add up to the row count.
pub fn value_counts(series: &Series) -> Result<Vec<(String, usize)>> {
    frequency::text_counts(series, Some(UNKNOWN))
}

fn birth_year_stats(series: &Series) -> Result<BirthYearStats> {
    let years = trips::integer_values(series)?;

    Ok(BirthYearStats {
        earliest: years.min(),
        most_recent: years.max(),
        most_common: frequency::integer_modes(series)?,
    })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    super::run_report(out, "Calculating User Stats...", || compute(table))
}

fn write_counts(f: &mut fmt::Formatter<'_>, title: &str, counts: &[(String, usize)]) -> fmt::Result {
    writeln!(f, "{title}:")?;
    if counts.is_empty() {
        return writeln!(f, "  {}", fmt_or_na::<&str>(None));
    }
    let width = counts
        .iter()
        .map(|(value, _)| value.chars().count())
        .max()
        .unwrap_or(0);
    for (value, count) in counts {
        writeln!(f, "  {value:<width$}  {count}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "Counts of user types", &self.user_types)?;

        if let Some(genders) = &self.genders {
            writeln!(f)?;
            write_counts(f, "Counts of gender", genders)?;
        }

        if let Some(years) = &self.birth_years {
            let most_common = if years.most_common.is_empty() {
                fmt_or_na::<&str>(None)
            } else {
                years
                    .most_common
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(f)?;
            writeln!(f, "Earliest year of birth: {}", fmt_or_na(years.earliest))?;
            writeln!(f, "Most recent year of birth: {}", fmt_or_na(years.most_recent))?;
            writeln!(f, "Most common year of birth: {most_common}")?;
        }
        Ok(())
    }
}
