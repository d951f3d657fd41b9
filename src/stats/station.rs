use super::frequency;
use crate::error::Result;
use crate::trips::{END_STATION, START_STATION, TripTable};
use crate::utils::fmt_or_na;
use polars::prelude::*;
use std::fmt;
use std::io::Write;

/// Joins start and end station names into a trip label.
pub const PAIR_SEPARATOR: &str = " , ";

const TRIP: &str = "trip";

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Option<String>,
    pub end: Option<String>,
    pub trip: Option<String>,
}

pub fn compute(table: &TripTable) -> Result<StationStats> {
    // A trip with either station missing has no pair label.
    let pairs = table
        .frame()
        .clone()
        .lazy()
        .select([concat_str(
            [
                col(START_STATION).cast(DataType::String),
                col(END_STATION).cast(DataType::String),
            ],
            PAIR_SEPARATOR,
            false,
        )
        .alias(TRIP)])
        .collect()?;

    Ok(StationStats {
        start: frequency::text_mode(table.series(START_STATION)?)?,
        end: frequency::text_mode(table.series(END_STATION)?)?,
        trip: frequency::text_mode(pairs.column(TRIP)?.as_materialized_series())?,
    })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    super::run_report(out, "Calculating The Most Popular Stations and Trip...", || {
        compute(table)
    })
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most popular start station: {}", fmt_or_na(self.start.as_deref()))?;
        writeln!(f, "Most popular end station: {}", fmt_or_na(self.end.as_deref()))?;
        writeln!(
            f,
            "Most popular combination of stations: {}",
            fmt_or_na(self.trip.as_deref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{DAY_OF_WEEK, MONTH, START_TIME, TRIP_DURATION, USER_TYPE};

    fn table(starts: &[Option<&str>], ends: &[Option<&str>]) -> Result<TripTable> {
        let n = starts.len();
        let df = df!(
            START_TIME => vec!["2017-01-01 00:00:00"; n],
            START_STATION => starts,
            END_STATION => ends,
            TRIP_DURATION => vec![60i64; n],
            USER_TYPE => vec!["Customer"; n],
            MONTH => vec!["January"; n],
            DAY_OF_WEEK => vec!["Sunday"; n]
        )?;
        TripTable::new(df)
    }

    #[test]
    fn test_popular_stations_and_pair() -> Result<()> {
        let stats = compute(&table(
            &[Some("Canal St"), Some("Lake Shore"), Some("Lake Shore"), Some("Canal St")],
            &[Some("Clark St"), Some("Canal St"), Some("Canal St"), Some("Lake Shore")],
        )?)?;
        assert_eq!(stats.start.as_deref(), Some("Canal St"));
        assert_eq!(stats.end.as_deref(), Some("Canal St"));
        assert_eq!(stats.trip.as_deref(), Some("Lake Shore , Canal St"));
        Ok(())
    }

    #[test]
    fn test_missing_station_is_skipped() -> Result<()> {
        let stats = compute(&table(
            &[None, None, Some("A")],
            &[Some("B"), Some("B"), Some("C")],
        )?)?;
        assert_eq!(stats.start.as_deref(), Some("A"));
        assert_eq!(stats.end.as_deref(), Some("B"));
        assert_eq!(stats.trip.as_deref(), Some("A , C"));
        Ok(())
    }

    #[test]
    fn test_report_output() -> Result<()> {
        let table = table(&[Some("A")], &[Some("B")])?;
        let mut out = Vec::new();
        report(&table, &mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Most popular start station: A"));
        assert!(text.contains("Most popular combination of stations: A , B"));
        assert!(text.ends_with(&format!("{}\n", super::super::SEPARATOR)));
        Ok(())
    }
}
