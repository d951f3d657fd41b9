//! The in-memory trip table handed from the loader to the reporters.

use crate::error::{BikeshareError, Result};
use polars::prelude::*;

pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Layout of `Start Time` and `End Time` in every city's CSV.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Derived from `Start Time` at load time.
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";

/// Columns every city's dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

/// Demographic columns only some cities record.
#[derive(Debug, Clone)]
pub struct Demographics {
    pub gender: Option<Series>,
    pub birth_year: Option<Series>,
}

/// One row per trip, already filtered. Read-only once built.
#[derive(Debug, Clone)]
pub struct TripTable {
    frame: DataFrame,
    demographics: Demographics,
}

impl TripTable {
    /// Wraps a prepared frame, checking the required columns and capturing the
    /// optional demographic columns when present.
    pub fn new(frame: DataFrame) -> Result<Self> {
        for name in REQUIRED_COLUMNS.into_iter().chain([MONTH, DAY_OF_WEEK]) {
            if frame.get_column_index(name).is_none() {
                return Err(BikeshareError::MissingColumn(name.to_owned()));
            }
        }

        let demographics = Demographics {
            gender: optional_series(&frame, GENDER),
            birth_year: optional_series(&frame, BIRTH_YEAR),
        };

        Ok(Self {
            frame,
            demographics,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn gender(&self) -> Option<&Series> {
        self.demographics.gender.as_ref()
    }

    pub fn birth_year(&self) -> Option<&Series> {
        self.demographics.birth_year.as_ref()
    }

    pub fn series(&self, name: &str) -> Result<&Series> {
        self.frame
            .column(name)
            .map(Column::as_materialized_series)
            .map_err(|_| BikeshareError::MissingColumn(name.to_owned()))
    }

    /// Rows `[offset, offset + len)`, clipped to the end of the table.
    pub fn window(&self, offset: usize, len: usize) -> DataFrame {
        let offset = offset.min(self.height());
        self.frame.slice(offset as i64, len)
    }
}

fn optional_series(frame: &DataFrame, name: &str) -> Option<Series> {
    frame
        .column(name)
        .ok()
        .map(|column| column.as_materialized_series().clone())
}

/// Collects a text column, casting first when Polars inferred another type
/// (e.g. an all-null column).
pub fn text_values(series: &Series) -> Result<Vec<Option<String>>> {
    let casted = series.cast(&DataType::String)?;
    let ca = casted.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_owned)).collect())
}

pub fn float_values(series: &Series) -> Result<Float64Chunked> {
    let casted = series.cast(&DataType::Float64)?;
    Ok(casted.f64()?.clone())
}

pub fn integer_values(series: &Series) -> Result<Int64Chunked> {
    let casted = series.cast(&DataType::Int64)?;
    Ok(casted.i64()?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(with_demographics: bool) -> PolarsResult<DataFrame> {
        let mut df = df!(
            START_TIME => &["2017-01-01 09:00:00", "2017-01-02 10:00:00", "2017-01-03 11:00:00"],
            START_STATION => &["A", "B", "C"],
            END_STATION => &["B", "C", "A"],
            TRIP_DURATION => &[60.0, 120.0, 180.0],
            USER_TYPE => &["Subscriber", "Customer", "Subscriber"],
            MONTH => &["January", "January", "January"],
            DAY_OF_WEEK => &["Sunday", "Monday", "Tuesday"]
        )?;
        if with_demographics {
            df.with_column(Series::new(GENDER.into(), &["Male", "Female", "Male"]))?;
            df.with_column(Series::new(BIRTH_YEAR.into(), &[1980.0, 1990.0, 1985.0]))?;
        }
        Ok(df)
    }

    #[test]
    fn test_optional_columns_captured() -> Result<()> {
        let table = TripTable::new(frame(true)?)?;
        assert!(table.gender().is_some());
        assert!(table.birth_year().is_some());

        let table = TripTable::new(frame(false)?)?;
        assert!(table.gender().is_none());
        assert!(table.birth_year().is_none());
        Ok(())
    }

    #[test]
    fn test_missing_required_column() -> Result<()> {
        let df = frame(false)?.drop(USER_TYPE)?;
        let err = TripTable::new(df).unwrap_err();
        assert!(matches!(err, BikeshareError::MissingColumn(name) if name == USER_TYPE));
        Ok(())
    }

    #[test]
    fn test_window_clips_to_table() -> Result<()> {
        let table = TripTable::new(frame(false)?)?;
        assert_eq!(table.window(0, 2).height(), 2);
        assert_eq!(table.window(2, 5).height(), 1);
        assert_eq!(table.window(3, 5).height(), 0);
        assert_eq!(table.window(10, 5).height(), 0);
        Ok(())
    }

    #[test]
    fn test_value_helpers() -> Result<()> {
        let table = TripTable::new(frame(true)?)?;
        let stations = text_values(table.series(START_STATION)?)?;
        assert_eq!(stations[1].as_deref(), Some("B"));
        let years = integer_values(table.birth_year().unwrap())?;
        assert_eq!(
            (&years).into_iter().collect::<Vec<_>>(),
            vec![Some(1980), Some(1990), Some(1985)]
        );
        assert_eq!(years.min(), Some(1980));
        let durations = float_values(table.series(TRIP_DURATION)?)?;
        assert_eq!(durations.sum(), Some(360.0));
        Ok(())
    }
}
