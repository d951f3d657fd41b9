//! Loads a city's CSV into a [`TripTable`], deriving the month and weekday
//! columns and applying the month/day filters.

use crate::catalog;
use crate::error::{BikeshareError, Result, ResultExt as _};
use crate::filters::FilterSelection;
use crate::trips::{DAY_OF_WEEK, MONTH, START_TIME, TIMESTAMP_FORMAT, TripTable};
use chrono::{Month, Weekday};
use polars::prelude::*;
use std::path::Path;

/// Reads, prepares and filters the dataset for `selection`.
///
/// # Errors
///
/// Fails when the city's file is missing, unreadable, lacks a required column,
/// or has start times that cannot be parsed.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let path = selection.city.dataset_path(data_dir);
    let raw = read_trips(&path)?;
    let total = raw.height();

    let prepared = prepare_frame(raw)?;
    let filtered = apply_filters(prepared, selection.month, selection.day)?;

    tracing::info!(
        city = %selection.city,
        path = %path.display(),
        total_rows = total,
        filtered_rows = filtered.height(),
        "dataset loaded"
    );

    let table = TripTable::new(filtered)?;
    if table.is_empty() {
        tracing::warn!(%selection, "no trips match the selected filters");
    }
    Ok(table)
}

/// Reads the whole CSV file.
pub fn read_trips(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(BikeshareError::MissingDataset(path.to_path_buf()));
    }

    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_has_header(true)
        .with_try_parse_dates(true)
        .finish()?
        .collect()
        .with_context(|| format!("Failed to read CSV {}", path.display()))
}

/// Ensures `Start Time` is a datetime column and derives `month` and
/// `day_of_week` from it.
pub fn prepare_frame(df: DataFrame) -> Result<DataFrame> {
    let df = parse_start_time(df)?;

    let derived = df
        .lazy()
        .with_columns([
            col(START_TIME).dt().strftime("%B").alias(MONTH),
            col(START_TIME).dt().strftime("%A").alias(DAY_OF_WEEK),
        ])
        .collect()?;

    Ok(derived)
}

fn parse_start_time(df: DataFrame) -> Result<DataFrame> {
    let dtype = df
        .column(START_TIME)
        .map_err(|_| BikeshareError::MissingColumn(START_TIME.to_owned()))?
        .dtype()
        .clone();

    match dtype {
        DataType::Datetime(_, _) => Ok(df),
        DataType::String => parse_start_time_text(df),
        other => Err(malformed_start_time(format!("unexpected type {other}"))),
    }
}

/// Parses text timestamps in [`TIMESTAMP_FORMAT`]. Any value that does not
/// match fails the whole column.
fn parse_start_time_text(df: DataFrame) -> Result<DataFrame> {
    let nulls_before = df.column(START_TIME)?.null_count();

    let options = StrptimeOptions {
        format: Some(TIMESTAMP_FORMAT.into()),
        strict: true,
        ..Default::default()
    };
    let parsed = df
        .lazy()
        .with_column(col(START_TIME).str().to_datetime(
            Some(TimeUnit::Milliseconds),
            None,
            options,
            lit("raise"),
        ))
        .collect()
        .map_err(|e| malformed_start_time(e.to_string()))?;

    let nulls_after = parsed.column(START_TIME)?.null_count();
    if nulls_after > nulls_before {
        return Err(malformed_start_time(format!(
            "{} values are not date-times",
            nulls_after - nulls_before
        )));
    }
    Ok(parsed)
}

fn malformed_start_time(reason: String) -> BikeshareError {
    BikeshareError::MalformedColumn {
        column: START_TIME.to_owned(),
        reason,
    }
}

/// Keeps rows whose derived month and day match the filters. `None` means no
/// constraint.
pub fn apply_filters(
    df: DataFrame,
    month: Option<Month>,
    day: Option<Weekday>,
) -> Result<DataFrame> {
    let mut lf = df.lazy();

    if let Some(month) = month {
        lf = lf.filter(col(MONTH).eq(lit(catalog::month_title(month))));
    }

    if let Some(day) = day {
        lf = lf.filter(col(DAY_OF_WEEK).eq(lit(catalog::day_title(day))));
    }

    Ok(lf.collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{END_STATION, START_STATION, TRIP_DURATION, USER_TYPE};

    // 2017-01-01 is a Sunday, 2017-06-05 a Monday.
    fn raw_frame() -> PolarsResult<DataFrame> {
        df!(
            START_TIME => &[
                "2017-01-01 00:07:57",
                "2017-06-05 08:15:00",
                "2017-06-06 17:45:10",
                "2017-03-13 12:00:00",
                "2017-06-12 23:59:59",
            ],
            START_STATION => &["A", "B", "C", "D", "E"],
            END_STATION => &["B", "C", "D", "E", "A"],
            TRIP_DURATION => &[100, 200, 300, 400, 500],
            USER_TYPE => &["Subscriber", "Customer", "Subscriber", "Subscriber", "Customer"]
        )
    }

    fn text(df: &DataFrame, name: &str) -> Vec<String> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn test_prepare_derives_names() -> Result<()> {
        let df = prepare_frame(raw_frame()?)?;
        assert!(matches!(
            df.column(START_TIME)?.dtype(),
            DataType::Datetime(_, _)
        ));
        assert_eq!(
            text(&df, MONTH),
            vec!["January", "June", "June", "March", "June"]
        );
        assert_eq!(
            text(&df, DAY_OF_WEEK),
            vec!["Sunday", "Monday", "Tuesday", "Monday", "Monday"]
        );
        Ok(())
    }

    #[test]
    fn test_no_filters_is_identity() -> Result<()> {
        let prepared = prepare_frame(raw_frame()?)?;
        let filtered = apply_filters(prepared.clone(), None, None)?;
        assert!(filtered.equals(&prepared));
        Ok(())
    }

    #[test]
    fn test_month_filter() -> Result<()> {
        let df = apply_filters(prepare_frame(raw_frame()?)?, Some(Month::June), None)?;
        assert_eq!(text(&df, START_STATION), vec!["B", "C", "E"]);
        Ok(())
    }

    #[test]
    fn test_day_filter() -> Result<()> {
        let df = apply_filters(prepare_frame(raw_frame()?)?, None, Some(Weekday::Mon))?;
        assert_eq!(text(&df, START_STATION), vec!["B", "D", "E"]);
        Ok(())
    }

    #[test]
    fn test_both_filters() -> Result<()> {
        let df = apply_filters(
            prepare_frame(raw_frame()?)?,
            Some(Month::June),
            Some(Weekday::Mon),
        )?;
        assert_eq!(text(&df, START_STATION), vec!["B", "E"]);
        Ok(())
    }

    #[test]
    fn test_filters_can_empty_the_table() -> Result<()> {
        let df = apply_filters(
            prepare_frame(raw_frame()?)?,
            Some(Month::February),
            None,
        )?;
        assert_eq!(df.height(), 0);
        assert!(TripTable::new(df).is_ok());
        Ok(())
    }

    #[test]
    fn test_unparseable_start_time() -> Result<()> {
        let mut df = raw_frame()?;
        df.replace(
            START_TIME,
            Series::new(START_TIME.into(), &["soon", "later", "never", "now", "?"]),
        )?;
        let err = prepare_frame(df).unwrap_err();
        assert!(matches!(err, BikeshareError::MalformedColumn { .. }));
        Ok(())
    }

    #[test]
    fn test_text_start_times_keep_every_row() -> Result<()> {
        let raw = raw_frame()?;
        assert_eq!(raw.column(START_TIME)?.dtype(), &DataType::String);

        let df = prepare_frame(raw)?;
        assert_eq!(df.column(START_TIME)?.null_count(), 0);
        assert_eq!(df.column(MONTH)?.null_count(), 0);
        assert_eq!(df.column(DAY_OF_WEEK)?.null_count(), 0);
        let table = TripTable::new(apply_filters(df, Some(Month::June), Some(Weekday::Mon))?)?;
        assert_eq!(table.height(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_start_time_values_stay_missing() -> Result<()> {
        let mut df = raw_frame()?;
        df.replace(
            START_TIME,
            Series::new(
                START_TIME.into(),
                &[Some("2017-01-01 00:07:57"), None, Some("2017-06-06 17:45:10"), None, None],
            ),
        )?;
        let df = prepare_frame(df)?;
        assert_eq!(df.column(START_TIME)?.null_count(), 3);
        assert_eq!(text(&df, MONTH)[0], "January");
        assert_eq!(text(&df, DAY_OF_WEEK)[2], "Tuesday");
        Ok(())
    }

    #[test]
    fn test_one_bad_start_time_fails_the_column() -> Result<()> {
        let mut df = raw_frame()?;
        df.replace(
            START_TIME,
            Series::new(
                START_TIME.into(),
                &[
                    "2017-01-01 00:07:57",
                    "2017-06-05 08:15:00",
                    "06/06/2017 17:45",
                    "2017-03-13 12:00:00",
                    "2017-06-12 23:59:59",
                ],
            ),
        )?;
        let err = prepare_frame(df).unwrap_err();
        assert!(matches!(err, BikeshareError::MalformedColumn { column, .. } if column == START_TIME));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = read_trips(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, BikeshareError::MissingDataset(_)));
    }
}
