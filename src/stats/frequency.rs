//! Frequency counting over Polars columns with a deterministic tie-break.
//!
//! Groups keep the order in which their value first appears, and sorting by
//! count keeps that order among equal counts. When two values are equally
//! frequent, the one seen first wins the mode and ranks first.

use crate::error::Result;
use polars::prelude::*;

const VALUE: &str = "value";
const COUNT: &str = "count";

/// One row per distinct value of `series`, most frequent first.
///
/// Nulls are relabelled as `missing` when given, dropped otherwise.
fn counted(series: Series, missing: Option<&str>) -> Result<DataFrame> {
    let frame = DataFrame::new(vec![series.with_name(VALUE.into()).into_column()])?;

    let lf = match missing {
        Some(label) => frame.lazy().with_column(col(VALUE).fill_null(lit(label))),
        None => frame.lazy().filter(col(VALUE).is_not_null()),
    };

    let counted = lf
        .group_by_stable([col(VALUE)])
        .agg([len().alias(COUNT)])
        .sort(
            [COUNT],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;

    Ok(counted)
}

fn values(frame: &DataFrame) -> Result<&Series> {
    Ok(frame.column(VALUE)?.as_materialized_series())
}

/// `(value, count)` for every distinct text value, by descending count.
pub fn text_counts(series: &Series, missing: Option<&str>) -> Result<Vec<(String, usize)>> {
    let counted = counted(series.cast(&DataType::String)?, missing)?;
    let counts = counted.column(COUNT)?.cast(&DataType::UInt64)?;

    Ok(values(&counted)?
        .str()?
        .into_iter()
        .zip(counts.as_materialized_series().u64()?)
        .filter_map(|(value, count)| Some((value?.to_owned(), count? as usize)))
        .collect())
}

/// Most frequent non-null text value.
pub fn text_mode(series: &Series) -> Result<Option<String>> {
    Ok(text_counts(series, None)?
        .into_iter()
        .next()
        .map(|(value, _)| value))
}

/// Most frequent non-null integer value.
pub fn integer_mode(series: &Series) -> Result<Option<i64>> {
    let counted = counted(series.cast(&DataType::Int64)?, None)?;
    Ok(values(&counted)?.i64()?.into_iter().next().flatten())
}

/// Every integer sharing the highest count, ascending.
pub fn integer_modes(series: &Series) -> Result<Vec<i64>> {
    let modes = counted(series.cast(&DataType::Int64)?, None)?
        .lazy()
        .filter(col(COUNT).eq(col(COUNT).max()))
        .sort([VALUE], SortMultipleOptions::default())
        .collect()?;

    Ok(values(&modes)?.i64()?.into_iter().flatten().collect())
}
