//! Paged display of raw trip rows.

use crate::error::Result;
use crate::prompt::Console;
use crate::trips::{self, TIMESTAMP_FORMAT, TripTable};
use crate::utils::NOT_AVAILABLE;
use polars::prelude::*;
use std::io::{BufRead, Write};

pub const DEFAULT_PAGE_SIZE: usize = 5;

const CONTINUE_PROMPT: &str = "Do you wish to continue?: ";
pub const EXHAUSTED: &str = "We have no more data left, you have seen it all!";

/// Row ranges `[start, end)` shown for a table of `rows` rows.
///
/// Windows advance by `page_size` while the offset is below the row count; the
/// last one is clipped to the rows that remain.
pub fn windows(rows: usize, page_size: usize) -> impl Iterator<Item = (usize, usize)> {
    let step = page_size.max(1);
    (0..rows)
        .step_by(step)
        .map(move |start| (start, (start + step).min(rows)))
}

/// Shows rows page by page until the user answers `no` or the table runs out.
/// Returns the number of windows shown.
pub fn browse_rows<R: BufRead, W: Write>(
    table: &TripTable,
    console: &mut Console<R, W>,
    page_size: usize,
) -> Result<usize> {
    let prompt =
        format!("\nWould you like to view {page_size} rows of individual trip data? Enter yes or no\n");
    if !console.confirm(&prompt)? {
        return Ok(0);
    }

    let mut shown = 0;
    let mut pages = windows(table.height(), page_size).peekable();
    while let Some((start, end)) = pages.next() {
        write!(console.output(), "{}", render_window(table, start, end)?)?;
        shown += 1;

        if pages.peek().is_none() {
            break;
        }
        if !console.confirm(CONTINUE_PROMPT)? {
            tracing::debug!(shown, "row browsing stopped by user");
            return Ok(shown);
        }
    }

    writeln!(console.output(), "{EXHAUSTED}")?;
    tracing::debug!(shown, "row browsing reached the end of the table");
    Ok(shown)
}

/// Renders rows `[start, end)` as a plain text table. Every column is shown
/// and no cell is truncated. The first column is the row's position in the
/// table.
pub fn render_window(table: &TripTable, start: usize, end: usize) -> Result<String> {
    let window = table.window(start, end.saturating_sub(start));

    let as_text: Vec<Expr> = window
        .get_columns()
        .iter()
        .map(|column| match column.dtype() {
            DataType::Datetime(_, _) => col(column.name().as_str()).dt().strftime(TIMESTAMP_FORMAT),
            _ => col(column.name().as_str()).cast(DataType::String),
        })
        .collect();
    let text = window.lazy().select(as_text).collect()?;

    let columns = text
        .get_columns()
        .iter()
        .map(|column| trips::text_values(column.as_materialized_series()))
        .collect::<Result<Vec<_>>>()?;

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(text.height() + 1);
    rows.push(
        std::iter::once(String::new())
            .chain(text.get_column_names().into_iter().map(|name| name.to_string()))
            .collect(),
    );
    for i in 0..text.height() {
        let mut row = vec![(start + i).to_string()];
        row.extend(
            columns
                .iter()
                .map(|values| values[i].as_deref().unwrap_or(NOT_AVAILABLE).to_owned()),
        );
        rows.push(row);
    }

    let widths: Vec<usize> = (0..=columns.len())
        .map(|c| rows.iter().map(|row| row[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut rendered = String::new();
    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        rendered.push_str(line.trim_end());
        rendered.push('\n');
    }
    Ok(rendered)
}
