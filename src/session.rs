//! The interactive loop: filters → load → reports → row browser → restart.

use crate::browser;
use crate::config::Settings;
use crate::error::Result;
use crate::filters::{self, FilterSelection};
use crate::loader;
use crate::prompt::Console;
use crate::stats::{self, SEPARATOR};
use std::io::{BufRead, Write};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Runs sessions until the user declines to restart. Returns how many
/// iterations were completed.
///
/// # Errors
///
/// A dataset that cannot be loaded ends the whole session; so does closed input.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, settings: &Settings) -> Result<usize> {
    let mut iterations = 0;
    loop {
        run_once(console, settings)?;
        iterations += 1;

        if !console.confirm(RESTART_PROMPT)? {
            tracing::info!(iterations, "session finished");
            return Ok(iterations);
        }
    }
}

/// One full iteration without the restart prompt.
pub fn run_once<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<()> {
    let selection = filters::collect_filters(console)?;
    let table = explore(&selection, settings, console.output())?;
    browser::browse_rows(&table, console, settings.page_size)?;
    Ok(())
}

/// Loads the table for `selection` and prints all four reports.
pub fn explore<W: Write>(
    selection: &FilterSelection,
    settings: &Settings,
    out: &mut W,
) -> Result<crate::trips::TripTable> {
    let table = loader::load_data(&settings.data_dir, selection)?;
    writeln!(out, "{SEPARATOR}")?;
    stats::report_all(&table, out)?;
    Ok(table)
}
