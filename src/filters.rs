use crate::catalog::{self, City};
use crate::error::Result;
use crate::prompt::{Console, DEFAULT_INVALID_INPUT};
use chrono::{Month, Weekday};
use std::fmt;
use std::io::{BufRead, Write};

const CITY_PROMPT: &str = "Which city would you like to see data from?\nchicago, new york or washington?\n";
const CITY_INVALID: &str =
    "You have entered an invalid city please make sure you have entered the name correctly!";
const MODE_PROMPT: &str = "Would you like to filter the data by month, day, both or none?\n";
const MONTH_PROMPT: &str = "Which month would you like to filter by?\njanuary, february, march, april, may or june? (type out full month name).\n";
const DAY_PROMPT: &str =
    "Which day would you like to filter by? type out full day name (e.g. sunday).\n";

/// The city to load and the optional month/day constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub const fn city(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub const fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub const fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.city)?;
        if let Some(month) = self.month {
            write!(f, ", month = {}", catalog::month_title(month))?;
        }
        if let Some(day) = self.day {
            write!(f, ", day = {}", catalog::day_title(day))?;
        }
        Ok(())
    }
}

/// Asks for a city, then for the optional month and day filters.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection> {
    writeln!(console.output(), "Hello! Let's explore some US bikeshare data!\n")?;

    let city = console.choose_from(&catalog::CITIES, CITY_PROMPT, CITY_INVALID)?;
    let mut selection = FilterSelection::city(city);

    let mode = console.choose_from(&catalog::FILTER_MODES, MODE_PROMPT, DEFAULT_INVALID_INPUT)?;

    if mode.wants_month() {
        let month = console.choose_from(&catalog::MONTHS, MONTH_PROMPT, DEFAULT_INVALID_INPUT)?;
        selection = selection.with_month(month);
    }

    if mode.wants_day() {
        let day = console.choose_from(&catalog::DAYS, DAY_PROMPT, DEFAULT_INVALID_INPUT)?;
        selection = selection.with_day(day);
    }

    tracing::info!(%selection, ?mode, "filters selected");
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BikeshareError;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<FilterSelection>, String) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = collect_filters(&mut console);
        let output = String::from_utf8_lossy(&console.into_output()).to_string();
        (result, output)
    }

    #[test]
    fn test_no_filters() -> Result<()> {
        let (selection, output) = run("chicago\nnone\n");
        assert_eq!(selection?, FilterSelection::city(City::Chicago));
        assert!(!output.contains("Which month"));
        assert!(!output.contains("Which day"));
        Ok(())
    }

    #[test]
    fn test_month_only() -> Result<()> {
        let (selection, output) = run("washington\nmonth\nMarch\n");
        let selection = selection?;
        assert_eq!(selection.month, Some(Month::March));
        assert_eq!(selection.day, None);
        assert!(!output.contains("Which day"));
        Ok(())
    }

    #[test]
    fn test_day_only() -> Result<()> {
        let (selection, _) = run("chicago\nday\nsunday\n");
        let selection = selection?;
        assert_eq!(selection.month, None);
        assert_eq!(selection.day, Some(Weekday::Sun));
        Ok(())
    }

    #[test]
    fn test_both_with_retries() -> Result<()> {
        let (selection, output) = run("NYC\nnew york\nweek\nboth\njuly\njune\nfunday\nmonday\n");
        assert_eq!(
            selection?,
            FilterSelection::city(City::NewYork)
                .with_month(Month::June)
                .with_day(Weekday::Mon)
        );
        assert_eq!(output.matches(CITY_INVALID).count(), 1);
        assert_eq!(output.matches("invalid input").count(), 3);
        Ok(())
    }

    #[test]
    fn test_closed_input_is_reported() {
        let (selection, _) = run("chicago\n");
        assert!(matches!(selection, Err(BikeshareError::InputClosed)));
    }

    #[test]
    fn test_display() {
        let selection = FilterSelection::city(City::NewYork).with_day(Weekday::Fri);
        assert_eq!(selection.to_string(), "new york, day = Friday");
    }
}
