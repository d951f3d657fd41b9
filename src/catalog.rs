//! Fixed lookup tables: the cities with a dataset, and the months and weekdays
//! a trip table can be filtered by.
//!
//! All tables are `const` data. The prompt layer matches lower-case user input
//! against the keys of [`CITIES`], [`MONTHS`] and [`DAYS`].

use chrono::{Month, Weekday};
use std::fmt;
use std::path::{Path, PathBuf};

/// A city with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Lower-case name as typed at the city prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYork => "new york",
            Self::Washington => "washington",
        }
    }

    /// File name of the city's CSV inside the data directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYork => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    pub fn dataset_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        lookup(&CITIES, name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const CITIES: [(&str, City); 3] = [
    ("chicago", City::Chicago),
    ("new york", City::NewYork),
    ("washington", City::Washington),
];

/// The datasets only cover the first half of the year.
pub const MONTHS: [(&str, Month); 6] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
];

pub const DAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// How the user wants to narrow the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub const fn wants_month(self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    pub const fn wants_day(self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

pub const FILTER_MODES: [(&str, FilterMode); 4] = [
    ("month", FilterMode::Month),
    ("day", FilterMode::Day),
    ("both", FilterMode::Both),
    ("none", FilterMode::None),
];

pub fn month_from_name(name: &str) -> Option<Month> {
    lookup(&MONTHS, name)
}

pub fn day_from_name(name: &str) -> Option<Weekday> {
    lookup(&DAYS, name)
}

/// Title-case month name, matching the derived `month` column.
pub fn month_title(month: Month) -> &'static str {
    month.name()
}

/// Title-case day name, matching the derived `day_of_week` column.
pub const fn day_title(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive lookup of a key in one of the tables above.
pub fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    let name = name.trim().to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

pub fn keys<T>(table: &[(&'static str, T)]) -> Vec<&'static str> {
    table.iter().map(|(key, _)| *key).collect()
}
