//! # Bikeshare - US Bikeshare Trip Explorer
//!
//! Loads the trip logs of Chicago, New York City or Washington into a Polars
//! `DataFrame`, narrows them to a month and/or weekday, and prints descriptive
//! statistics about when people ride, where they ride, for how long, and who
//! they are.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bikeshare::catalog::City;
//! use bikeshare::filters::FilterSelection;
//! use bikeshare::{loader, stats};
//! use std::path::Path;
//!
//! # fn example() -> bikeshare::error::Result<()> {
//! let selection = FilterSelection::city(City::Chicago).with_month(chrono::Month::June);
//! let table = loader::load_data(Path::new("data"), &selection)?;
//!
//! let times = stats::time::compute(&table)?;
//! println!("Busiest hour: {:?}", times.hour);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`catalog`]: Cities, months and weekdays the explorer knows about
//! - [`prompt`]: Console prompts that re-ask until the answer is valid
//! - [`filters`]: Collecting the city, month and day selection
//! - [`loader`]: Reading, preparing and filtering a city's CSV
//! - [`trips`]: The trip table and its column names
//! - [`stats`]: Travel time, station, duration and user reports
//! - [`browser`]: Paging through raw rows
//! - [`session`]: The interactive loop tying everything together
//! - [`config`], [`logging`], [`error`]: Settings, tracing setup and error types

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod trips;
pub mod utils;
