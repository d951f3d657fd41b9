use anyhow::{Context as _, Result};
use bikeshare::catalog::{self, City};
use bikeshare::config::Settings;
use bikeshare::filters::FilterSelection;
use bikeshare::prompt::Console;
use bikeshare::session;
use clap::{Parser, Subcommand};
use std::io::Write as _;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bikeshare", about = "Explore US bikeshare trip data")]
pub struct Cli {
    /// Directory containing the city CSV files
    #[arg(long, env = "BIKESHARE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to daily files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Rows shown per page when browsing raw data
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the statistics for one city without prompting
    Report {
        /// chicago, "new york" or washington
        #[arg(long, value_parser = parse_city)]
        city: City,

        /// Full month name, january to june
        #[arg(long, value_parser = parse_month)]
        month: Option<chrono::Month>,

        /// Full weekday name
        #[arg(long, value_parser = parse_day)]
        day: Option<chrono::Weekday>,
    },
}

impl Cli {
    /// Settings file (when given) overridden by command-line flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(dir) = &self.log_dir {
            settings.log_dir = Some(dir.clone());
        }
        if let Some(size) = self.page_size {
            settings.page_size = usize::from(size);
        }
        Ok(settings)
    }
}

pub fn run(command: Option<Commands>, settings: &Settings) -> Result<()> {
    match command {
        Some(Commands::Report { city, month, day }) => {
            let selection = FilterSelection { city, month, day };
            handle_report(&selection, settings)
        }
        None => handle_interactive(settings),
    }
}

fn handle_interactive(settings: &Settings) -> Result<()> {
    let mut console = Console::stdio();
    session::run(&mut console, settings).context("Session ended with an error")?;
    Ok(())
}

fn handle_report(selection: &FilterSelection, settings: &Settings) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Statistics for {selection}")?;
    session::explore(selection, settings, &mut stdout)
        .with_context(|| format!("Failed to report on {selection}"))?;
    Ok(())
}

fn parse_city(value: &str) -> Result<City, String> {
    City::from_name(value).ok_or_else(|| expected(&catalog::CITIES))
}

fn parse_month(value: &str) -> Result<chrono::Month, String> {
    catalog::month_from_name(value).ok_or_else(|| expected(&catalog::MONTHS))
}

fn parse_day(value: &str) -> Result<chrono::Weekday, String> {
    catalog::day_from_name(value).ok_or_else(|| expected(&catalog::DAYS))
}

fn expected<T>(table: &[(&'static str, T)]) -> String {
    format!("expected one of: {}", catalog::keys(table).join(", "))
}
