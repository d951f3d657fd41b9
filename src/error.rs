//! Error handling for the bikeshare explorer.
//!
//! Library code returns [`Result`], whose error type is the [`BikeshareError`]
//! enum. Each variant is one failure category so callers can match on it:
//!
//! ```
//! use bikeshare::error::BikeshareError;
//!
//! fn describe(err: &BikeshareError) -> &'static str {
//!     match err {
//!         BikeshareError::MissingDataset(_) => "dataset file is missing",
//!         BikeshareError::InputClosed => "no more console input",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! `From` conversions let `?` lift I/O, Polars and JSON errors, and the
//! [`ResultExt`] trait attaches a message to any of them:
//!
//! ```no_run
//! use bikeshare::error::ResultExt as _;
//!
//! fn read_header(path: &str) -> bikeshare::error::Result<String> {
//!     std::fs::read_to_string(path).context("Failed to read dataset header")
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for bikeshare operations.
#[derive(Debug)]
pub enum BikeshareError {
    /// I/O errors (dataset files, console streams)
    Io(std::io::Error),

    /// Errors raised by Polars while reading or transforming a table
    DataProcessing(String),

    /// The backing CSV for a city does not exist
    MissingDataset(PathBuf),

    /// A required column is absent from the dataset
    MissingColumn(String),

    /// A column exists but its values cannot be interpreted
    MalformedColumn { column: String, reason: String },

    /// Console input reached end of stream while a prompt was waiting
    InputClosed,

    /// Settings file problems
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for BikeshareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::MissingDataset(path) => write!(f, "Dataset not found: {}", path.display()),
            Self::MissingColumn(name) => write!(f, "Missing column: '{name}'"),
            Self::MalformedColumn { column, reason } => {
                write!(f, "Malformed column '{column}': {reason}")
            }
            Self::InputClosed => write!(f, "Input closed before an answer was given"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for BikeshareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BikeshareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for BikeshareError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for BikeshareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for BikeshareError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for bikeshare operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BikeshareError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: BikeshareError = e.into();
            BikeshareError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: BikeshareError = e.into();
            BikeshareError::Other(format!("{}: {}", f(), err))
        })
    }
}
