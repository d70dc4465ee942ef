// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run. All variants are fatal: the pipeline has
/// no partial-success mode, re-running is the retry.
#[derive(Debug, Error)]
pub enum Error {
    /// Network/HTTP failure retrieving one of the dashboard resources.
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A date string matched none of the recognised shapes.
    #[error("unrecognised date format: {0:?}")]
    Format(String),

    /// A computed percentage fell outside [0, 100].
    #[error("percentage out of range in column {column}: {value} (expected 0-100)")]
    Integrity { column: String, value: f64 },

    #[error("week {week} does not exist in epidemiological year {year}")]
    InvalidWeek { year: i32, week: u32 },

    #[error("missing column {0:?}")]
    MissingColumn(String),

    #[error("invalid number {value:?} in column {column:?}")]
    InvalidNumber { column: String, value: String },

    /// Two input rows claim the same cell of a reshaped table.
    #[error("duplicate entry for {key} in column {column:?}")]
    DuplicateEntry { key: String, column: String },

    #[error(transparent)]
    Csv(#[from] ::csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn fetch<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Fetch { url: url.into(), source: source.into() }
    }
}
