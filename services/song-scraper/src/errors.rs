//!
//! src/errors.rs  Oct 19th, 2026
//!
//! Defines the fatal error kinds of a scrape run and their
//! conversions. Anything returned as a ScrapeError aborts the run
//! before an output file is produced.
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("config error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("listing container #{0} not found on index page")]
    MissingContainer(String),
    #[error("listing row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },
    #[error("listing row {row}: expected 2 played timestamps, found {found}")]
    PlayedCount { row: usize, found: usize },
    #[error("invalid selector {0}")]
    Selector(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error)
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self { ScrapeError::Http(e.to_string()) }
}

impl From<url::ParseError> for ScrapeError {
    fn from(e: url::ParseError) -> Self { ScrapeError::Http(format!("bad url: {e}")) }
}

impl From<csv::Error> for ScrapeError {
    fn from(e: csv::Error) -> Self { ScrapeError::Csv(e.to_string()) }
}

impl From<tempfile::PersistError> for ScrapeError {
    fn from(e: tempfile::PersistError) -> Self { ScrapeError::Io(e.error) }
}
