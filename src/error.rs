//! Error taxonomy for page extraction and the fetch collaborator.
//!
//! Mandatory-field and malformed-structure failures abort the whole page;
//! everything else degrades to sentinel defaults plus a logged warning at the
//! call site.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Identity-critical markup is absent; the page is unparsable.
    #[error("missing mandatory field: {0}")]
    MissingField(&'static str),

    /// Rank labels must be roman numerals I..X, nothing else.
    #[error("unrecognized rank token {0:?}")]
    InvalidRank(String),

    /// A cell that should hold a number holds something else.
    #[error("invalid number {text:?} in {field}")]
    InvalidNumber { field: &'static str, text: String },

    /// A spec table is shorter or narrower than its layout requires.
    #[error("malformed {table} table: row {row} has {cells} cells, need {needed}")]
    MalformedTable {
        table: &'static str,
        row: usize,
        cells: usize,
        needed: usize,
    },

    /// A data-table caption matched more than one armament equally well.
    #[error("ambiguous armament match for caption {0:?}")]
    AmbiguousArmament(String),

    /// Fetch collaborator: transport failure.
    #[error("http request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// Fetch collaborator: page belongs to no known vehicle category.
    #[error("page {0:?} is not in a known vehicle category")]
    UnknownCategory(String),
}

impl ScrapeError {
    pub(crate) fn invalid_number(field: &'static str, text: &str) -> Self {
        ScrapeError::InvalidNumber {
            field,
            text: text.trim().to_string(),
        }
    }
}
