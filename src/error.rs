// src/error.rs
use thiserror::Error;

/// Failure taxonomy for the whole pipeline.
///
/// `UnknownDate` and `BadDate` are hard failures: an unrecognized sampling
/// date means the hand-curated term table is stale, and an unparsable date
/// inside reconciliation would corrupt neighboring interval boundaries.
/// `MalformedRow` is fatal for the affected row only; callers log it and
/// move on without recording placeholder values.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("unknown sampling date: {0}")]
    UnknownDate(String),

    #[error("malformed row on {date}: missing {field}")]
    MalformedRow { date: String, field: &'static str },

    #[error("bad date string: {0:?}")]
    BadDate(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("bad fixture dump: {0}")]
    Fixture(String),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("bad url: {0}")]
    Url(#[from] url::ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
