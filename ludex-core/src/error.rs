use thiserror::Error;

/// Errors from calendar-value construction and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The components name a day that does not exist on the calendar
    /// (month out of 1–12, or day past the end of the month).
    #[error("no such date: {year}-{month}-{day}")]
    NoSuchDate { year: i32, month: u32, day: u32 },

    /// The text does not have the `yyyy-mm-dd` shape.
    #[error("malformed date {0:?}: expected yyyy-mm-dd")]
    Malformed(String),
}

/// Errors from assembling a record out of raw catalog fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected at least {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("unparsable app id {0:?}")]
    BadId(String),
}
