use thiserror::Error;

/// Error type for caller contract violations the period engine will not absorb.
///
/// Everything else in this crate clamps or falls back instead of failing; a
/// string that is not a date, or an unknown period tag on the strict parse
/// path, are the only inputs that propagate an error to the caller.
#[derive(Debug, Error)]
pub enum PeriodError {
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
    #[error("Unknown period kind: {0}")]
    UnknownKind(String),
}
