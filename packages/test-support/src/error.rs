use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("empty range: min {min} is greater than max {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("step must be positive")]
    NonPositiveStep,
    #[error("failed to format timestamp: {0}")]
    Format(String),
}
