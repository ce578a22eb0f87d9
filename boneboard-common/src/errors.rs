#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FundingError {
    #[error("funding duration must be between 1 and 12 months, got {0}")]
    InvalidDuration(u32),
    #[error("invalid target month `{0}`, expected YYYY-MM")]
    InvalidTargetMonth(String),
}
