//! Error type for the fallible entry points.
//!
//! Most of the crate is infallible by construction. Errors only arise
//! when parsing [`ScoreOptions`](crate::scores::ScoreOptions) or when a
//! caller opts into range checking.

/// Errors produced by `u-numkit`.
#[derive(Debug, thiserror::Error)]
pub enum NumkitError {
    #[error("inverted score range: min {min} is greater than max {max}")]
    InvertedRange { min: i64, max: i64 },

    #[error("invalid score options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
