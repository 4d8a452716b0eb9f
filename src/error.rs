//! Error types and the crate-wide result alias.
//!
//! Every fallible operation in this crate reports one of three kinds of
//! failure:
//! - [`Error::ComputationFailure`]: a coroutine body or a fallible
//!   transformation raised an error mid-sequence,
//! - [`Error::NonTermination`]: an eager consumer's safety bound was
//!   exceeded before the sequence finished,
//! - [`Error::InvalidArgument`]: a constructor or driver was handed a
//!   parameter it cannot work with.
//!
//! Errors surface synchronously to the caller of the operation that
//! triggered them; nothing in the crate retries or swallows them. A cursor
//! that has reported a `ComputationFailure` is permanently terminal.

use thiserror::Error;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure conditions a sequence operation can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coroutine body or transformation function failed while producing
    /// the next element.
    #[error("computation failed: {message}")]
    ComputationFailure {
        /// Description of the underlying failure.
        message: String,
    },

    /// An eager consumer drove a cursor past its configured safety bound
    /// without reaching a terminal step.
    #[error("sequence produced more than {limit} elements without terminating")]
    NonTermination {
        /// The bound that was exceeded.
        limit: usize,
    },

    /// A constructor or driver received an unusable parameter.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the parameter.
        message: String,
    },
}

impl Error {
    /// Shorthand for a [`Error::ComputationFailure`] with the given message.
    pub fn computation(message: impl Into<String>) -> Self {
        Error::ComputationFailure {
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidArgument`] with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(
            Error::computation("division by zero").to_string(),
            "computation failed: division by zero"
        );
        assert_eq!(
            Error::NonTermination { limit: 64 }.to_string(),
            "sequence produced more than 64 elements without terminating"
        );
        assert_eq!(
            Error::invalid("limit must be positive").to_string(),
            "invalid argument: limit must be positive"
        );
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(Error::computation("x"), Error::computation("x"));
        assert_ne!(Error::computation("x"), Error::invalid("x"));
    }
}
