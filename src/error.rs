//! Error types for the grouping kernel.
//!
//! The kernel itself has a single failure class (bad arguments); the
//! exhaustive solver adds a second one when asked to enumerate more big gaps
//! than its ceiling allows.

use thiserror::Error;

/// Errors reported by instance validation and by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// Threshold not positive, budget negative, negative gap magnitude, or an
    /// empty generator range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The exhaustive solver refuses profiles with more big gaps than its
    /// ceiling, since it visits `2^gaps` subsets.
    #[error("exhaustive search over {gaps} big gaps exceeds the ceiling of {limit}")]
    GapLimitExceeded { gaps: usize, limit: usize },
}

impl GroupingError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T, E = GroupingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::GroupingError;

    #[test]
    fn messages_name_the_offending_value() {
        let err = GroupingError::invalid("threshold must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid argument: threshold must be positive, got 0"
        );

        let err = GroupingError::GapLimitExceeded { gaps: 40, limit: 24 };
        assert!(err.to_string().contains("40 big gaps"));
        assert!(err.to_string().contains("ceiling of 24"));
    }
}
