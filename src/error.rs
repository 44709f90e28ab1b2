//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures only. Exhausting a search space
//! is not an error: tree and graph searches report it as a `None` solution,
//! and the local, annealing and genetic strategies always return a
//! best-found node.

/// Typed failure for configuration validation.
///
/// Returned before any problem callback runs, so no search work is lost.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A configuration field holds a value the strategy cannot run with.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the constraint.
        detail: String,
    },
}

impl SearchError {
    pub(crate) fn invalid(field: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { field, detail } => {
                write!(f, "invalid configuration for `{field}`: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = SearchError::invalid("pmut", "must be in [0, 1], got 2");
        assert_eq!(
            err.to_string(),
            "invalid configuration for `pmut`: must be in [0, 1], got 2"
        );
    }
}
