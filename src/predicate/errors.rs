//! Predicate error types

use thiserror::Error;

/// Result type for predicate operations
pub type PredicateResult<T> = Result<T, PredicateError>;

/// Errors raised by the predicate model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// Operator symbol is not one of <, <=, >, >=
    #[error("unsupported operator: '{0}'")]
    UnsupportedOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operator_display() {
        let err = PredicateError::UnsupportedOperator("=".to_string());
        assert_eq!(err.to_string(), "unsupported operator: '='");
    }
}
