//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

use crate::entities::RequiredField;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required wizard fields were left empty
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a missing fields error
    pub fn missing_fields(fields: Vec<RequiredField>) -> Self {
        Self::MissingFields(fields)
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// The missing fields, if this is a missing fields error.
    pub fn missing(&self) -> &[RequiredField] {
        match self {
            Self::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_labels() {
        let err = DomainError::missing_fields(vec![RequiredField::Category, RequiredField::Who]);
        assert_eq!(err.to_string(), "Missing required fields: Category, Who");
        assert_eq!(err.missing(), &[RequiredField::Category, RequiredField::Who]);
    }

    #[test]
    fn test_parse_error_has_no_missing_fields() {
        let err = DomainError::parse("bad level");
        assert!(err.missing().is_empty());
        assert_eq!(err.to_string(), "Parse error: bad level");
    }
}
