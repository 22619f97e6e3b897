//! # Error Types
//!
//! Construction of a [`Navigator`](crate::Navigator) either succeeds
//! completely or fails with one of the variants below. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The three structural failures (`InvalidSections`, `InvalidArrayCount`,
//!   `InvalidType`) are programmer or configuration errors. They are never
//!   retried; the caller aborts rendering of the navigation block.
//! - Identifier format errors carry the rejected input verbatim.

use thiserror::Error;

/// Top-level error type for navigator construction and option loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// The raw input was a single value instead of a sequence.
    #[error("sections must be passed as an array")]
    InvalidSections,

    /// Subtitles are present but an entry is left without its pair.
    #[error("sections with subtitles must be given as section/subtitle pairs (got {len} entries)")]
    InvalidArrayCount {
        /// Number of entries in the rejected input.
        len: usize,
    },

    /// The input reads like display strings rather than identifiers.
    #[error("sections must be identifiers, not display strings: {reason}")]
    InvalidType {
        /// Which shape rule the input broke.
        reason: String,
    },

    /// An identifier failed format validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An options or input document could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl NavigatorError {
    /// Short, stable name of the failure kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSections => "invalid_sections",
            Self::InvalidArrayCount { .. } => "invalid_array_count",
            Self::InvalidType { .. } => "invalid_type",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for NavigatorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for NavigatorError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Error in identifier format validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Section identifiers are bare tokens such as `contact_me`.
    #[error("invalid section identifier: {0:?}")]
    InvalidSectionId(String),

    /// Predicate names follow the same token rules, e.g. `logged_in?`.
    #[error("invalid authorization predicate name: {0:?}")]
    InvalidPredicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_failures_have_stable_messages() {
        assert_eq!(
            NavigatorError::InvalidSections.to_string(),
            "sections must be passed as an array"
        );
        let err = NavigatorError::InvalidArrayCount { len: 3 };
        assert!(err.to_string().contains("got 3 entries"));
    }

    #[test]
    fn validation_error_converts() {
        let err: NavigatorError = ValidationError::InvalidSectionId("Home Page".into()).into();
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("\"Home Page\""));
    }

    #[test]
    fn yaml_errors_become_config() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err: NavigatorError = yaml_err.into();
        assert_eq!(err.kind(), "config");
    }
}
