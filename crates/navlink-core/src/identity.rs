//! # Identifier Newtypes
//!
//! A [`SectionId`] names one navigable section. A [`PredicateName`] names the
//! authorization predicate the authentication layer exposes. They are
//! distinct types so a predicate can never stand in for a section, and
//! neither can be confused with a free-form display string.
//!
//! ## Validation
//!
//! Both types accept the same token shape: non-empty, ASCII alphanumerics
//! and `_`, not starting with a digit, optionally ending in a single `?`
//! or `!`. Validation runs in `new()`, `FromStr`, and `Deserialize`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Routes `Deserialize` for a string newtype through its validating
/// `new()` constructor, so invalid values are rejected at parse time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

fn is_identifier_token(s: &str) -> bool {
    let body = s
        .strip_suffix('?')
        .or_else(|| s.strip_suffix('!'))
        .unwrap_or(s);
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Opaque identifier of one navigable section, e.g. `contact_me`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl_validating_deserialize!(SectionId);

impl SectionId {
    /// Sentinel accepted by the `authorize` option to mean every section.
    pub const ALL: &'static str = "all";

    /// Create a section identifier, validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSectionId`] if the value is empty,
    /// contains whitespace or punctuation, or starts with a digit.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_identifier_token(&s) {
            return Err(ValidationError::InvalidSectionId(s));
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `all` sentinel.
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SectionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name of the predicate the authentication collaborator must expose.
///
/// Defaults to `logged_in?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PredicateName(String);

impl_validating_deserialize!(PredicateName);

impl PredicateName {
    /// Create a predicate name, validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPredicateName`] on a malformed name.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_identifier_token(&s) {
            return Err(ValidationError::InvalidPredicateName(s));
        }
        Ok(Self(s))
    }

    /// Access the predicate name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PredicateName {
    fn default() -> Self {
        Self(crate::options::DEFAULT_AUTHORIZATION_METHOD.to_string())
    }
}

impl std::fmt::Display for PredicateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PredicateName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for ok in ["home", "contact_me", "_private", "page2", "logged_in?", "save!"] {
            assert!(SectionId::new(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_display_strings() {
        for bad in ["", "Contact Me", "2fa", "a-b", "what??", "?", "ünïcode"] {
            assert_eq!(
                SectionId::new(bad),
                Err(ValidationError::InvalidSectionId(bad.to_string())),
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        let id: SectionId = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(id.as_str(), "about");
        assert!(serde_json::from_str::<SectionId>("\"About Us\"").is_err());
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = SectionId::new("blog").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"blog\"");
    }

    #[test]
    fn predicate_default_is_logged_in() {
        assert_eq!(PredicateName::default().as_str(), "logged_in?");
    }

    #[test]
    fn predicate_errors_are_distinct() {
        assert_eq!(
            "can edit".parse::<PredicateName>(),
            Err(ValidationError::InvalidPredicateName("can edit".into())),
        );
    }

    #[test]
    fn all_sentinel() {
        assert!(SectionId::new("all").unwrap().is_all());
        assert!(!SectionId::new("all_posts").unwrap().is_all());
    }
}
