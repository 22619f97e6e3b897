//! # Navigator Options
//!
//! Display and authorization settings for one navigation block, as a fixed
//! struct with an explicit default for every field. Options are usually
//! built in code, but can also be loaded from a YAML or JSON document:
//!
//! ```yaml
//! hover_text: true
//! authorize: [admin, reports]
//! with: can_edit?
//! authorized_css: members_only
//! ```
//!
//! Unknown keys are rejected.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::NavigatorError;
use crate::identity::{PredicateName, SectionId};

/// Predicate the authentication layer is asked for when `with` is not set.
pub const DEFAULT_AUTHORIZATION_METHOD: &str = "logged_in?";

/// CSS class attached to authorized links when `authorized_css` is not set.
pub const DEFAULT_AUTHORIZED_CSS: &str = "authorized_nav_link";

/// Which sections require authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorize {
    /// Every section in the navigator.
    All,
    /// Exactly these sections, verbatim. May be empty.
    Only(Vec<SectionId>),
}

impl Authorize {
    /// Build from a list of identifiers. A list holding only the `all`
    /// sentinel means [`Authorize::All`].
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = SectionId>,
    {
        let ids: Vec<SectionId> = ids.into_iter().collect();
        match ids.as_slice() {
            [only] if only.is_all() => Self::All,
            _ => Self::Only(ids),
        }
    }

    /// Whether the value names no sections at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(ids) if ids.is_empty())
    }
}

impl From<SectionId> for Authorize {
    fn from(id: SectionId) -> Self {
        Self::from_ids([id])
    }
}

impl From<Vec<SectionId>> for Authorize {
    fn from(ids: Vec<SectionId>) -> Self {
        Self::from_ids(ids)
    }
}

impl Serialize for Authorize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(SectionId::ALL),
            Self::Only(ids) => ids.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Authorize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            One(SectionId),
            Many(Vec<SectionId>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::One(id) => Self::from(id),
            Repr::Many(ids) => Self::from_ids(ids),
        })
    }
}

/// Options for one [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorOptions {
    /// Show subtitles as hover text instead of inline text.
    pub hover_text: bool,
    /// Show subtitles as the visible link text.
    pub link_text: bool,
    /// Sections that require authorization. `Some` even when empty if the
    /// key was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize: Option<Authorize>,
    /// Overrides the predicate name; only honoured when `authorize` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with: Option<PredicateName>,
    /// CSS class for authorized links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_css: Option<String>,
}

impl NavigatorOptions {
    /// Load options from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::Config`] on malformed YAML, unknown keys, or
    /// invalid identifiers.
    pub fn from_yaml_str(s: &str) -> Result<Self, NavigatorError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::Config`] on malformed JSON, unknown keys, or
    /// invalid identifiers.
    pub fn from_json_str(s: &str) -> Result<Self, NavigatorError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Show subtitles as hover text.
    pub fn with_hover_text(mut self, on: bool) -> Self {
        self.hover_text = on;
        self
    }

    /// Show subtitles as the link text.
    pub fn with_link_text(mut self, on: bool) -> Self {
        self.link_text = on;
        self
    }

    /// Require authorization for the given sections.
    pub fn authorize(mut self, authorize: impl Into<Authorize>) -> Self {
        self.authorize = Some(authorize.into());
        self
    }

    /// Name the predicate used for authorization.
    pub fn authorize_with(mut self, predicate: PredicateName) -> Self {
        self.with = Some(predicate);
        self
    }

    /// CSS class for authorized links.
    pub fn with_authorized_css(mut self, css: impl Into<String>) -> Self {
        self.authorized_css = Some(css.into());
        self
    }

    /// Whether `authorize` is present with a non-empty value.
    pub fn requires_authorization(&self) -> bool {
        self.authorize.as_ref().is_some_and(|a| !a.is_empty())
    }
}
