//! # Raw Section Input
//!
//! The positional input a navigation block is declared with: an ordered
//! list of section identifiers, optionally interleaved with subtitles.
//!
//! ```text
//! [:home, :about, :contact_me]                        // sections only
//! [:home, "Start here", :about, "Who we are"]         // section/subtitle pairs
//! ```
//!
//! In text and document form an entry written `:name` is a section
//! identifier and anything else is a subtitle. A subtitle that itself
//! starts with `:` is written with the marker doubled, so `::)` reads back
//! as the subtitle `:)`. Shape rules (pairing, ordering) are enforced by
//! [`Navigator`](crate::Navigator), not here.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{NavigatorError, ValidationError};
use crate::identity::SectionId;

/// Marker that distinguishes an identifier from a subtitle in text form.
pub const SECTION_MARKER: char = ':';

/// One positional entry of the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntry {
    /// A navigable section.
    Section(SectionId),
    /// A human-readable subtitle for the preceding section.
    Subtitle(String),
}

impl RawEntry {
    /// Whether this entry is a plain display string.
    pub fn is_subtitle(&self) -> bool {
        matches!(self, Self::Subtitle(_))
    }

    /// The section identifier, if this entry is one.
    pub fn as_section(&self) -> Option<&SectionId> {
        match self {
            Self::Section(id) => Some(id),
            Self::Subtitle(_) => None,
        }
    }
}

impl std::fmt::Display for RawEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Section(id) => write!(f, "{SECTION_MARKER}{id}"),
            Self::Subtitle(text) if text.starts_with(SECTION_MARKER) => {
                write!(f, "{SECTION_MARKER}{text}")
            }
            Self::Subtitle(text) => f.write_str(text),
        }
    }
}

impl std::str::FromStr for RawEntry {
    type Err = ValidationError;

    /// `:name` parses as a section identifier, `::text` as the subtitle
    /// `:text`, and any other text as a subtitle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(SECTION_MARKER) {
            Some(escaped) if escaped.starts_with(SECTION_MARKER) => {
                Ok(Self::Subtitle(escaped.to_string()))
            }
            Some(name) => SectionId::new(name)
                .map(Self::Section)
                .map_err(|_| ValidationError::InvalidSectionId(s.to_string())),
            None => Ok(Self::Subtitle(s.to_string())),
        }
    }
}

impl From<SectionId> for RawEntry {
    fn from(id: SectionId) -> Self {
        Self::Section(id)
    }
}

impl Serialize for RawEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The raw value a navigation block was declared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawInput {
    /// An ordered list of entries.
    Sequence(Vec<RawEntry>),
    /// Any single value given where a list was expected, kept as text.
    Scalar(String),
}

impl RawInput {
    /// Input made only of section identifiers.
    pub fn sections<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = SectionId>,
    {
        Self::Sequence(ids.into_iter().map(RawEntry::Section).collect())
    }

    /// Input made of section/subtitle pairs, flattened in order.
    pub fn pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (SectionId, S)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        for (id, subtitle) in pairs {
            entries.push(RawEntry::Section(id));
            entries.push(RawEntry::Subtitle(subtitle.into()));
        }
        Self::Sequence(entries)
    }

    /// Parse entries from their text form (`:name` or subtitle text).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSectionId`] for a malformed `:name`.
    pub fn parse_entries<I, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|e| e.as_ref().parse::<RawEntry>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Sequence)
    }

    /// Build from a JSON-model value. Arrays become sequences of parsed
    /// entries; every other value becomes [`RawInput::Scalar`].
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::Config`] if an array element is not a
    /// string, or [`NavigatorError::Validation`] for a malformed `:name`.
    pub fn from_value(value: Value) -> Result<Self, NavigatorError> {
        match value {
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    match item {
                        Value::String(s) => entries.push(s.parse::<RawEntry>()?),
                        other => {
                            return Err(NavigatorError::Config(format!(
                                "entry {index} must be a string, got {other}"
                            )))
                        }
                    }
                }
                Ok(Self::Sequence(entries))
            }
            Value::String(s) => Ok(Self::Scalar(s)),
            other => Ok(Self::Scalar(other.to_string())),
        }
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, NavigatorError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, NavigatorError> {
        Self::from_value(serde_yaml::from_str(s)?)
    }

    /// Number of entries; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(entries) => entries.len(),
            Self::Scalar(_) => 1,
        }
    }

    /// Whether this is an empty sequence.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Sequence(entries) if entries.is_empty())
    }
}

impl<'de> Deserialize<'de> for RawInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<Vec<RawEntry>> for RawInput {
    fn from(entries: Vec<RawEntry>) -> Self {
        Self::Sequence(entries)
    }
}
