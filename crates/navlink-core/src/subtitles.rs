//! # Subtitle Lookup
//!
//! Mapping from section to its subtitle. The map is owned by whoever builds
//! the navigation (typically one per request), never process-wide, so two
//! navigators built concurrently cannot overwrite each other's entries.
//! Within one map, later writes for the same section win.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::SectionId;

/// Section-to-subtitle lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtitleMap(BTreeMap<SectionId, String>);

impl SubtitleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subtitle for `section`, returning the one it replaced.
    pub fn insert(&mut self, section: SectionId, subtitle: impl Into<String>) -> Option<String> {
        self.0.insert(section, subtitle.into())
    }

    pub fn get(&self, section: &SectionId) -> Option<&str> {
        self.0.get(section).map(String::as_str)
    }

    pub fn contains(&self, section: &SectionId) -> bool {
        self.0.contains_key(section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Copy every entry of `other` into this map, overwriting on conflict.
    pub fn extend_from(&mut self, other: &SubtitleMap) {
        for (section, subtitle) in other.iter() {
            self.0.insert(section.clone(), subtitle.to_string());
        }
    }
}

impl FromIterator<(SectionId, String)> for SubtitleMap {
    fn from_iter<I: IntoIterator<Item = (SectionId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SectionId {
        SectionId::new(s).unwrap()
    }

    #[test]
    fn insert_overwrites() {
        let mut map = SubtitleMap::new();
        assert_eq!(map.insert(id("home"), "Start"), None);
        assert_eq!(map.insert(id("home"), "Welcome").as_deref(), Some("Start"));
        assert_eq!(map.get(&id("home")), Some("Welcome"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn extend_from_last_write_wins() {
        let mut request: SubtitleMap = [(id("a"), "one".to_string())].into_iter().collect();
        let other: SubtitleMap = [(id("a"), "two".to_string()), (id("b"), "three".to_string())]
            .into_iter()
            .collect();
        request.extend_from(&other);
        assert_eq!(request.get(&id("a")), Some("two"));
        assert!(request.contains(&id("b")));
    }

    #[test]
    fn serializes_as_object() {
        let map: SubtitleMap = [(id("blog"), "Posts".to_string())].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"blog":"Posts"}"#);
    }
}
