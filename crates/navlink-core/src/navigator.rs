//! # Navigator
//!
//! Validates the raw section list of one navigation block and answers the
//! questions the rendering layer asks while drawing it: which sections to
//! link, how to show their subtitles, and which links need authorization.
//!
//! ## Lifecycle
//!
//! A navigator is built once per render pass. Construction validates the
//! input and resolves every derived value; it either succeeds completely or
//! returns a [`NavigatorError`]. After that the navigator is immutable and
//! all queries are infallible and side-effect free.
//!
//! ## Validation
//!
//! Checked in order, first failure wins:
//!
//! 1. The input is a sequence, else [`NavigatorError::InvalidSections`].
//! 2. With subtitles present, the length is even, else
//!    [`NavigatorError::InvalidArrayCount`].
//! 3. The input is not display strings: the first entry is a section, not
//!    every entry is a subtitle, and with subtitles present the entries
//!    strictly alternate section, subtitle. Else
//!    [`NavigatorError::InvalidType`].

use serde::Serialize;

use crate::error::NavigatorError;
use crate::identity::{PredicateName, SectionId};
use crate::input::{RawEntry, RawInput};
use crate::options::{Authorize, NavigatorOptions, DEFAULT_AUTHORIZED_CSS};
use crate::subtitles::SubtitleMap;
use crate::text;

/// The authentication layer's answer to "may the viewer see this link?".
///
/// The navigator never decides this itself; it only names the predicate
/// (see [`Navigator::authorization_method`]) and asks once per section that
/// requires authorization.
pub trait Authorizer {
    /// Whether the viewer passes `method` for the link to `section`.
    fn is_authorized(&self, method: &PredicateName, section: &SectionId) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&PredicateName, &SectionId) -> bool,
{
    fn is_authorized(&self, method: &PredicateName, section: &SectionId) -> bool {
        self(method, section)
    }
}

/// Everything the templating layer needs to draw one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Section the link points to.
    pub section: SectionId,
    /// Visible link text.
    pub text: String,
    /// Hover text (`title` attribute), set in hover-text mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Inline subtitle, set in the default subtitle mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Extra CSS class; empty unless the link required authorization.
    pub css: String,
}

/// Validated navigation block.
#[derive(Debug, Clone)]
pub struct Navigator {
    entries: Vec<RawEntry>,
    options: NavigatorOptions,
    has_subtitles: bool,
    sections: Vec<SectionId>,
    subtitles: SubtitleMap,
    authorization_method: PredicateName,
    authorized_css: String,
}

impl Navigator {
    /// Validate `input` and resolve every derived value.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; see the module docs for the
    /// order in which rules are checked.
    pub fn new(input: RawInput, options: NavigatorOptions) -> Result<Self, NavigatorError> {
        let entries = match validate(input) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "rejected navigation sections");
                return Err(e);
            }
        };

        let has_subtitles = has_subtitles(&entries);
        let sections = if has_subtitles {
            parse_sections(&entries)
        } else {
            entries.iter().filter_map(RawEntry::as_section).cloned().collect()
        };
        let subtitles = if has_subtitles {
            pair_subtitles(&entries)
        } else {
            SubtitleMap::new()
        };

        let authorization_method = match (&options.authorize, &options.with) {
            (Some(_), Some(with)) => with.clone(),
            _ => PredicateName::default(),
        };

        let mut navigator = Self {
            entries,
            options,
            has_subtitles,
            sections,
            subtitles,
            authorization_method,
            authorized_css: String::new(),
        };
        navigator.authorized_css = navigator.resolve_authorized_css();

        tracing::debug!(
            sections = navigator.sections.len(),
            subtitles = navigator.has_subtitles,
            authorized = navigator.methods_to_authorize().len(),
            "navigator ready"
        );
        Ok(navigator)
    }

    /// Like [`Navigator::new`], and also writes this block's subtitles into
    /// the caller's request-scoped `map`.
    pub fn with_subtitle_map(
        input: RawInput,
        options: NavigatorOptions,
        map: &mut SubtitleMap,
    ) -> Result<Self, NavigatorError> {
        let navigator = Self::new(input, options)?;
        navigator.fill_subtitles(map);
        Ok(navigator)
    }

    /// Write every section/subtitle pair into `map`, replacing existing
    /// entries for the same section.
    pub fn fill_subtitles(&self, map: &mut SubtitleMap) {
        for (section, subtitle) in self.subtitles.iter() {
            tracing::trace!(%section, subtitle, "subtitle");
            map.insert(section.clone(), subtitle);
        }
    }

    /// Section identifiers in input order, with subtitles removed.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// The validated input as given.
    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    /// Options this navigator was built with.
    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    /// Whether any entry is a subtitle.
    pub fn has_subtitles(&self) -> bool {
        self.has_subtitles
    }

    /// Subtitles of this block.
    pub fn subtitles(&self) -> &SubtitleMap {
        &self.subtitles
    }

    /// Subtitle paired with `section`, if any.
    pub fn subtitle_for(&self, section: &SectionId) -> Option<&str> {
        self.subtitles.get(section)
    }

    /// Default mode: subtitles exist and no other display mode was asked for.
    pub fn wants_subtitles(&self) -> bool {
        self.has_subtitles && !self.wants_hover_text() && !self.wants_link_text()
    }

    /// Subtitles shown as hover text.
    pub fn wants_hover_text(&self) -> bool {
        self.has_subtitles && self.options.hover_text
    }

    /// Subtitles shown as the link text itself.
    pub fn wants_link_text(&self) -> bool {
        self.has_subtitles && self.options.link_text
    }

    /// Title-case display text for `section`.
    pub fn text_for(&self, section: &SectionId) -> String {
        text::text_for(section)
    }

    /// Predicate the authentication layer must expose.
    ///
    /// `with` only takes effect when `authorize` is also given; on its own
    /// the default `logged_in?` is returned.
    pub fn authorization_method(&self) -> &PredicateName {
        &self.authorization_method
    }

    /// Sections whose links require authorization. `authorize: all` expands
    /// to every section; an explicit list is returned verbatim.
    pub fn methods_to_authorize(&self) -> &[SectionId] {
        match &self.options.authorize {
            None => &[],
            Some(Authorize::All) => self.sections.as_slice(),
            Some(Authorize::Only(ids)) => ids.as_slice(),
        }
    }

    /// Whether the link to `section` needs the authorization predicate.
    pub fn requires_authorization(&self, section: &SectionId) -> bool {
        self.methods_to_authorize().contains(section)
    }

    /// CSS class for authorized links: empty when nothing requires
    /// authorization, otherwise `authorized_css` or `authorized_nav_link`.
    pub fn authorized_css(&self) -> &str {
        &self.authorized_css
    }

    /// Links to draw, in order. Sections that require authorization are
    /// dropped unless `authorizer` approves them.
    pub fn links<A>(&self, authorizer: &A) -> Vec<NavLink>
    where
        A: Authorizer + ?Sized,
    {
        let mut links = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let guarded = self.requires_authorization(section);
            if guarded && !authorizer.is_authorized(&self.authorization_method, section) {
                tracing::trace!(%section, method = %self.authorization_method, "link hidden");
                continue;
            }

            let subtitle = self.subtitle_for(section).map(str::to_string);
            let text = match (&subtitle, self.wants_link_text()) {
                (Some(s), true) => s.clone(),
                _ => self.text_for(section),
            };
            links.push(NavLink {
                section: section.clone(),
                text,
                title: subtitle.clone().filter(|_| self.wants_hover_text()),
                subtitle: subtitle.filter(|_| self.wants_subtitles()),
                css: if guarded { self.authorized_css.clone() } else { String::new() },
            });
        }
        links
    }

    fn resolve_authorized_css(&self) -> String {
        if self.methods_to_authorize().is_empty() {
            return String::new();
        }
        self.options
            .authorized_css
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHORIZED_CSS.to_string())
    }
}

fn validate(input: RawInput) -> Result<Vec<RawEntry>, NavigatorError> {
    let entries = match input {
        RawInput::Sequence(entries) => entries,
        RawInput::Scalar(_) => return Err(NavigatorError::InvalidSections),
    };

    let subtitled = has_subtitles(&entries);
    if subtitled && entries.len() % 2 != 0 {
        return Err(NavigatorError::InvalidArrayCount { len: entries.len() });
    }

    if entries.first().map_or(false, RawEntry::is_subtitle) {
        return Err(invalid_type("first entry is a subtitle"));
    }
    if entries.iter().all(RawEntry::is_subtitle) {
        return Err(invalid_type("no section identifiers given"));
    }
    if subtitled {
        for (index, pair) in entries.chunks_exact(2).enumerate() {
            if !matches!(pair, [RawEntry::Section(_), RawEntry::Subtitle(_)]) {
                return Err(invalid_type(format!(
                    "entries {} and {} are not a section followed by its subtitle",
                    index * 2,
                    index * 2 + 1
                )));
            }
        }
    }

    Ok(entries)
}

fn invalid_type(reason: impl Into<String>) -> NavigatorError {
    NavigatorError::InvalidType {
        reason: reason.into(),
    }
}

fn has_subtitles(entries: &[RawEntry]) -> bool {
    entries.iter().any(RawEntry::is_subtitle)
}

/// Sections at even positions.
fn parse_sections(entries: &[RawEntry]) -> Vec<SectionId> {
    entries
        .iter()
        .step_by(2)
        .filter_map(RawEntry::as_section)
        .cloned()
        .collect()
}

fn pair_subtitles(entries: &[RawEntry]) -> SubtitleMap {
    let mut map = SubtitleMap::new();
    for pair in entries.chunks_exact(2) {
        if let [RawEntry::Section(section), RawEntry::Subtitle(subtitle)] = pair {
            map.insert(section.clone(), subtitle.as_str());
        }
    }
    map
}
