//! Display text derived from section identifiers.

use crate::identity::SectionId;

/// Turn an identifier into title-case link text: `contact_me` becomes
/// `Contact Me`.
///
/// A trailing `_id` is dropped, underscores separate words, and every word
/// is capitalized. Runs of underscores collapse to a single space.
pub fn text_for(section: &SectionId) -> String {
    humanize(section.as_str())
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn humanize(word: &str) -> String {
    let word = word.strip_suffix("_id").unwrap_or(word);
    word.replace('_', " ").to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
