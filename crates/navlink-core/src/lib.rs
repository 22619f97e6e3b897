//! # navlink-core — Navigation-Link Metadata
//!
//! Validates the section list of a navigation block and derives what the
//! templating layer needs to draw it. Rendering HTML and deciding whether a
//! viewer is logged in are left to the caller; this crate is pure data
//! transformation with no I/O.
//!
//! ```text
//! RawInput + NavigatorOptions
//!     │  Navigator::new (validate, fail fast)
//!     ▼
//! Navigator ── sections(), wants_*(), text_for(), authorization_method(),
//!              methods_to_authorize(), authorized_css(), links(&authorizer)
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Identifiers are types.** [`SectionId`] and [`PredicateName`] are
//!    validated newtypes; a display string cannot be passed where a section
//!    is expected.
//!
//! 2. **No global state.** Subtitles live in the navigator and, when the
//!    caller wants a shared lookup, in a [`SubtitleMap`] the caller owns.
//!
//! 3. **Resolve once.** Options are a fixed struct; derived values such as
//!    the authorized CSS class are computed at construction, so every query
//!    is a pure read.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The crate logs through `tracing` and never installs a subscriber.

pub mod error;
pub mod identity;
pub mod input;
pub mod navigator;
pub mod options;
pub mod subtitles;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use error::{NavigatorError, ValidationError};
pub use identity::{PredicateName, SectionId};
pub use input::{RawEntry, RawInput};
pub use navigator::{Authorizer, NavLink, Navigator};
pub use options::{
    Authorize, NavigatorOptions, DEFAULT_AUTHORIZATION_METHOD, DEFAULT_AUTHORIZED_CSS,
};
pub use subtitles::SubtitleMap;
pub use text::text_for;
