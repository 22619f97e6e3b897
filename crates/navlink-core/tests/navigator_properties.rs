//! # Navigator Property Tests
//!
//! Checks the navigator's contract over generated identifiers and
//! subtitles, plus end-to-end scenarios that load input and options from
//! YAML documents the way a templating layer would.

use navlink_core::{
    Authorize, NavigatorError, NavigatorOptions, Navigator, PredicateName, RawEntry, RawInput,
    SectionId, SubtitleMap,
};
use proptest::prelude::*;

fn section_id() -> impl Strategy<Value = SectionId> {
    "[a-z][a-z0-9_]{0,12}".prop_map(|s| SectionId::new(s).expect("generated id is valid"))
}

fn subtitle() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,20}"
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

proptest! {
    #[test]
    fn plain_sections_are_returned_unchanged(ids in prop::collection::vec(section_id(), 1..16)) {
        let nav = Navigator::new(RawInput::sections(ids.clone()), NavigatorOptions::default())
            .unwrap();
        prop_assert_eq!(nav.sections(), ids.as_slice());
        prop_assert!(!nav.wants_subtitles());
        prop_assert!(!nav.wants_hover_text());
        prop_assert!(!nav.wants_link_text());
    }

    #[test]
    fn pairs_yield_sections_and_subtitles(
        pairs in prop::collection::vec((section_id(), subtitle()), 1..12)
    ) {
        let mut map = SubtitleMap::new();
        let nav = Navigator::with_subtitle_map(
            RawInput::pairs(pairs.clone()),
            NavigatorOptions::default(),
            &mut map,
        )
        .unwrap();

        let expected: Vec<SectionId> = pairs.iter().map(|(id, _)| id.clone()).collect();
        prop_assert_eq!(nav.sections(), expected.as_slice());

        // Later pairs win for repeated identifiers.
        for (id, _) in &pairs {
            let last = pairs.iter().rev().find(|(other, _)| other == id).map(|(_, s)| s.as_str());
            prop_assert_eq!(map.get(id), last);
        }
        prop_assert!(nav.wants_subtitles());
    }

    #[test]
    fn odd_subtitled_input_is_rejected(
        pairs in prop::collection::vec((section_id(), subtitle()), 1..8),
        tail in section_id(),
    ) {
        let mut entries = match RawInput::pairs(pairs) {
            RawInput::Sequence(entries) => entries,
            RawInput::Scalar(_) => unreachable!(),
        };
        entries.push(RawEntry::Section(tail));
        let len = entries.len();
        let err = Navigator::new(RawInput::Sequence(entries), NavigatorOptions::default())
            .unwrap_err();
        prop_assert_eq!(err, NavigatorError::InvalidArrayCount { len });
    }

    #[test]
    fn authorize_all_covers_every_section(ids in prop::collection::vec(section_id(), 1..16)) {
        let opts = NavigatorOptions::default().authorize(Authorize::All);
        let nav = Navigator::new(RawInput::sections(ids.clone()), opts).unwrap();
        prop_assert_eq!(nav.methods_to_authorize(), ids.as_slice());
        prop_assert_eq!(nav.authorized_css(), "authorized_nav_link");
    }
}

#[test]
fn yaml_configured_block() -> anyhow::Result<()> {
    init_tracing();

    let input = RawInput::from_yaml_str(
        r#"
- ":home"
- "Start here"
- ":reports"
- "Monthly numbers"
- ":admin"
- "Back office"
"#,
    )?;
    let options = NavigatorOptions::from_yaml_str(
        r#"
hover_text: true
authorize: [reports, admin]
with: can_view_reports?
"#,
    )?;

    let nav = Navigator::new(input, options)?;
    assert_eq!(nav.authorization_method().as_str(), "can_view_reports?");
    assert!(nav.wants_hover_text());

    let links = nav.links(&|method: &PredicateName, section: &SectionId| {
        method.as_str() == "can_view_reports?" && section.as_str() == "reports"
    });
    let shown: Vec<&str> = links.iter().map(|l| l.section.as_str()).collect();
    assert_eq!(shown, ["home", "reports"]);
    assert_eq!(links[1].title.as_deref(), Some("Monthly numbers"));
    assert_eq!(links[1].css, "authorized_nav_link");
    assert_eq!(links[0].css, "");
    Ok(())
}

#[test]
fn scalar_document_is_invalid_sections() -> anyhow::Result<()> {
    init_tracing();

    let input = RawInput::from_yaml_str("\":home\"")?;
    let err = Navigator::new(input, NavigatorOptions::default()).unwrap_err();
    assert_eq!(err, NavigatorError::InvalidSections);
    Ok(())
}

#[test]
fn display_strings_are_invalid_type() -> anyhow::Result<()> {
    let input = RawInput::from_json_str(r#"["Home", "About"]"#)?;
    let err = Navigator::new(input, NavigatorOptions::default()).unwrap_err();
    assert!(matches!(err, NavigatorError::InvalidType { .. }));
    Ok(())
}

#[test]
fn text_for_contact_me() {
    let nav = Navigator::new(
        RawInput::parse_entries([":contact_me"]).unwrap(),
        NavigatorOptions::default(),
    )
    .unwrap();
    assert_eq!(nav.text_for(&nav.sections()[0]), "Contact Me");
}

#[test]
fn links_serialize_for_templates() -> anyhow::Result<()> {
    let nav = Navigator::new(
        RawInput::parse_entries([":blog", "Posts"])?,
        NavigatorOptions::default(),
    )?;
    let links = nav.links(&|_: &PredicateName, _: &SectionId| true);
    assert_eq!(
        serde_json::to_value(&links)?,
        serde_json::json!([{ "section": "blog", "text": "Blog", "subtitle": "Posts", "css": "" }])
    );
    Ok(())
}
