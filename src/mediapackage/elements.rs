//! Well-known media package element flavors
//!
//! A fixed registry of the named flavors the surrounding system relies on
//! to tag and select package elements, plus the conventional manifest file
//! name. The `type/subtype` pairs are persisted in package manifests, so
//! they are wire identifiers and must stay stable.

use super::flavor::ElementFlavor;

/// The manifest file name
pub const MANIFEST_FILENAME: &str = "index.xml";

/// Cover art flavor
pub const MEDIAPACKAGE_COVER_FLAVOR: ElementFlavor =
    ElementFlavor::with_const_description("cover", "source", "Cover art");

// Track flavors

/// Track containing the presenter/s
pub const PRESENTER_SOURCE: ElementFlavor = ElementFlavor::new_const("presenter", "source");

/// Track containing presentational material
pub const PRESENTATION_SOURCE: ElementFlavor = ElementFlavor::new_const("presentation", "source");

/// Track containing the presenter/s partial material
pub const PRESENTER_SOURCE_PARTIAL: ElementFlavor =
    ElementFlavor::new_const("presenter", "source+partial");

/// Track containing presentational partial material
pub const PRESENTATION_SOURCE_PARTIAL: ElementFlavor =
    ElementFlavor::new_const("presentation", "source+partial");

/// Track capturing the audience
pub const AUDIENCE_SOURCE: ElementFlavor = ElementFlavor::new_const("audience", "source");

/// Track capturing the contents of a document camera
pub const DOCUMENTS_SOURCE: ElementFlavor = ElementFlavor::new_const("documents", "source");

/// Track without any known semantics
pub const INDEFINITE_SOURCE: ElementFlavor = ElementFlavor::new_const("indefinite", "source");

// Dublin core catalog flavors

/// Dublin core catalog describing an episode
pub const EPISODE: ElementFlavor = ElementFlavor::new_const("dublincore", "episode");

/// Dublin core catalog describing a series
pub const SERIES: ElementFlavor = ElementFlavor::new_const("dublincore", "series");

// MPEG-7 catalog flavors

/// The flavor produced by video segmentation
pub const SEGMENTS: ElementFlavor = ElementFlavor::new_const("mpeg-7", "segments");

/// The flavor produced by text extraction
pub const TEXTS: ElementFlavor = ElementFlavor::new_const("mpeg-7", "text");

/// The flavor produced by speech recognition
pub const SPEECH: ElementFlavor = ElementFlavor::new_const("mpeg-7", "speech");

/// A flavor for chapters
pub const CHAPTERING: ElementFlavor =
    ElementFlavor::with_const_description("mpeg-7", "chapter", "MPEG-7 chapters catalog");

// Player preview flavors

/// Presenter player preview image flavor
pub const PRESENTER_PLAYER_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presenter",
    "player+preview",
    "Presenter player preview image",
);

/// Presentation player preview image flavor
pub const PRESENTATION_PLAYER_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presentation",
    "player+preview",
    "Presentation player preview image",
);

/// Presenter search result preview image flavor
pub const PRESENTER_SEARCHRESULT_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presenter",
    "search+preview",
    "Presenter search result preview image",
);

/// Presentation search result preview image flavor
pub const PRESENTATION_SEARCHRESULT_PREVIEW: ElementFlavor =
    ElementFlavor::with_const_description(
        "presentation",
        "search+preview",
        "Presentation search result preview image",
    );

/// Presenter segment preview image flavor
pub const PRESENTER_SEGMENT_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presenter",
    "segment+preview",
    "Presenter segment preview image",
);

/// Presentation segment preview image flavor
pub const PRESENTATION_SEGMENT_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presentation",
    "segment+preview",
    "Presentation segment preview image",
);

// Feed flavors

/// Presenter feed preview image flavor
pub const PRESENTER_FEED_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presenter",
    "feed+preview",
    "Presenter feed preview image",
);

/// Presentation feed preview image flavor
pub const PRESENTATION_FEED_PREVIEW: ElementFlavor = ElementFlavor::with_const_description(
    "presentation",
    "feed+preview",
    "Presentation feed preview image",
);

// Security flavors

/// Episode bound XACML policy flavor
pub const XACML_POLICY_EPISODE: ElementFlavor = ElementFlavor::with_const_description(
    "security",
    "xacml+episode",
    "Security policy for the mediapackage",
);

/// Series bound XACML policy flavor
pub const XACML_POLICY_SERIES: ElementFlavor = ElementFlavor::with_const_description(
    "security",
    "xacml+series",
    "Security policy for the series",
);

/// XACML policy flavor
///
/// Kept for reading legacy manifests that still carry `security/xacml`.
#[deprecated(note = "use XACML_POLICY_SERIES instead")]
pub const XACML_POLICY: ElementFlavor = ElementFlavor::with_const_description(
    "security",
    "xacml",
    "Security policy for the mediapackage",
);

/// Export files policy flavor
pub const EXPORT_POLICY: ElementFlavor = ElementFlavor::with_const_description(
    "security",
    "acl",
    "Security policy for the export files",
);

// Other flavors

/// A default flavor for caption files
pub const CAPTION_GENERAL: ElementFlavor =
    ElementFlavor::with_const_description("captions", "timedtext", "DFXP Captions catalog");

/// A flavor for DFXP caption files
pub const CAPTION_DFXP_FLAVOR: ElementFlavor =
    ElementFlavor::with_const_description("caption", "dfxp", "DFXP Captions catalog");

/// OAI-PMH subtype flavor
pub const OAIPMH: ElementFlavor = ElementFlavor::new_const("*", "oaipmh");

/// Comments metadata flavor
pub const COMMENTS: ElementFlavor = ElementFlavor::new_const("metadata", "comments");

/// Notes metadata flavor
pub const NOTES: ElementFlavor = ElementFlavor::new_const("metadata", "notes");

/// Partial SMIL flavor
pub const SMIL: ElementFlavor = ElementFlavor::new_const("smil", "source+partial");

/// Processing properties flavor
pub const PROCESSING_PROPERTIES: ElementFlavor =
    ElementFlavor::new_const("processing", "defaults");

/// Every well-known flavor, paired with its symbolic name
///
/// Each `type/subtype` pair appears exactly once. The deprecated
/// `security/xacml` entry is listed so legacy manifests keep resolving.
#[allow(deprecated)]
pub static WELL_KNOWN: [(&str, ElementFlavor); 33] = [
    ("MEDIAPACKAGE_COVER_FLAVOR", MEDIAPACKAGE_COVER_FLAVOR),
    ("PRESENTER_SOURCE", PRESENTER_SOURCE),
    ("PRESENTATION_SOURCE", PRESENTATION_SOURCE),
    ("PRESENTER_SOURCE_PARTIAL", PRESENTER_SOURCE_PARTIAL),
    ("PRESENTATION_SOURCE_PARTIAL", PRESENTATION_SOURCE_PARTIAL),
    ("AUDIENCE_SOURCE", AUDIENCE_SOURCE),
    ("DOCUMENTS_SOURCE", DOCUMENTS_SOURCE),
    ("INDEFINITE_SOURCE", INDEFINITE_SOURCE),
    ("EPISODE", EPISODE),
    ("SERIES", SERIES),
    ("SEGMENTS", SEGMENTS),
    ("TEXTS", TEXTS),
    ("SPEECH", SPEECH),
    ("CHAPTERING", CHAPTERING),
    ("PRESENTER_PLAYER_PREVIEW", PRESENTER_PLAYER_PREVIEW),
    ("PRESENTATION_PLAYER_PREVIEW", PRESENTATION_PLAYER_PREVIEW),
    ("PRESENTER_SEARCHRESULT_PREVIEW", PRESENTER_SEARCHRESULT_PREVIEW),
    (
        "PRESENTATION_SEARCHRESULT_PREVIEW",
        PRESENTATION_SEARCHRESULT_PREVIEW,
    ),
    ("PRESENTER_SEGMENT_PREVIEW", PRESENTER_SEGMENT_PREVIEW),
    ("PRESENTATION_SEGMENT_PREVIEW", PRESENTATION_SEGMENT_PREVIEW),
    ("PRESENTER_FEED_PREVIEW", PRESENTER_FEED_PREVIEW),
    ("PRESENTATION_FEED_PREVIEW", PRESENTATION_FEED_PREVIEW),
    ("XACML_POLICY_EPISODE", XACML_POLICY_EPISODE),
    ("XACML_POLICY_SERIES", XACML_POLICY_SERIES),
    ("XACML_POLICY", XACML_POLICY),
    ("EXPORT_POLICY", EXPORT_POLICY),
    ("CAPTION_GENERAL", CAPTION_GENERAL),
    ("CAPTION_DFXP_FLAVOR", CAPTION_DFXP_FLAVOR),
    ("OAIPMH", OAIPMH),
    ("COMMENTS", COMMENTS),
    ("NOTES", NOTES),
    ("SMIL", SMIL),
    ("PROCESSING_PROPERTIES", PROCESSING_PROPERTIES),
];

/// Look up a well-known flavor by its type and subtype
pub fn lookup(flavor_type: &str, subtype: &str) -> Option<&'static ElementFlavor> {
    WELL_KNOWN
        .iter()
        .find(|(_, flavor)| flavor.flavor_type() == flavor_type && flavor.subtype() == subtype)
        .map(|(_, flavor)| flavor)
}

/// Look up the symbolic name of a well-known flavor by its type and subtype
pub fn lookup_name(flavor_type: &str, subtype: &str) -> Option<&'static str> {
    WELL_KNOWN
        .iter()
        .find(|(_, flavor)| flavor.flavor_type() == flavor_type && flavor.subtype() == subtype)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The wire identifiers every persisted manifest depends on
    const EXPECTED: [(&str, &str, &str); 33] = [
        ("MEDIAPACKAGE_COVER_FLAVOR", "cover", "source"),
        ("PRESENTER_SOURCE", "presenter", "source"),
        ("PRESENTATION_SOURCE", "presentation", "source"),
        ("PRESENTER_SOURCE_PARTIAL", "presenter", "source+partial"),
        ("PRESENTATION_SOURCE_PARTIAL", "presentation", "source+partial"),
        ("AUDIENCE_SOURCE", "audience", "source"),
        ("DOCUMENTS_SOURCE", "documents", "source"),
        ("INDEFINITE_SOURCE", "indefinite", "source"),
        ("EPISODE", "dublincore", "episode"),
        ("SERIES", "dublincore", "series"),
        ("SEGMENTS", "mpeg-7", "segments"),
        ("TEXTS", "mpeg-7", "text"),
        ("SPEECH", "mpeg-7", "speech"),
        ("CHAPTERING", "mpeg-7", "chapter"),
        ("PRESENTER_PLAYER_PREVIEW", "presenter", "player+preview"),
        ("PRESENTATION_PLAYER_PREVIEW", "presentation", "player+preview"),
        ("PRESENTER_SEARCHRESULT_PREVIEW", "presenter", "search+preview"),
        ("PRESENTATION_SEARCHRESULT_PREVIEW", "presentation", "search+preview"),
        ("PRESENTER_SEGMENT_PREVIEW", "presenter", "segment+preview"),
        ("PRESENTATION_SEGMENT_PREVIEW", "presentation", "segment+preview"),
        ("PRESENTER_FEED_PREVIEW", "presenter", "feed+preview"),
        ("PRESENTATION_FEED_PREVIEW", "presentation", "feed+preview"),
        ("XACML_POLICY_EPISODE", "security", "xacml+episode"),
        ("XACML_POLICY_SERIES", "security", "xacml+series"),
        ("XACML_POLICY", "security", "xacml"),
        ("EXPORT_POLICY", "security", "acl"),
        ("CAPTION_GENERAL", "captions", "timedtext"),
        ("CAPTION_DFXP_FLAVOR", "caption", "dfxp"),
        ("OAIPMH", "*", "oaipmh"),
        ("COMMENTS", "metadata", "comments"),
        ("NOTES", "metadata", "notes"),
        ("SMIL", "smil", "source+partial"),
        ("PROCESSING_PROPERTIES", "processing", "defaults"),
    ];

    #[test]
    fn test_registry_matches_wire_identifiers() {
        assert_eq!(WELL_KNOWN.len(), EXPECTED.len());
        for ((name, flavor), (expected_name, flavor_type, subtype)) in
            WELL_KNOWN.iter().zip(EXPECTED)
        {
            assert_eq!(*name, expected_name);
            assert_eq!(flavor.flavor_type(), flavor_type, "type of {name}");
            assert_eq!(flavor.subtype(), subtype, "subtype of {name}");
        }
    }

    #[test]
    fn test_registry_pairs_are_unique() {
        for (i, (name_a, flavor_a)) in WELL_KNOWN.iter().enumerate() {
            for (name_b, flavor_b) in &WELL_KNOWN[i + 1..] {
                assert_ne!(
                    flavor_a, flavor_b,
                    "{name_a} and {name_b} collide on {flavor_a}"
                );
            }
        }
    }

    #[test]
    fn test_manifest_filename() {
        assert_eq!(MANIFEST_FILENAME, "index.xml");
    }

    #[test]
    fn test_episode_lookup() {
        let flavor = lookup("dublincore", "episode").unwrap();
        assert_eq!(*flavor, EPISODE);
        assert_eq!(lookup_name("dublincore", "episode"), Some("EPISODE"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_xacml_policy_is_distinct() {
        assert_eq!(XACML_POLICY.flavor_type(), "security");
        assert_eq!(XACML_POLICY.subtype(), "xacml");
        assert_ne!(XACML_POLICY, XACML_POLICY_SERIES);
        assert_eq!(lookup_name("security", "xacml"), Some("XACML_POLICY"));
    }

    #[test]
    fn test_oaipmh_wildcard_value_is_preserved() {
        assert_eq!(OAIPMH.flavor_type(), "*");
        assert_eq!(OAIPMH.subtype(), "oaipmh");
    }

    #[test]
    fn test_lookup_unknown_pair() {
        assert!(lookup("presenter", "unknown").is_none());
        assert!(lookup_name("nope", "nope").is_none());
    }

    #[test]
    fn test_constant_references_compare_equal() {
        let first = &EPISODE;
        let second = lookup("dublincore", "episode").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptions_do_not_affect_lookup() {
        // CAPTION_GENERAL and CAPTION_DFXP_FLAVOR share a description but
        // stay distinct entries.
        assert_ne!(CAPTION_GENERAL, CAPTION_DFXP_FLAVOR);
        assert_eq!(CAPTION_GENERAL.description(), CAPTION_DFXP_FLAVOR.description());
    }
}
