//! Element flavor value type
//!
//! A flavor classifies a media package element (track, catalog, attachment,
//! image) by role and subtype. The wire form is `type/subtype`, e.g.
//! `presenter/source` or `dublincore/episode`, and is what gets written into
//! package manifests and compared against on read.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

use crate::exceptions::{MediaPackageError, Result};

/// Separator between type and subtype in the wire form
pub const SEPARATOR: char = '/';

/// Wildcard matching any type or subtype
pub const WILDCARD: &str = "*";

/// A `type/subtype` classification for a media package element
///
/// Equality, ordering and hashing consider the type and subtype only. The
/// optional description is display metadata and never takes part in
/// comparisons, since manifests persist the `type/subtype` pair alone.
#[derive(Debug, Clone)]
pub struct ElementFlavor {
    flavor_type: Cow<'static, str>,
    subtype: Cow<'static, str>,
    description: Option<Cow<'static, str>>,
}

impl ElementFlavor {
    /// Create a flavor from static, already-normalized parts
    ///
    /// Intended for the well-known constants in [`crate::mediapackage::elements`];
    /// inputs must be lowercase and separator-free.
    pub const fn new_const(flavor_type: &'static str, subtype: &'static str) -> Self {
        ElementFlavor {
            flavor_type: Cow::Borrowed(flavor_type),
            subtype: Cow::Borrowed(subtype),
            description: None,
        }
    }

    /// Create a described flavor from static, already-normalized parts
    pub const fn with_const_description(
        flavor_type: &'static str,
        subtype: &'static str,
        description: &'static str,
    ) -> Self {
        ElementFlavor {
            flavor_type: Cow::Borrowed(flavor_type),
            subtype: Cow::Borrowed(subtype),
            description: Some(Cow::Borrowed(description)),
        }
    }

    /// Create a flavor from arbitrary type and subtype strings
    ///
    /// Both parts are trimmed and lowercased. Empty parts and parts
    /// containing the `/` separator are rejected.
    pub fn new(flavor_type: &str, subtype: &str) -> Result<Self> {
        Ok(ElementFlavor {
            flavor_type: Cow::Owned(normalize_part(flavor_type)?),
            subtype: Cow::Owned(normalize_part(subtype)?),
            description: None,
        })
    }

    /// Parse a flavor from its `type/subtype` wire form
    pub fn parse(flavor: &str) -> Result<Self> {
        trace!("Parsing flavor string: {flavor:?}");
        let (flavor_type, subtype) = flavor.split_once(SEPARATOR).ok_or_else(|| {
            MediaPackageError::MalformedFlavor(format!(
                "'{flavor}' is missing the '{SEPARATOR}' separator"
            ))
        })?;
        Self::new(flavor_type, subtype)
    }

    /// Return a copy of this flavor carrying the given description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(Cow::Owned(description.to_string()));
        self
    }

    /// The type part, e.g. `presenter`
    pub fn flavor_type(&self) -> &str {
        &self.flavor_type
    }

    /// The subtype part, e.g. `source`
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Human-readable description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Wildcard-aware equivalence check
    ///
    /// A `*` in either position of either flavor matches anything in that
    /// position, so `*/oaipmh` matches `presentation/oaipmh` and vice versa.
    pub fn matches(&self, other: &ElementFlavor) -> bool {
        part_matches(&self.flavor_type, &other.flavor_type)
            && part_matches(&self.subtype, &other.subtype)
    }
}

fn part_matches(a: &str, b: &str) -> bool {
    a == WILDCARD || b == WILDCARD || a == b
}

fn normalize_part(part: &str) -> Result<String> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return Err(MediaPackageError::MalformedFlavor(
            "type and subtype must not be empty".to_string(),
        ));
    }
    if trimmed.contains(SEPARATOR) {
        return Err(MediaPackageError::MalformedFlavor(format!(
            "'{trimmed}' must not contain '{SEPARATOR}'"
        )));
    }
    Ok(trimmed.to_lowercase())
}

impl fmt::Display for ElementFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.flavor_type, SEPARATOR, self.subtype)
    }
}

impl FromStr for ElementFlavor {
    type Err = MediaPackageError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for ElementFlavor {
    fn eq(&self, other: &Self) -> bool {
        self.flavor_type == other.flavor_type && self.subtype == other.subtype
    }
}

impl Eq for ElementFlavor {}

impl Hash for ElementFlavor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.flavor_type.hash(state);
        self.subtype.hash(state);
    }
}

impl Ord for ElementFlavor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.flavor_type
            .cmp(&other.flavor_type)
            .then_with(|| self.subtype.cmp(&other.subtype))
    }
}

impl PartialOrd for ElementFlavor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for ElementFlavor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementFlavor {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ElementFlavor::parse(&s).map_err(D::Error::custom)
    }
}
