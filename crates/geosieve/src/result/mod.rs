//! Search result records as handed over by the search engine.
//!
//! These types are read-only to this crate: the deduplicator only ever
//! borrows them and never reorders or mutates the caller's list.

use std::{collections::HashMap, fmt};

/// Name key holding the postcode string on postcode results.
pub const POSTCODE_REF_KEY: &str = "ref";

/// The table a search result was read from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTable {
    /// Main place table, backed by OSM objects
    Placex,
    /// Interpolation lines
    Osmline,
    /// US TIGER house number data
    Tiger,
    /// Artificial postcode centroids
    Postcode,
    /// Country fallback entries
    Country,
}

/// Kind of an OSM object.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsmType {
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Node,
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    Way,
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Relation,
}

impl OsmType {
    /// Parse the single-character OSM type code (`N`, `W` or `R`).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::Node),
            'W' => Some(Self::Way),
            'R' => Some(Self::Relation),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Node => 'N',
            Self::Way => 'W',
            Self::Relation => 'R',
        }
    }
}

impl fmt::Display for OsmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Reference to the OSM object backing a result.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OsmObject {
    pub osm_type: OsmType,
    pub osm_id: i64,
}

impl OsmObject {
    #[must_use]
    pub fn new(osm_type: OsmType, osm_id: i64) -> Self {
        Self { osm_type, osm_id }
    }

    #[must_use]
    pub fn node(osm_id: i64) -> Self {
        Self::new(OsmType::Node, osm_id)
    }

    #[must_use]
    pub fn way(osm_id: i64) -> Self {
        Self::new(OsmType::Way, osm_id)
    }

    #[must_use]
    pub fn relation(osm_id: i64) -> Self {
        Self::new(OsmType::Relation, osm_id)
    }
}

impl fmt::Display for OsmObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.osm_type, self.osm_id)
    }
}

/// Main class/type tag pair of a result, e.g. `boundary=postal_code`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// OSM key, e.g. `boundary`
    pub class: String,
    /// OSM value, e.g. `postal_code`
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

impl Category {
    pub fn new(class: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            kind: kind.into(),
        }
    }

    /// Returns true for `class == class && kind == kind` without allocating.
    #[must_use]
    pub fn is(&self, class: &str, kind: &str) -> bool {
        self.class == class && self.kind == kind
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.class, self.kind)
    }
}

/// A single result produced by the search engine.
///
/// Only the fields needed to tell duplicates apart are modelled here; the API
/// layer keeps everything else (geometry, address details, ...) alongside.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Table the result came from
    pub source_table: SourceTable,
    /// Backing OSM object, if there is one
    pub osm_object: Option<OsmObject>,
    /// Main tag of the result
    pub category: Category,
    /// Fully formatted name as shown to the user
    pub display_name: String,
    /// Address rank (2 = continent ... 30 = building)
    pub rank_address: u8,
    /// Name tags of the object. Postcode results carry their postcode under `ref`.
    pub names: Option<HashMap<String, String>>,
}

pub type SearchResults = Vec<SearchResult>;

/// Key under which two results look identical to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification<'a> {
    pub osm_type: Option<OsmType>,
    pub category: &'a Category,
    pub display_name: &'a str,
    pub rank_address: u8,
}

impl SearchResult {
    pub fn new(
        source_table: SourceTable,
        category: Category,
        display_name: impl Into<String>,
        rank_address: u8,
    ) -> Self {
        Self {
            source_table,
            osm_object: None,
            category,
            display_name: display_name.into(),
            rank_address,
            names: None,
        }
    }

    #[must_use]
    pub fn with_osm_object(mut self, osm_object: OsmObject) -> Self {
        self.osm_object = Some(osm_object);
        self
    }

    #[must_use]
    pub fn with_names(mut self, names: HashMap<String, String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Add a single name tag, creating the name map if needed.
    #[must_use]
    pub fn with_name(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.names
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a name tag.
    #[must_use]
    pub fn name(&self, key: &str) -> Option<&str> {
        self.names
            .as_ref()
            .and_then(|names| names.get(key))
            .map(String::as_str)
    }

    /// The postcode string of a result, i.e. its `ref` name.
    #[must_use]
    pub fn postcode_ref(&self) -> Option<&str> {
        self.name(POSTCODE_REF_KEY)
    }

    #[must_use]
    pub fn is_postcode(&self) -> bool {
        self.source_table == SourceTable::Postcode
    }

    /// Returns the postcode if this result is a `boundary=postal_code`
    /// relation from the place table.
    #[must_use]
    pub fn postcode_relation_ref(&self) -> Option<&str> {
        let is_relation = self
            .osm_object
            .is_some_and(|obj| obj.osm_type == OsmType::Relation);
        if self.source_table == SourceTable::Placex
            && is_relation
            && self.category.is("boundary", "postal_code")
        {
            self.postcode_ref()
        } else {
            None
        }
    }

    /// Returns true if this result is the boundary relation for `postcode`.
    #[must_use]
    pub fn is_postcode_relation_for(&self, postcode: &str) -> bool {
        self.postcode_relation_ref() == Some(postcode)
    }

    /// The "looks the same to a user" key of this result.
    #[must_use]
    pub fn classification(&self) -> Classification<'_> {
        Classification {
            osm_type: self.osm_object.map(|obj| obj.osm_type),
            category: &self.category,
            display_name: &self.display_name,
            rank_address: self.rank_address,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.osm_object {
            Some(obj) => write!(
                f,
                "SearchResult {{ osm: {obj}, category: {}, name: \"{}\" }}",
                self.category, self.display_name
            ),
            None => write!(
                f,
                "SearchResult {{ source: {:?}, category: {}, name: \"{}\" }}",
                self.source_table, self.category, self.display_name
            ),
        }
    }
}
