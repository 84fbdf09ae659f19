//! The immutable game record fed to the catalog by ingestion.
//!
//! A record keeps the raw text of all seven catalog fields; facet builders
//! read and parse the attribute they index. Multi-valued attributes
//! (developers, publishers, tags) are `;`-delimited within one field.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Unique identifier of a game across the catalog.
pub type AppId = u32;

/// Number of fields a catalog row carries.
pub const RECORD_FIELDS: usize = 7;

/// Attribute positions within a record's raw field list.
pub const ATTR_RELEASE_DATE: usize = 2;
pub const ATTR_DEVELOPERS: usize = 3;
pub const ATTR_PUBLISHERS: usize = 4;
pub const ATTR_TAGS: usize = 5;
pub const ATTR_POSITIVE_REVIEWS: usize = 6;

/// One game entry: id, display name, and the raw attribute fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    id: AppId,
    name: String,
    attributes: Vec<String>,
}

impl GameRecord {
    /// Build a record from the raw fields of one catalog row.
    ///
    /// Field 0 must parse as the app id; field 1 is the display name. The
    /// full field list is retained so facet builders can read the raw
    /// attribute text. Extra trailing fields are tolerated.
    pub fn from_fields(fields: Vec<String>) -> Result<Self, RecordError> {
        if fields.len() < RECORD_FIELDS {
            return Err(RecordError::FieldCount {
                expected: RECORD_FIELDS,
                actual: fields.len(),
            });
        }
        let id = fields[0]
            .trim()
            .parse()
            .map_err(|_| RecordError::BadId(fields[0].clone()))?;
        let name = fields[1].clone();
        Ok(Self {
            id,
            name,
            attributes: fields,
        })
    }

    pub fn id(&self) -> AppId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw attribute text at `index`, or `""` when absent.
    pub fn attribute(&self, index: usize) -> &str {
        self.attributes.get(index).map(String::as_str).unwrap_or("")
    }

    /// Entries of a `;`-delimited attribute, empty segments dropped.
    pub fn list_attribute(&self, index: usize) -> impl Iterator<Item = &str> {
        self.attribute(index)
            .split(';')
            .filter(|entry| !entry.is_empty())
    }

    pub fn release_date_text(&self) -> &str {
        self.attribute(ATTR_RELEASE_DATE)
    }

    pub fn developers(&self) -> impl Iterator<Item = &str> {
        self.list_attribute(ATTR_DEVELOPERS)
    }

    pub fn publishers(&self) -> impl Iterator<Item = &str> {
        self.list_attribute(ATTR_PUBLISHERS)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.list_attribute(ATTR_TAGS)
    }

    pub fn positive_reviews_text(&self) -> &str {
        self.attribute(ATTR_POSITIVE_REVIEWS)
    }
}
