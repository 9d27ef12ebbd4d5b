//! Catalog item (record) model

use crate::metadata::{MetadataField, MetadataValue};
use serde::{Deserialize, Serialize};

/// A catalog record: an identity plus an ordered list of metadata values
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    metadata: Vec<(MetadataField, MetadataValue)>,
}

impl Item {
    /// Create an empty item with a fresh v4 UUID identity
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            metadata: Vec::new(),
        }
    }

    /// Create an empty item with a known identity
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: Vec::new(),
        }
    }

    /// Append a metadata value, preserving insertion order
    pub fn add_metadata(
        &mut self,
        field: MetadataField,
        value: impl Into<String>,
        language: Option<String>,
    ) {
        self.metadata
            .push((field, MetadataValue::new(value, language)));
    }

    /// Every value of `field` across all language variants, in
    /// insertion order. A field with no values yields an empty list.
    pub fn metadata_values(&self, field: &MetadataField) -> Vec<&str> {
        self.metadata
            .iter()
            .filter(|(f, _)| f == field)
            .map(|(_, v)| v.value.as_str())
            .collect()
    }

    /// The full ordered metadata list
    pub fn metadata(&self) -> &[(MetadataField, MetadataValue)] {
        &self.metadata
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}
