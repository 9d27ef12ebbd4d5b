//! Metadata field and value types
//!
//! Field identifiers follow the dotted `schema.element[.qualifier]`
//! convention used in configuration files and index field names.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

lazy_static! {
    static ref FIELD_ID_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)?$").unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("Invalid metadata field identifier: {0}")]
    InvalidFieldId(String),
}

/// A metadata field identifier: schema, element, optional qualifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataField {
    pub schema: String,
    pub element: String,
    pub qualifier: Option<String>,
}

impl MetadataField {
    /// Parse a dotted identifier like `dc.title` or `dc.description.abstract`
    pub fn parse(field_id: &str) -> Result<Self, FieldParseError> {
        if !FIELD_ID_PATTERN.is_match(field_id) {
            return Err(FieldParseError::InvalidFieldId(field_id.to_string()));
        }
        let mut parts = field_id.split('.');
        Ok(Self {
            schema: parts.next().unwrap_or_default().to_string(),
            element: parts.next().unwrap_or_default().to_string(),
            qualifier: parts.next().map(|q| q.to_string()),
        })
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}.{}", self.schema, self.element, qualifier),
            None => write!(f, "{}.{}", self.schema, self.element),
        }
    }
}

/// One value of one metadata field, with an optional language tag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValue {
    pub value: String,
    pub language: Option<String>,
}

impl MetadataValue {
    pub fn new(value: impl Into<String>, language: Option<String>) -> Self {
        Self {
            value: value.into(),
            language,
        }
    }
}
