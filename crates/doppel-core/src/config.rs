//! Detection configuration and field specifications
//!
//! All of this is resolved once at startup and immutable afterward;
//! the service holds it by value and shares it freely across
//! concurrent evaluations.

use crate::error::ConfigError;
use doppel_domain::MetadataField;
use serde::{Deserialize, Serialize};

/// Boolean logic for combining field groups in the compiled query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryLogic {
    #[default]
    And,
    Or,
}

impl QueryLogic {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryLogic::And => "AND",
            QueryLogic::Or => "OR",
        }
    }
}

/// Configuration for duplicate detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Ordered `fieldId[:distance]` entries; this order becomes the
    /// field iteration order and the left-to-right order in the query
    pub comparison_fields: Vec<String>,
    /// Fallback fuzzy distance for entries without a suffix
    pub default_distance: u32,
    /// Operator between field groups
    pub query_operator: QueryLogic,
    /// Index field name prefix
    pub field_prefix: String,
    /// Index field name suffix
    pub field_suffix: String,
    /// Lowercase values during normalization
    pub normalize_lowercase: bool,
    /// Collapse whitespace before the per-field transform and strip it
    /// after
    pub normalize_whitespace: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            comparison_fields: vec!["dc.title".to_string()],
            default_distance: 0,
            query_operator: QueryLogic::And,
            field_prefix: "deduplication".to_string(),
            field_suffix: "keyword".to_string(),
            normalize_lowercase: false,
            normalize_whitespace: false,
        }
    }
}

/// One configured comparison field with its fuzzy distance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: MetadataField,
    pub distance: u32,
}

impl FieldSpec {
    /// Parse one `fieldId[:distance]` configuration entry.
    ///
    /// The entry splits on the first `:`; a present suffix must parse
    /// as a non-negative integer, otherwise the configuration is
    /// rejected. Absence of a suffix falls back to `default_distance`.
    pub fn parse(entry: &str, default_distance: u32) -> Result<Self, ConfigError> {
        let (field_id, distance) = match entry.split_once(':') {
            Some((field_id, suffix)) => {
                let distance =
                    suffix
                        .parse::<u32>()
                        .map_err(|_| ConfigError::InvalidDistance {
                            field: field_id.to_string(),
                            value: suffix.to_string(),
                        })?;
                (field_id, distance)
            }
            None => (entry, default_distance),
        };
        Ok(Self {
            field: MetadataField::parse(field_id)?,
            distance,
        })
    }
}

/// Parse the configured field list, preserving order
pub fn parse_field_specs(
    entries: &[String],
    default_distance: u32,
) -> Result<Vec<FieldSpec>, ConfigError> {
    entries
        .iter()
        .map(|entry| FieldSpec::parse(entry, default_distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.comparison_fields, vec!["dc.title"]);
        assert_eq!(config.default_distance, 0);
        assert_eq!(config.query_operator, QueryLogic::And);
        assert_eq!(config.field_prefix, "deduplication");
        assert_eq!(config.field_suffix, "keyword");
        assert!(!config.normalize_lowercase);
        assert!(!config.normalize_whitespace);
    }

    #[test]
    fn test_parse_entry_with_distance() {
        let spec = FieldSpec::parse("dc.title:1", 0).unwrap();
        assert_eq!(spec.field.to_string(), "dc.title");
        assert_eq!(spec.distance, 1);
    }

    #[test]
    fn test_parse_entry_falls_back_to_default_distance() {
        let spec = FieldSpec::parse("local.custom", 2).unwrap();
        assert_eq!(spec.field.to_string(), "local.custom");
        assert_eq!(spec.distance, 2);
    }

    #[test]
    fn test_parse_rejects_malformed_distance() {
        assert!(matches!(
            FieldSpec::parse("dc.title:x", 0),
            Err(ConfigError::InvalidDistance { field, value })
                if field == "dc.title" && value == "x"
        ));
    }

    #[test]
    fn test_parse_rejects_negative_distance() {
        assert!(matches!(
            FieldSpec::parse("dc.title:-1", 0),
            Err(ConfigError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_field_id() {
        assert!(matches!(
            FieldSpec::parse("title", 0),
            Err(ConfigError::InvalidField(_))
        ));
    }

    #[test]
    fn test_parse_field_specs_preserves_order() {
        let entries = vec![
            "dc.title:1".to_string(),
            "local.custom".to_string(),
            "dc.date.issued:0".to_string(),
        ];
        let specs = parse_field_specs(&entries, 0).unwrap();
        let ids: Vec<String> = specs.iter().map(|s| s.field.to_string()).collect();
        assert_eq!(ids, vec!["dc.title", "local.custom", "dc.date.issued"]);
    }

    #[test]
    fn test_query_logic_as_str() {
        assert_eq!(QueryLogic::And.as_str(), "AND");
        assert_eq!(QueryLogic::Or.as_str(), "OR");
    }

    #[test]
    fn test_config_deserializes_operator_names() {
        let config: DetectionConfig =
            serde_json::from_str(r#"{"query_operator": "OR"}"#).unwrap();
        assert_eq!(config.query_operator, QueryLogic::Or);
        // Unset keys keep their defaults
        assert_eq!(config.field_prefix, "deduplication");
    }
}
