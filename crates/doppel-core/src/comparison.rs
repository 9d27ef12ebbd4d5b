//! Comparison value construction
//!
//! Converts an item into the ordered (field, value, distance) tuples
//! the query compiler consumes. Raw metadata values never leave this
//! module unnormalized.

use crate::config::{DetectionConfig, FieldSpec};
use crate::normalize::{normalize_value, strip_whitespace};
use crate::transform::TransformerRegistry;
use doppel_domain::Item;

/// One normalized, transformed comparison value for one field
///
/// A value object created fresh per evaluation; equality is
/// structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateComparison {
    /// Dotted field identifier, e.g. `dc.title`
    pub field_id: String,
    pub value: String,
    pub distance: u32,
}

/// Build the ordered comparison list for an item.
///
/// Fields iterate in configured order and every value of a field is
/// read, across all language variants. A field with no values
/// contributes nothing. Values that normalize or transform to the
/// empty string are dropped. Pure computation over the item's current
/// metadata; no side effects.
pub fn build_comparisons(
    item: &Item,
    specs: &[FieldSpec],
    transformers: &TransformerRegistry,
    config: &DetectionConfig,
) -> Vec<DuplicateComparison> {
    let mut comparisons = Vec::new();

    for spec in specs {
        let field_id = spec.field.to_string();
        let transformer = transformers.get(&field_id);

        for raw in item.metadata_values(&spec.field) {
            let mut value = normalize_value(
                raw,
                config.normalize_lowercase,
                config.normalize_whitespace,
            );
            if let Some(transformer) = transformer {
                value = transformer.transform(&value);
            }
            if config.normalize_whitespace {
                value = strip_whitespace(&value);
            }
            if value.is_empty() {
                continue;
            }
            comparisons.push(DuplicateComparison {
                field_id: field_id.clone(),
                value,
                distance: spec.distance,
            });
        }
    }

    comparisons
}
