//! Per-field value transforms
//!
//! A transformer reshapes a normalized value before query construction,
//! e.g. extracting an identifier token from a free-text relation field.
//! Transformers are registered per field identifier before the service
//! is built and never change afterward.

use std::collections::HashMap;

use crate::error::ConfigError;
use regex::Regex;

/// A pure string reshaping applied to a normalized value
///
/// Implementations must depend only on their input; the same value
/// always transforms to the same result.
pub trait ValueTransformer: Send + Sync {
    fn transform(&self, value: &str) -> String;
}

impl<F> ValueTransformer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transform(&self, value: &str) -> String {
        self(value)
    }
}

/// Field identifier → transformer table, read-only during evaluation
///
/// An unregistered field keeps its normalized value unchanged.
#[derive(Default)]
pub struct TransformerRegistry {
    transformers: HashMap<String, Box<dyn ValueTransformer>>,
}

impl TransformerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transformer for a dotted field identifier
    pub fn register(
        &mut self,
        field_id: impl Into<String>,
        transformer: impl ValueTransformer + 'static,
    ) {
        self.transformers
            .insert(field_id.into(), Box::new(transformer));
    }

    pub fn get(&self, field_id: &str) -> Option<&dyn ValueTransformer> {
        self.transformers.get(field_id).map(|t| t.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

/// Keep the first regex match of a value
///
/// Uses the first capture group when the pattern has one, the whole
/// match otherwise. A value with no match transforms to the empty
/// string and is dropped from the comparisons.
pub struct RegexExtract {
    pattern: Regex,
}

impl RegexExtract {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }
}

impl ValueTransformer for RegexExtract {
    fn transform(&self, value: &str) -> String {
        match self.pattern.captures(value) {
            Some(caps) => caps
                .get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }
}

/// Retain only ASCII alphanumeric characters
pub struct AlphanumericOnly;

impl ValueTransformer for AlphanumericOnly {
    fn transform(&self, value: &str) -> String {
        value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
    }
}
