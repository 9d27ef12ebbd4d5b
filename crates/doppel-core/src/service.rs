//! Duplicate detection service
//!
//! The sole entry point: build comparison values for an item, compile
//! the fuzzy query, and hand it to the search gateway. Everything held
//! here is read-only after construction, so one service instance can
//! serve concurrent evaluations without locking; each evaluation's
//! comparisons and query string are local to the call.

use crate::comparison::{build_comparisons, DuplicateComparison};
use crate::config::{parse_field_specs, DetectionConfig, FieldSpec};
use crate::error::{ConfigError, SearchError};
use crate::gateway::SearchGateway;
use crate::query::compile_query;
use crate::transform::TransformerRegistry;
use doppel_domain::{Item, ResultSet};

pub struct DuplicateDetectionService<G> {
    config: DetectionConfig,
    fields: Vec<FieldSpec>,
    transformers: TransformerRegistry,
    gateway: G,
}

impl<G: SearchGateway> DuplicateDetectionService<G> {
    /// Build a service from configuration.
    ///
    /// Malformed field entries are rejected here, never per-request;
    /// a service that constructs will not fail on configuration later.
    pub fn new(
        config: DetectionConfig,
        transformers: TransformerRegistry,
        gateway: G,
    ) -> Result<Self, ConfigError> {
        let fields = parse_field_specs(&config.comparison_fields, config.default_distance)?;
        Ok(Self {
            config,
            fields,
            transformers,
            gateway,
        })
    }

    /// Search the backend for likely duplicates of `item`.
    ///
    /// When no configured field yields a comparison value, the backend
    /// call is skipped entirely and an empty result set is returned.
    /// Backend failures propagate unchanged.
    pub fn search_duplicates(&self, item: &Item) -> Result<ResultSet, SearchError> {
        let comparisons = self.build_comparisons(item);
        let Some(query) = compile_query(&comparisons, &self.config) else {
            tracing::debug!(
                "No comparison values for item {}; skipping duplicate search",
                item.id
            );
            return Ok(ResultSet::empty());
        };
        tracing::debug!("Duplicate query for item {}: {}", item.id, query);
        self.gateway.search(item, &query)
    }

    /// The ordered comparison tuples for `item`, for callers that want
    /// the intermediate representation.
    pub fn build_comparisons(&self, item: &Item) -> Vec<DuplicateComparison> {
        build_comparisons(item, &self.fields, &self.transformers, &self.config)
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// The parsed field specifications, in configured order
    pub fn field_specs(&self) -> &[FieldSpec] {
        &self.fields
    }
}
