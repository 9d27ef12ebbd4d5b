//! doppel-core: duplicate record detection for metadata catalogs
//!
//! This crate provides pure Rust implementations of:
//! - Comparison value construction (normalization + per-field transforms)
//! - Fuzzy Solr query compilation (grouping, escaping, boolean logic)
//! - A search gateway abstraction with a Solr adapter
//!
//! Evaluating one item is a single synchronous call chain: build the
//! comparison values, compile the query, hand it to the gateway. The
//! service holds only read-only state after construction and is safe
//! to share across concurrent evaluations.

pub mod comparison;
pub mod config;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod query;
pub mod service;
pub mod transform;

// Re-export main types for convenience
pub use comparison::{build_comparisons, DuplicateComparison};
pub use config::{parse_field_specs, DetectionConfig, FieldSpec, QueryLogic};
pub use error::{ConfigError, SearchError};
pub use gateway::{SearchGateway, SolrGateway};
pub use query::{compile_query, escape_query_chars, index_field_name};
pub use service::DuplicateDetectionService;
pub use transform::{AlphanumericOnly, RegexExtract, TransformerRegistry, ValueTransformer};
