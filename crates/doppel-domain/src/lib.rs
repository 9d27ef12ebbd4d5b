//! Catalog domain types shared across the doppel crates
//!
//! This crate provides the data model the detection core operates on:
//! - MetadataField / MetadataValue: `schema.element[.qualifier]` metadata
//! - Item: a catalog record carrying an ordered metadata list
//! - ResultSet / SearchHit: what the search backend returns

pub mod item;
pub mod metadata;
pub mod result;

pub use item::*;
pub use metadata::*;
pub use result::*;
