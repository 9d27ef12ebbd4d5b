//! Search backend result types
//!
//! The detection core returns these unchanged; it never inspects,
//! ranks, or filters what the backend found.

use serde::{Deserialize, Serialize};

/// A single hit returned by the search backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub score: Option<f32>,
}

/// The backend's result set for one duplicate query
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub num_found: u64,
    pub hits: Vec<SearchHit>,
}

impl ResultSet {
    /// The result of a search that was never sent
    pub fn empty() -> Self {
        Self::default()
    }
}
