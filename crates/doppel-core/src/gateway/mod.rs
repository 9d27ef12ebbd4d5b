//! Search gateway abstraction
//!
//! The gateway executes a compiled query against the external search
//! backend and returns its result set unchanged. Backend failures
//! surface immediately and synchronously; the core performs no retry,
//! no timeout management, and no backpressure of its own.

mod solr;

pub use solr::SolrGateway;

use crate::error::SearchError;
use doppel_domain::{Item, ResultSet};

pub trait SearchGateway {
    /// Execute `query` scoped for `item` (e.g. excluding the item's
    /// own identity) and return the backend's result set.
    fn search(&self, item: &Item, query: &str) -> Result<ResultSet, SearchError>;
}

impl<G: SearchGateway + ?Sized> SearchGateway for &G {
    fn search(&self, item: &Item, query: &str) -> Result<ResultSet, SearchError> {
        (**self).search(item, query)
    }
}
