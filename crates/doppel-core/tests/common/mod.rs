//! Shared fixtures for doppel-core integration tests

use std::cell::RefCell;

use doppel_core::{SearchError, SearchGateway};
use doppel_domain::{Item, MetadataField, ResultSet, SearchHit};

/// Gateway double that records every query it is asked to execute
pub struct RecordingGateway {
    pub queries: RefCell<Vec<String>>,
    pub result: ResultSet,
    pub fail_with: Option<String>,
}

impl RecordingGateway {
    pub fn returning(result: ResultSet) -> Self {
        Self {
            queries: RefCell::new(Vec::new()),
            result,
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            queries: RefCell::new(Vec::new()),
            result: ResultSet::empty(),
            fail_with: Some(message.to_string()),
        }
    }
}

impl SearchGateway for RecordingGateway {
    fn search(&self, _item: &Item, query: &str) -> Result<ResultSet, SearchError> {
        self.queries.borrow_mut().push(query.to_string());
        match &self.fail_with {
            Some(message) => Err(SearchError::Backend {
                message: message.clone(),
            }),
            None => Ok(self.result.clone()),
        }
    }
}

pub fn one_hit() -> ResultSet {
    ResultSet {
        num_found: 1,
        hits: vec![SearchHit {
            id: "candidate-1".to_string(),
            score: Some(2.5),
        }],
    }
}

pub fn field(field_id: &str) -> MetadataField {
    MetadataField::parse(field_id).unwrap()
}

pub fn item_with(values: &[(&str, &str)]) -> Item {
    let mut item = Item::new();
    for (field_id, value) in values {
        item.add_metadata(field(field_id), *value, None);
    }
    item
}
