//! Test-only catalog provider

use std::cell::RefCell;
use std::collections::HashMap;

use super::fetch::FetchError;
use super::provider::CatalogProvider;

/// In-memory provider serving canned pages
///
/// Unknown pages answer like the API does for an empty search (HTTP 404).
/// Every request is recorded, so callers can check what was fetched.
#[derive(Debug, Default)]
pub struct StaticProvider {
    pages: HashMap<(String, u32), String>,
    calls: RefCell<Vec<(String, u32)>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page body for `(set_code, page)`
    pub fn with_page(mut self, set_code: &str, page: u32, body: impl Into<String>) -> Self {
        self.pages
            .insert((set_code.to_ascii_lowercase(), page), body.into());
        self
    }

    /// Requests made so far, in order
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.borrow().clone()
    }
}

impl CatalogProvider for StaticProvider {
    fn fetch_page(&self, set_code: &str, page: u32) -> Result<String, FetchError> {
        let key = (set_code.to_ascii_lowercase(), page);
        self.calls.borrow_mut().push(key.clone());

        self.pages.get(&key).cloned().ok_or_else(|| FetchError::Status {
            set_code: set_code.to_string(),
            status: 404,
            details: format!("No cards found for set '{}'", set_code),
        })
    }
}

mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let provider = StaticProvider::new().with_page("ELD", 1, "{}");

        assert_eq!(provider.fetch_page("eld", 1).unwrap(), "{}");
        assert!(provider.fetch_page("eld", 2).is_err());
        assert_eq!(
            provider.calls(),
            vec![("eld".to_string(), 1), ("eld".to_string(), 2)]
        );
    }
}
