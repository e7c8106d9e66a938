//! In-process catalog cache
//!
//! Each set is fetched at most once per cache. Entries are never evicted or
//! invalidated; the cache lives as long as its owner (one CLI invocation).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::fetch::{fetch_set, FetchError};
use super::provider::CatalogProvider;
use crate::domain::SetCatalog;

/// Set catalogs keyed by lower-cased set code, fetched on first access
pub struct CatalogCache<P> {
    provider: P,
    catalogs: HashMap<String, SetCatalog>,
}

impl<P: CatalogProvider> CatalogCache<P> {
    /// Creates an empty cache backed by `provider`
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            catalogs: HashMap::new(),
        }
    }

    fn key(set_code: &str) -> String {
        set_code.trim().to_ascii_lowercase()
    }

    /// Returns the cached catalog, fetching it first on a miss
    ///
    /// A failed fetch caches nothing, so a later call retries.
    pub fn get_or_fetch(&mut self, set_code: &str) -> Result<&SetCatalog, FetchError> {
        match self.catalogs.entry(Self::key(set_code)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let catalog = fetch_set(&self.provider, entry.key())?;
                Ok(entry.insert(catalog))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }
}
