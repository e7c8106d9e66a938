//! # Card Catalog
//!
//! Fetches per-set card data from a search API and caches it for the
//! lifetime of a [`CatalogCache`].
//!
//! ## Pieces
//!
//! | Type | Role |
//! |------|------|
//! | [`CatalogProvider`] | Returns raw JSON search pages for `(set, page)` |
//! | [`ScryfallProvider`] | Provider over the Scryfall HTTP API (blocking `reqwest`) |
//! | [`fetch_set`] | Follows `has_more` and builds a [`SetCatalog`](crate::domain::SetCatalog) |
//! | [`CatalogCache`] | Fetch-once cache keyed by set code |
//!
//! ## Failure Model
//!
//! A set is fetched all-or-nothing. A transport error, non-2xx status,
//! malformed page or card without oracle text fails the whole set with a
//! [`FetchError`] and nothing is cached.

mod cache;
mod fetch;
mod provider;
#[cfg(test)]
pub(crate) mod testing;

pub use cache::CatalogCache;
pub use fetch::{fetch_set, FetchError, MAX_PAGES};
pub use provider::{CatalogProvider, ScryfallProvider};
