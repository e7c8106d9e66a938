//! Card catalog providers
//!
//! A provider returns raw search-result pages for a set. Parsing and
//! pagination live in [`super::fetch_set`], so a provider only has to know
//! how to get bytes for `(set_code, page)`.

use std::cell::Cell;
use std::time::{Duration, Instant};

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::fetch::FetchError;
use crate::storage::ApiConfig;

/// Source of raw catalog search pages
pub trait CatalogProvider {
    /// Returns the JSON body of page `page` (1-based) of the set's search results
    fn fetch_page(&self, set_code: &str, page: u32) -> Result<String, FetchError>;
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn fetch_page(&self, set_code: &str, page: u32) -> Result<String, FetchError> {
        (**self).fetch_page(set_code, page)
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for Box<P> {
    fn fetch_page(&self, set_code: &str, page: u32) -> Result<String, FetchError> {
        (**self).fetch_page(set_code, page)
    }
}

/// Error body returned by the Scryfall API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    details: String,
}

/// Provider backed by the Scryfall search API
pub struct ScryfallProvider {
    client: Client,
    base_url: String,
    page_delay: Duration,
    last_request: Cell<Option<Instant>>,
}

impl ScryfallProvider {
    /// Builds a blocking HTTP client from the API settings
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_delay: Duration::from_millis(config.page_delay_ms),
            last_request: Cell::new(None),
        })
    }

    /// Returns the search endpoint URL
    pub fn search_url(&self) -> String {
        format!("{}/cards/search", self.base_url)
    }

    /// Sleeps so consecutive requests are at least `page_delay` apart
    fn throttle(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < self.page_delay {
                std::thread::sleep(self.page_delay - elapsed);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }
}

impl CatalogProvider for ScryfallProvider {
    fn fetch_page(&self, set_code: &str, page: u32) -> Result<String, FetchError> {
        self.throttle();

        let transport = |e: reqwest::Error| FetchError::Transport {
            set_code: set_code.to_string(),
            page,
            message: e.to_string(),
        };

        let query = format!("set:{}", set_code);
        let page_param = page.to_string();

        let response = self
            .client
            .get(self.search_url())
            .header(ACCEPT, "application/json")
            .query(&[("order", "set"), ("q", query.as_str()), ("page", page_param.as_str())])
            .send()
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().map_err(transport)?;

        if !status.is_success() {
            let details = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.details)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());

            return Err(FetchError::Status {
                set_code: set_code.to_string(),
                status: status.as_u16(),
                details,
            });
        }

        Ok(body)
    }
}
