//! Paginated set fetch
//!
//! Turns raw search pages into a [`SetCatalog`]. A set is fetched
//! all-or-nothing: any bad page or card fails the whole set.

use serde::Deserialize;
use thiserror::Error;

use super::provider::CatalogProvider;
use crate::domain::{CardRecord, ColorIdentity, SetCatalog, FACE_SEPARATOR};

/// Upper bound on pages followed for a single set
pub const MAX_PAGES: u32 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request for set '{set_code}' page {page} failed: {message}")]
    Transport {
        set_code: String,
        page: u32,
        message: String,
    },

    #[error("Catalog returned HTTP {status} for set '{set_code}': {details}")]
    Status {
        set_code: String,
        status: u16,
        details: String,
    },

    #[error("Malformed catalog page {page} for set '{set_code}': {source}")]
    Malformed {
        set_code: String,
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Card '{name}' in set '{set_code}' has no oracle text")]
    MissingOracleText { set_code: String, name: String },

    #[error("Set '{set_code}' still had more results after {max} pages", max = MAX_PAGES)]
    TooManyPages { set_code: String },
}

/// One page of search results
#[derive(Debug, Deserialize)]
struct SearchPage {
    data: Vec<RawCard>,
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    name: String,
    collector_number: String,
    color_identity: ColorIdentity,
    type_line: String,
    #[serde(default)]
    oracle_text: Option<String>,
    #[serde(default)]
    card_faces: Option<Vec<RawFace>>,
}

#[derive(Debug, Deserialize)]
struct RawFace {
    #[serde(default)]
    oracle_text: Option<String>,
}

impl RawCard {
    fn into_record(self, set_code: &str) -> Result<CardRecord, FetchError> {
        let oracle_text = match self.oracle_text {
            Some(text) => text,
            None => join_faces(self.card_faces.as_deref()).ok_or_else(|| {
                FetchError::MissingOracleText {
                    set_code: set_code.to_string(),
                    name: self.name.clone(),
                }
            })?,
        };

        let mut record = CardRecord {
            name: self.name,
            collector_number: self.collector_number,
            color_identity: self.color_identity,
            type_line: self.type_line,
            oracle_text,
        };

        if record.color_identity.is_empty() && record.is_artifact() {
            record.color_identity = ColorIdentity::artifact();
        }

        Ok(record)
    }
}

/// Joins every face's oracle text; `None` if there are no faces or one lacks text
fn join_faces(faces: Option<&[RawFace]>) -> Option<String> {
    let faces = faces.filter(|f| !f.is_empty())?;
    let texts = faces
        .iter()
        .map(|face| face.oracle_text.as_deref())
        .collect::<Option<Vec<_>>>()?;
    Some(texts.join(FACE_SEPARATOR))
}

/// Fetches every card of a set, following `has_more` until exhausted
pub fn fetch_set<P>(provider: &P, set_code: &str) -> Result<SetCatalog, FetchError>
where
    P: CatalogProvider + ?Sized,
{
    let mut catalog = SetCatalog::new(set_code);

    for page in 1..=MAX_PAGES {
        let body = provider.fetch_page(set_code, page)?;

        let parsed: SearchPage =
            serde_json::from_str(&body).map_err(|source| FetchError::Malformed {
                set_code: set_code.to_string(),
                page,
                source,
            })?;

        for raw in parsed.data {
            catalog.insert(raw.into_record(set_code)?);
        }

        if !parsed.has_more {
            return Ok(catalog);
        }
    }

    Err(FetchError::TooManyPages {
        set_code: set_code.to_string(),
    })
}
