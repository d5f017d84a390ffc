//! Source extractor contracts + per-source listing heuristics for MFO.

pub mod directory;
pub mod sources;
pub mod urls;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mfo_core::OpportunityRecord;
use mfo_storage::HttpFetcher;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const CRATE_NAME: &str = "mfo-extractors";

/// One fetched listing page, handed to the extractor for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// Whether the markup the extractor's heuristic keys on was present at all.
/// `Unrecognized` separates "the page changed under us" from a genuine
/// absence of listings; both still contribute zero records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageStructure {
    Recognized,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<OpportunityRecord>,
    pub structure: PageStructure,
}

impl Extraction {
    pub fn recognized(records: Vec<OpportunityRecord>) -> Self {
        Self {
            records,
            structure: PageStructure::Recognized,
        }
    }

    pub fn unrecognized() -> Self {
        Self {
            records: Vec::new(),
            structure: PageStructure::Unrecognized,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// One live source: fixed metadata plus a pure parse over its listing page.
///
/// Extractors never talk to each other and hold no state; the scan pipeline
/// iterates the registry uniformly.
#[async_trait]
pub trait SourceExtractor: Send + Sync {
    fn source_id(&self) -> &'static str;
    fn organization(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn listing_url(&self) -> &'static str;

    /// Fetch this source's listing page. Failures are logged and collapsed
    /// into `None`; a failed fetch yields zero records for this source and
    /// never aborts the run.
    async fn fetch(&self, http: &HttpFetcher) -> Option<FetchedPage> {
        match http.fetch_page(self.listing_url()).await {
            Ok(resp) => Some(FetchedPage {
                url: self.listing_url().to_string(),
                body: resp.body,
                fetched_at: Utc::now(),
            }),
            Err(err) => {
                warn!(
                    source_id = self.source_id(),
                    url = self.listing_url(),
                    error = %err,
                    "fetch failed; source yields no records this run"
                );
                None
            }
        }
    }

    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError>;
}

/// All live extractors in scan order. The static directory is appended after
/// these, so a live listing wins dedup over a colliding directory entry.
pub fn extractor_registry() -> Vec<Box<dyn SourceExtractor>> {
    vec![
        Box::new(sources::birac::Birac),
        Box::new(sources::icmr::Icmr),
        Box::new(sources::pharma_dept::PharmaDept),
        Box::new(sources::ccamp::Ccamp),
        Box::new(sources::venture_center::VentureCenter),
        Box::new(sources::social_alpha::SocialAlpha),
    ]
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Message(e.to_string()))
}

pub(crate) fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
