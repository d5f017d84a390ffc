//! ICMR call-for-proposals page (clinical trials, devices, diagnostics).

use async_trait::async_trait;
use mfo_core::OpportunityRecord;

use crate::sources::collect_anchors;
use crate::urls::absolutize_rooted;
use crate::{ExtractError, Extraction, FetchedPage, SourceExtractor};

const BASE_URL: &str = "https://www.icmr.gov.in/";

/// Case-sensitive: the page capitalizes these in listing titles, and the
/// lowercase forms appear all over the navigation chrome.
const KEYWORDS: [&str; 4] = ["Call", "Proposal", "Device", "Diagnostic"];
const MIN_TITLE_CHARS: usize = 10;

pub struct Icmr;

#[async_trait]
impl SourceExtractor for Icmr {
    fn source_id(&self) -> &'static str {
        "icmr"
    }

    fn organization(&self) -> &'static str {
        "ICMR"
    }

    fn category(&self) -> &'static str {
        "Research Grant"
    }

    fn listing_url(&self) -> &'static str {
        "https://www.icmr.gov.in/call-for-proposals"
    }

    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError> {
        let anchors = collect_anchors(page)?;
        if anchors.is_empty() {
            return Ok(Extraction::unrecognized());
        }

        let records = anchors
            .into_iter()
            .filter(|(text, _)| {
                KEYWORDS.iter().any(|k| text.contains(k)) && text.chars().count() > MIN_TITLE_CHARS
            })
            .map(|(text, href)| {
                OpportunityRecord::new(
                    self.organization(),
                    self.category(),
                    text,
                    absolutize_rooted(BASE_URL, &href),
                )
            })
            .collect();
        Ok(Extraction::recognized(records))
    }
}
