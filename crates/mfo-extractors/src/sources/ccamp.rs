//! C-CAMP home page (implementing agency for BIG and NIDHI-PRAYAS calls).

use async_trait::async_trait;
use mfo_core::OpportunityRecord;

use crate::sources::collect_anchors;
use crate::urls::absolutize_bare;
use crate::{ExtractError, Extraction, FetchedPage, SourceExtractor};

// No trailing slash: site-internal hrefs on this page carry their own.
const BASE_URL: &str = "https://www.ccamp.res.in";

const KEYWORDS: [&str; 4] = ["BIG", "CALL FOR", "NIDHI", "PRAYAS"];

pub struct Ccamp;

#[async_trait]
impl SourceExtractor for Ccamp {
    fn source_id(&self) -> &'static str {
        "ccamp"
    }

    fn organization(&self) -> &'static str {
        "C-CAMP"
    }

    fn category(&self) -> &'static str {
        "Incubator Grant"
    }

    fn listing_url(&self) -> &'static str {
        "https://www.ccamp.res.in/"
    }

    /// Active calls surface in the news scroller and menus rather than a
    /// dedicated listing, so the whole page is scanned case-insensitively.
    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError> {
        let anchors = collect_anchors(page)?;
        if anchors.is_empty() {
            return Ok(Extraction::unrecognized());
        }

        let records = anchors
            .into_iter()
            .filter(|(text, _)| {
                let upper = text.to_uppercase();
                KEYWORDS.iter().any(|k| upper.contains(k))
            })
            .map(|(text, href)| {
                OpportunityRecord::new(
                    self.organization(),
                    self.category(),
                    text,
                    absolutize_bare(BASE_URL, &href),
                )
            })
            .collect();
        Ok(Extraction::recognized(records))
    }
}
