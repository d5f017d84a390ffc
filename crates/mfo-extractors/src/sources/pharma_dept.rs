//! Department of Pharmaceuticals schemes page (PLI, medical device parks).

use async_trait::async_trait;
use mfo_core::OpportunityRecord;

use crate::sources::collect_anchors;
use crate::{ExtractError, Extraction, FetchedPage, SourceExtractor};

pub struct PharmaDept;

#[async_trait]
impl SourceExtractor for PharmaDept {
    fn source_id(&self) -> &'static str {
        "pharma-dept"
    }

    fn organization(&self) -> &'static str {
        "Dept of Pharma"
    }

    fn category(&self) -> &'static str {
        "Subsidy/PLI"
    }

    fn listing_url(&self) -> &'static str {
        "https://pharmaceuticals.gov.in/schemes"
    }

    /// Scheme links on this page are already absolute, so hrefs are taken
    /// verbatim; anchors with an empty href are dropped to keep the link
    /// invariant.
    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError> {
        let anchors = collect_anchors(page)?;
        if anchors.is_empty() {
            return Ok(Extraction::unrecognized());
        }

        let records = anchors
            .into_iter()
            .filter(|(text, href)| {
                text.contains("Scheme")
                    && (text.contains("Medical") || text.contains("PLI"))
                    && !href.is_empty()
            })
            .map(|(text, href)| {
                OpportunityRecord::new(self.organization(), self.category(), text, href)
            })
            .collect();
        Ok(Extraction::recognized(records))
    }
}
