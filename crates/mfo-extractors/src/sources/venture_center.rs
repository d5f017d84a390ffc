//! Venture Center funding page (CSR and seed funds).

use async_trait::async_trait;
use mfo_core::OpportunityRecord;

use crate::sources::collect_anchors;
use crate::urls::absolutize_bare;
use crate::{ExtractError, Extraction, FetchedPage, SourceExtractor};

const BASE_URL: &str = "https://www.venturecenter.co.in/";

const KEYWORDS: [&str; 4] = ["apply", "call", "fund", "seed"];

pub struct VentureCenter;

#[async_trait]
impl SourceExtractor for VentureCenter {
    fn source_id(&self) -> &'static str {
        "venture-center"
    }

    fn organization(&self) -> &'static str {
        "Venture Center"
    }

    fn category(&self) -> &'static str {
        "Incubator/CSR"
    }

    fn listing_url(&self) -> &'static str {
        "https://www.venturecenter.co.in/funding"
    }

    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError> {
        let anchors = collect_anchors(page)?;
        if anchors.is_empty() {
            return Ok(Extraction::unrecognized());
        }

        let records = anchors
            .into_iter()
            .filter(|(text, _)| {
                let lower = text.to_lowercase();
                KEYWORDS.iter().any(|k| lower.contains(k))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> FetchedPage {
        FetchedPage::new(VentureCenter.listing_url(), body)
    }

    #[test]
    fn lowercased_keyword_scan_keeps_funding_links() {
        let body = r#"
            <a href="seed-fund">Apply to the Seed Fund</a>
            <a href="/contact">Contact</a>
            <a href="https://example.org/csr">CSR Fund partners</a>
        "#;
        let extraction = VentureCenter.extract(&page(body)).unwrap();
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(
            extraction.records[0].link,
            "https://www.venturecenter.co.in/seed-fund"
        );
        assert_eq!(extraction.records[1].link, "https://example.org/csr");
    }

    #[test]
    fn rooted_hrefs_produce_the_sites_double_slash() {
        // The live site links this way and serves it fine; the join is kept
        // verbatim rather than unified with the other sources.
        let body = r#"<a href="/funding/call-open">Call open: Innovation Fund</a>"#;
        let extraction = VentureCenter.extract(&page(body)).unwrap();
        assert_eq!(
            extraction.records[0].link,
            "https://www.venturecenter.co.in//funding/call-open"
        );
    }
}
