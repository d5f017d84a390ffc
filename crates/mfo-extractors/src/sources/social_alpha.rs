//! Social Alpha challenges page (impact challenges, often medtech-adjacent).

use async_trait::async_trait;
use mfo_core::OpportunityRecord;
use scraper::Html;

use crate::{element_text, parse_selector, ExtractError, Extraction, FetchedPage, SourceExtractor};

const MIN_TITLE_CHARS: usize = 5;

pub struct SocialAlpha;

#[async_trait]
impl SourceExtractor for SocialAlpha {
    fn source_id(&self) -> &'static str {
        "social-alpha"
    }

    fn organization(&self) -> &'static str {
        "Social Alpha"
    }

    fn category(&self) -> &'static str {
        "Impact Challenge"
    }

    fn listing_url(&self) -> &'static str {
        "https://www.socialalpha.org/challenges/"
    }

    /// Challenge cards carry their names in h3/h4 headings with no stable
    /// per-challenge anchor, so every record links back to the page itself.
    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError> {
        let document = Html::parse_document(&page.body);
        let heading = parse_selector("h3, h4")?;

        let mut headings = document.select(&heading).peekable();
        if headings.peek().is_none() {
            return Ok(Extraction::unrecognized());
        }

        let records = headings
            .map(element_text)
            .filter(|text| text.chars().count() > MIN_TITLE_CHARS)
            .map(|text| {
                OpportunityRecord::new(
                    self.organization(),
                    self.category(),
                    text,
                    page.url.clone(),
                )
            })
            .collect();
        Ok(Extraction::recognized(records))
    }
}
