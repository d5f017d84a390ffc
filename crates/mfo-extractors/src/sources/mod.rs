//! One module per live source.

pub mod birac;
pub mod ccamp;
pub mod icmr;
pub mod pharma_dept;
pub mod social_alpha;
pub mod venture_center;

use scraper::Html;

use crate::{element_text, parse_selector, ExtractError, FetchedPage};

/// Every `(visible text, href)` pair on the page, in document order. An
/// empty result means the page had no anchors at all, which the keyword
/// scanners report as unrecognized structure.
pub(crate) fn collect_anchors(page: &FetchedPage) -> Result<Vec<(String, String)>, ExtractError> {
    let document = Html::parse_document(&page.body);
    let anchor = parse_selector("a[href]")?;
    Ok(document
        .select(&anchor)
        .filter_map(|a| {
            a.value()
                .attr("href")
                .map(|href| (element_text(a), href.to_string()))
        })
        .collect())
}
