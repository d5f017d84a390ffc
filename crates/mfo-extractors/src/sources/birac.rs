//! BIRAC call-for-proposals table (BIG, SBIRI, PACE).

use async_trait::async_trait;
use mfo_core::OpportunityRecord;
use scraper::Html;

use crate::urls::absolutize_rooted;
use crate::{element_text, parse_selector, ExtractError, Extraction, FetchedPage, SourceExtractor};

const BASE_URL: &str = "https://birac.nic.in/";

pub struct Birac;

#[async_trait]
impl SourceExtractor for Birac {
    fn source_id(&self) -> &'static str {
        "birac"
    }

    fn organization(&self) -> &'static str {
        "BIRAC"
    }

    fn category(&self) -> &'static str {
        "Government Grant"
    }

    fn listing_url(&self) -> &'static str {
        "https://birac.nic.in/cfp.php"
    }

    /// The calls page lists every open call as a table row; the second cell
    /// holds the anchor whose text is the call title.
    fn extract(&self, page: &FetchedPage) -> Result<Extraction, ExtractError> {
        let document = Html::parse_document(&page.body);
        let table = parse_selector("table")?;
        let row = parse_selector("tr")?;
        let cell = parse_selector("td")?;
        let anchor = parse_selector("a")?;

        let mut tables = document.select(&table).peekable();
        if tables.peek().is_none() {
            return Ok(Extraction::unrecognized());
        }

        let mut records = Vec::new();
        for table in tables {
            for tr in table.select(&row) {
                let cells: Vec<_> = tr.select(&cell).collect();
                if cells.len() < 2 {
                    continue;
                }
                let Some(a) = cells[1].select(&anchor).next() else {
                    continue;
                };
                let Some(href) = a.value().attr("href") else {
                    continue;
                };
                records.push(OpportunityRecord::new(
                    self.organization(),
                    self.category(),
                    element_text(a),
                    absolutize_rooted(BASE_URL, href),
                ));
            }
        }
        Ok(Extraction::recognized(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageStructure;

    fn page(body: &str) -> FetchedPage {
        FetchedPage::new(Birac.listing_url(), body)
    }

    #[test]
    fn header_row_is_skipped_and_data_row_extracted() {
        let body = r#"
            <table>
              <tr><th>Sl</th><th>Call</th></tr>
              <tr><td>1</td><td><a href="/cfp/1">Call A</a></td></tr>
            </table>
        "#;
        let extraction = Birac.extract(&page(body)).unwrap();
        assert_eq!(extraction.structure, PageStructure::Recognized);
        assert_eq!(
            extraction.records,
            vec![OpportunityRecord::new(
                "BIRAC",
                "Government Grant",
                "Call A",
                "https://birac.nic.in/cfp/1",
            )]
        );
    }

    #[test]
    fn rows_without_two_cells_or_anchor_are_skipped() {
        let body = r#"
            <table>
              <tr><td>only one cell</td></tr>
              <tr><td>1</td><td>no anchor here</td></tr>
              <tr><td>2</td><td><a href="cfp/2">Call B</a></td></tr>
            </table>
        "#;
        let extraction = Birac.extract(&page(body)).unwrap();
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].link, "https://birac.nic.in/cfp/2");
    }

    #[test]
    fn absolute_hrefs_are_kept_verbatim() {
        let body = r#"
            <table>
              <tr><td>1</td><td><a href="https://birac.nic.in/big.php">BIG 25</a></td></tr>
            </table>
        "#;
        let extraction = Birac.extract(&page(body)).unwrap();
        assert_eq!(extraction.records[0].link, "https://birac.nic.in/big.php");
    }

    #[test]
    fn page_without_tables_is_unrecognized() {
        let extraction = Birac.extract(&page("<html><body><p>maintenance</p></body></html>")).unwrap();
        assert_eq!(extraction.structure, PageStructure::Unrecognized);
        assert!(extraction.records.is_empty());
    }
}
