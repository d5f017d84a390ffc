//! Core domain model for MFO.

use serde::{Deserialize, Serialize};

pub const CRATE_NAME: &str = "mfo-core";

/// One funding/grant/program listing as it appears in the output snapshot.
///
/// `link` is the deduplication key and is non-empty for every record that
/// reaches persistence. `scheme` is free text extracted from page markup and
/// may be noisy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Scheme")]
    pub scheme: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl OpportunityRecord {
    pub fn new(
        organization: impl Into<String>,
        category: impl Into<String>,
        scheme: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            category: category.into(),
            scheme: scheme.into(),
            link: link.into(),
        }
    }
}
