//! One-shot scan pipeline: fetch every registered source, extract, merge
//! with the static directory, dedup by link, persist the CSV snapshot.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use mfo_core::OpportunityRecord;
use mfo_extractors::{directory, extractor_registry, PageStructure, SourceExtractor};
use mfo_storage::{write_snapshot, HttpClientConfig, HttpFetcher, SnapshotError};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

pub const CRATE_NAME: &str = "mfo-scan";

/// Snapshot filename kept from the dashboard this feeds.
pub const DEFAULT_OUTPUT_FILE: &str = "Master_MedTech_Dashboard.csv";

/// The whole run's configuration; defaults document the fixed values the
/// pipeline runs with in production. No env vars or config files are read.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub output_path: PathBuf,
    pub http: HttpClientConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            http: HttpClientConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no data found from any source")]
    NoData,
    #[error(transparent)]
    Persist(#[from] SnapshotError),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub sources_scanned: usize,
    pub extracted: usize,
    pub directory_entries: usize,
    pub unique_records: usize,
    pub output_path: String,
    pub source_counts: BTreeMap<String, usize>,
}

pub struct ScanPipeline {
    config: ScanConfig,
    http: HttpFetcher,
}

impl ScanPipeline {
    pub fn new(config: ScanConfig) -> Result<Self> {
        let http = HttpFetcher::new(config.http.clone())?;
        Ok(Self { config, http })
    }

    /// Run the full fetch → extract → merge → dedup → persist cycle once.
    /// Individual source failures never abort the run; only an empty merge
    /// or a persistence failure end it early (both without touching any
    /// existing snapshot).
    pub async fn run_once(&self) -> Result<ScanSummary, ScanError> {
        let started_at = Utc::now();
        let run_id = Uuid::new_v4();
        info!(%run_id, "starting medtech funding scan");

        let registry = extractor_registry();
        let mut source_counts = BTreeMap::new();
        let mut merged = Vec::new();
        let mut extracted = 0usize;

        for extractor in &registry {
            let records = self.scan_source(extractor.as_ref()).await;
            info!(
                source_id = extractor.source_id(),
                count = records.len(),
                "source scan complete"
            );
            source_counts.insert(extractor.source_id().to_string(), records.len());
            extracted += records.len();
            merged.extend(records);
        }

        let directory = directory::static_directory();
        let directory_entries = directory.len();
        info!(count = directory_entries, "adding static directory entries");
        source_counts.insert("static-directory".to_string(), directory_entries);
        merged.extend(directory);

        let unique = dedup_by_link(merged);
        if unique.is_empty() {
            warn!("no data found from any source; snapshot not written");
            return Err(ScanError::NoData);
        }

        write_snapshot(&self.config.output_path, &unique)?;

        let finished_at = Utc::now();
        Ok(ScanSummary {
            run_id,
            started_at,
            finished_at,
            sources_scanned: registry.len(),
            extracted,
            directory_entries,
            unique_records: unique.len(),
            output_path: self.config.output_path.display().to_string(),
            source_counts,
        })
    }

    async fn scan_source(&self, extractor: &dyn SourceExtractor) -> Vec<OpportunityRecord> {
        let Some(page) = extractor.fetch(&self.http).await else {
            return Vec::new();
        };
        match extractor.extract(&page) {
            Ok(extraction) => {
                if extraction.structure == PageStructure::Unrecognized {
                    warn!(
                        source_id = extractor.source_id(),
                        "page structure unrecognized; treating as no listings"
                    );
                }
                extraction.records
            }
            Err(err) => {
                warn!(
                    source_id = extractor.source_id(),
                    error = %err,
                    "extraction failed; source yields no records this run"
                );
                Vec::new()
            }
        }
    }
}

/// Remove records whose link repeats, keeping the first occurrence and
/// preserving input order otherwise.
pub fn dedup_by_link(records: Vec<OpportunityRecord>) -> Vec<OpportunityRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.link.clone()))
        .collect()
}
