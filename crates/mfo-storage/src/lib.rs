//! HTTP fetch utilities + CSV snapshot persistence for MFO.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use mfo_core::OpportunityRecord;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::info_span;

pub const CRATE_NAME: &str = "mfo-storage";

/// Browser-identifying header sent with every request. Several of the
/// government portals serve an empty shell to unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// birac.nic.in and a few other portals present certificate chains that
    /// fail standard validation.
    pub accept_invalid_certs: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: StatusCode,
    pub final_url: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http status {status} for {url}")]
    HttpStatus { status: u16, url: String },
}

/// Thin wrapper over a configured `reqwest::Client`. One GET per call, no
/// retries; a failed fetch is final for that source within a run.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: HttpClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("building reqwest client")?;
        Ok(Self { client })
    }

    pub async fn fetch_page(&self, url: &str) -> Result<FetchedResponse, FetchError> {
        let span = info_span!("http_fetch", url);
        let _guard = span.enter();

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let final_url = resp.url().to_string();

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let body = resp.text().await?;
        Ok(FetchedResponse {
            status,
            final_url,
            body,
        })
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl SnapshotError {
    /// A sharing violation (the dashboard open in a spreadsheet) surfaces as
    /// a permission error on create; callers use this to print the
    /// close-and-retry hint.
    pub fn is_file_in_use(&self) -> bool {
        matches!(
            self,
            SnapshotError::Io { source, .. }
                if source.kind() == io::ErrorKind::PermissionDenied
        )
    }
}

/// Write the deduplicated table to `path`, overwriting any existing file.
/// Header row and column order come from `OpportunityRecord`'s serde names:
/// Organization, Category, Scheme, Link.
pub fn write_snapshot(
    path: impl AsRef<Path>,
    records: &[OpportunityRecord],
) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record).map_err(|source| SnapshotError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<OpportunityRecord> {
        vec![
            OpportunityRecord::new(
                "BIRAC",
                "Government Grant",
                "BIG Call 25",
                "https://birac.nic.in/cfp/25",
            ),
            OpportunityRecord::new(
                "GeM Portal",
                "Tenders",
                "Govt e-Marketplace (Search: Medical Devices)",
                "https://gem.gov.in/",
            ),
        ]
    }

    #[test]
    fn snapshot_has_header_and_one_row_per_record() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("dashboard.csv");

        write_snapshot(&path, &sample_records()).expect("write snapshot");

        let text = std::fs::read_to_string(&path).expect("read back");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Organization,Category,Scheme,Link"));
        assert_eq!(
            lines.next(),
            Some("BIRAC,Government Grant,BIG Call 25,https://birac.nic.in/cfp/25")
        );
        assert!(lines.next().unwrap().starts_with("GeM Portal,Tenders,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn snapshot_overwrites_prior_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("dashboard.csv");

        write_snapshot(&path, &sample_records()).expect("first write");
        write_snapshot(&path, &sample_records()[..1]).expect("second write");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn rerun_with_identical_records_is_byte_identical() {
        let dir = tempdir().expect("tempdir");
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");

        write_snapshot(&first, &sample_records()).expect("first write");
        write_snapshot(&second, &sample_records()).expect("second write");

        assert_eq!(
            std::fs::read(&first).expect("read a"),
            std::fs::read(&second).expect("read b")
        );
    }

    #[test]
    fn create_failure_reports_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing-subdir").join("dashboard.csv");

        let err = write_snapshot(&path, &sample_records()).expect_err("should fail");
        assert!(err.to_string().contains("dashboard.csv"));
        assert!(!err.is_file_in_use());
    }
}
