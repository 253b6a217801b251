// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset loading: one HTTP GET (with a timeout, no retries) or a local file read.

use std::path::Path;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::{DataSource, LoaderConfig};
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};

/// Loads the dataset described by a [`LoaderConfig`].
#[derive(Debug)]
pub struct DataLoader {
    client: Client,
    config: LoaderConfig,
}

impl DataLoader {
    /// Creates a loader with an HTTP client bound to the configured timeout.
    pub fn new(config: LoaderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChartError::DataUnavailable(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Loads from the configured source.
    pub async fn load(&self) -> Result<Dataset> {
        match &self.config.source {
            DataSource::Url(url) => self.fetch(url).await,
            DataSource::File(path) => load_file(path).await,
        }
    }

    /// Fetches and parses the dataset at `url`.
    ///
    /// Transport failures, timeouts, and non-success statuses are
    /// [`ChartError::DataUnavailable`].
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Dataset> {
        debug!("Requesting dataset");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::DataUnavailable(format!(
                "GET {url} returned {status}"
            )));
        }

        let body = response.bytes().await.map_err(|e| unavailable(url, &e))?;
        let dataset = Dataset::from_json_slice(&body)?;
        info!(
            status = status.as_u16(),
            bytes = body.len(),
            records = dataset.records.len(),
            "Fetched dataset"
        );
        Ok(dataset)
    }
}

/// Reads and parses a dataset from a local JSON file.
///
/// A missing or unreadable file is [`ChartError::DataUnavailable`].
pub async fn load_file(path: &Path) -> Result<Dataset> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ChartError::DataUnavailable(format!("failed to read {}: {e}", path.display()))
    })?;
    let dataset = Dataset::from_json_slice(&bytes)?;
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        records = dataset.records.len(),
        "Loaded dataset from file"
    );
    Ok(dataset)
}

fn unavailable(url: &str, e: &reqwest::Error) -> ChartError {
    if e.is_timeout() {
        ChartError::DataUnavailable(format!("GET {url} timed out"))
    } else {
        ChartError::DataUnavailable(format!("GET {url} failed: {e}"))
    }
}
