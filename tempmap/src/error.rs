// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for loading and rendering the chart.

use thiserror::Error;

/// Errors that stop the chart from being produced.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The dataset could not be fetched, read, or parsed into the expected shape.
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(String),

    /// The dataset was well-formed JSON but its records cannot be charted.
    #[error("Invalid dataset: {0}")]
    Validation(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Returns a short, stable label for the error kind (used in logs and the error page).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DataUnavailable(_) => "data-unavailable",
            Self::Validation(_) => "validation",
            Self::Io(_) => "io",
        }
    }
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
