// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the error types of the studio core.
//!
//! Classification and recommendation never fail, so only the asynchronous
//! load path and configuration parsing have error types.

use thiserror::Error;

/// An error raised while loading an asset into the scene.
///
/// Load errors are caught at the load boundary, logged, and surfaced only as
/// "loading cleared, analysis unchanged". They are never retried
/// automatically.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The asset's bytes could not be read from the ingestion boundary.
    #[error("failed to read asset bytes from '{path}': {source}")]
    Read {
        /// The path that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// No loader handles this file extension.
    #[error("unsupported asset format '.{extension}'")]
    UnsupportedFormat {
        /// The lowercase extension that was rejected.
        extension: String,
    },
    /// The bytes were read but could not be decoded.
    #[error("failed to parse '{filename}': {details}")]
    Parse {
        /// Name of the asset being decoded.
        filename: String,
        /// Decoder diagnostics.
        details: String,
    },
    /// The rendering collaborator reported a failure of its own.
    #[error("scene loader failed: {0}")]
    Loader(String),
    /// The load task ended without reporting a result.
    #[error("load task ended before reporting a result")]
    Interrupted,
}

/// An error raised while loading or validating a [`crate::config::StudioConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        /// The path that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration text is not valid RON for this schema.
    #[error("invalid configuration syntax: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A value is syntactically fine but outside its allowed range.
    #[error("invalid configuration value: {0}")]
    Invalid(String),
}
