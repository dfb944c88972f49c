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

use super::AssetId;
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the raw bytes of an asset come from.
///
/// The studio does not care how the bytes were obtained; it only awaits them
/// once loading starts.
#[derive(Debug, Clone)]
pub enum ByteSource {
    /// Bytes already in memory (drag-and-drop, network, tests).
    Memory(Arc<[u8]>),
    /// A file on disk, read asynchronously when the load starts.
    File(PathBuf),
}

impl ByteSource {
    /// Resolves the source into its bytes.
    pub async fn read(&self) -> Result<Arc<[u8]>, LoadError> {
        match self {
            ByteSource::Memory(bytes) => Ok(Arc::clone(bytes)),
            ByteSource::File(path) => tokio::fs::read(path)
                .await
                .map(Arc::from)
                .map_err(|source| LoadError::Read {
                    path: path.display().to_string(),
                    source,
                }),
        }
    }
}

/// An asset handed to the studio by the ingestion boundary.
#[derive(Debug, Clone)]
pub struct AssetSource {
    filename: String,
    extension: String,
    bytes: ByteSource,
}

impl AssetSource {
    /// Creates a source from explicit parts. The extension is normalized to
    /// lowercase without a leading dot.
    pub fn new(filename: impl Into<String>, extension: &str, bytes: ByteSource) -> Self {
        Self {
            filename: filename.into(),
            extension: extension.trim_start_matches('.').to_ascii_lowercase(),
            bytes,
        }
    }

    /// Creates an in-memory source, deriving the extension from the filename.
    pub fn from_bytes(filename: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let filename = filename.into();
        let extension = extension_of(&filename);
        Self {
            filename,
            extension,
            bytes: ByteSource::Memory(bytes.into()),
        }
    }

    /// Creates a source backed by a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_of(&filename);
        Self {
            filename,
            extension,
            bytes: ByteSource::File(path.to_path_buf()),
        }
    }

    /// The original filename, as supplied.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The lowercase extension without the dot; empty when there is none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The byte source.
    pub fn bytes(&self) -> &ByteSource {
        &self.bytes
    }

    /// Describes this source as the asset `id`, for publishing.
    pub fn to_ref(&self, id: AssetId) -> AssetRef {
        AssetRef {
            id,
            filename: self.filename.clone(),
            extension: self.extension.clone(),
        }
    }
}

/// A lightweight, publishable reference to the asset currently in the studio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Identity token of the load.
    pub id: AssetId,
    /// Original filename.
    pub filename: String,
    /// Lowercase extension.
    pub extension: String,
}

/// Returns the lowercase text after the last `.` of `filename`, or an empty
/// string when the name has no extension.
pub fn extension_of(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}
