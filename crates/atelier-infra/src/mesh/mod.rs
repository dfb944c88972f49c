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

//! Synchronous decoders that turn file bytes into scene nodes.

mod gltf_decoder;
mod obj_decoder;

pub use gltf_decoder::GltfDecoder;
pub use obj_decoder::ObjDecoder;

use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, LoadedScene};

/// Decodes one file format.
///
/// Decoders are CPU-bound and run on the blocking pool. They number the
/// nodes they report from 1 in traversal order.
pub trait MeshDecoder: Send + Sync + 'static {
    /// Short name used in logs.
    fn format_name(&self) -> &'static str;

    /// Decodes `request.bytes`.
    fn decode(&self, request: &LoadRequest) -> Result<LoadedScene, LoadError>;
}

/// A decoder that accepts anything and reports no nodes.
///
/// Used as a fallback so formats without a real decoder still get analyzed.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyDecoder;

impl MeshDecoder for EmptyDecoder {
    fn format_name(&self) -> &'static str {
        "empty"
    }

    fn decode(&self, _request: &LoadRequest) -> Result<LoadedScene, LoadError> {
        Ok(LoadedScene::default())
    }
}

pub(crate) fn parse_error(request: &LoadRequest, details: impl ToString) -> LoadError {
    LoadError::Parse {
        filename: request.filename.clone(),
        details: details.to_string(),
    }
}
