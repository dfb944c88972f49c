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

//! A [`SceneLoader`] that routes each asset to a decoder by extension.

use crate::mesh::{EmptyDecoder, GltfDecoder, MeshDecoder, ObjDecoder};
use crate::scene_graph::SceneGraph;
use async_trait::async_trait;
use atelier_core::asset::AssetId;
use atelier_core::config::{StudioConfig, DEFAULT_ROOT_PROXY_NAME};
use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, LoadedNode, LoadedScene, SceneLoader};
use atelier_core::math::Aabb;
use std::collections::HashMap;
use std::sync::Arc;

/// Decodes assets on the blocking pool and materializes them into a
/// [`SceneGraph`].
///
/// Each load adds a root proxy node named after the configured proxy name
/// whose bounds cover the whole asset, followed by the decoded nodes.
pub struct MeshSceneLoader {
    decoders: HashMap<String, Arc<dyn MeshDecoder>>,
    fallback: Option<Arc<dyn MeshDecoder>>,
    graph: Arc<SceneGraph>,
    root_proxy_name: String,
}

impl MeshSceneLoader {
    /// Creates a loader for OBJ and glTF that writes into `graph`.
    pub fn new(graph: Arc<SceneGraph>) -> Self {
        Self {
            decoders: HashMap::new(),
            fallback: None,
            graph,
            root_proxy_name: DEFAULT_ROOT_PROXY_NAME.to_owned(),
        }
        .with_decoder("obj", ObjDecoder)
        .with_decoder("gltf", GltfDecoder)
        .with_decoder("glb", GltfDecoder)
    }

    /// Creates a loader whose graph starts with the configured permanent
    /// helpers and whose root proxy uses the configured name.
    pub fn from_config(config: &StudioConfig) -> Self {
        let graph = Arc::new(SceneGraph::with_helpers(config.permanent_helpers.as_slice()));
        let mut loader = Self::new(graph);
        loader.root_proxy_name = config.root_proxy_name.clone();
        loader
    }

    /// Registers `decoder` for `extension`, replacing any previous one.
    pub fn with_decoder(mut self, extension: &str, decoder: impl MeshDecoder) -> Self {
        self.decoders.insert(
            extension.trim_start_matches('.').to_ascii_lowercase(),
            Arc::new(decoder),
        );
        self
    }

    /// Routes unknown extensions to `decoder` instead of failing.
    pub fn with_fallback(mut self, decoder: impl MeshDecoder) -> Self {
        self.fallback = Some(Arc::new(decoder));
        self
    }

    /// Accepts every extension, reporting no nodes for formats without a
    /// decoder so they still receive an analysis.
    pub fn with_empty_fallback(self) -> Self {
        self.with_fallback(EmptyDecoder)
    }

    /// The graph this loader writes into.
    pub fn graph(&self) -> &Arc<SceneGraph> {
        &self.graph
    }

    /// Whether `extension` has a dedicated decoder.
    pub fn supports(&self, extension: &str) -> bool {
        self.decoders.contains_key(extension)
    }

    fn decoder_for(&self, extension: &str) -> Option<Arc<dyn MeshDecoder>> {
        self.decoders
            .get(extension)
            .or(self.fallback.as_ref())
            .cloned()
    }
}

#[async_trait]
impl SceneLoader for MeshSceneLoader {
    async fn load(&self, request: &LoadRequest) -> Result<LoadedScene, LoadError> {
        let decoder =
            self.decoder_for(&request.extension)
                .ok_or_else(|| LoadError::UnsupportedFormat {
                    extension: request.extension.clone(),
                })?;
        log::debug!(
            "Decoding '{}' with the {} decoder.",
            request.filename,
            decoder.format_name()
        );

        let owned = request.clone();
        let decoded = tokio::task::spawn_blocking(move || decoder.decode(&owned))
            .await
            .map_err(|_| LoadError::Interrupted)??;

        let proxy_bounds = decoded
            .nodes
            .iter()
            .filter(|node| node.bounds.is_valid())
            .fold(Aabb::INVALID, |acc, node| acc.merge(&node.bounds));
        let mut nodes = Vec::with_capacity(decoded.nodes.len() + 1);
        nodes.push(LoadedNode::new(0, self.root_proxy_name.clone(), proxy_bounds));
        nodes.extend(decoded.nodes);

        Ok(LoadedScene {
            nodes: self.graph.insert(request.asset, nodes),
            stats: decoded.stats,
        })
    }

    fn clear(&self, keep: &[String]) {
        let removed = self.graph.clear(keep);
        log::trace!("Cleared {removed} node(s) from the scene graph.");
    }

    fn release(&self, asset: AssetId) {
        let removed = self.graph.release(asset);
        if removed > 0 {
            log::debug!("Released {removed} node(s) of asset {asset}.");
        }
    }
}
