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

//! Defines the contract between the lifecycle and whatever materializes an
//! asset's nodes.
//!
//! The studio never renders anything itself. A [`SceneLoader`] receives the
//! asset's bytes, builds its nodes wherever it likes, and reports back what it
//! created: one [`LoadedNode`] per node with world-space bounds, plus optional
//! [`GeometryStats`].

use crate::analysis::GeometryStats;
use crate::asset::AssetId;
use crate::error::LoadError;
use crate::math::Aabb;
use async_trait::async_trait;
use std::sync::Arc;

/// Everything a loader needs to decode one asset.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Identity token of this load attempt.
    pub asset: AssetId,
    /// Original filename.
    pub filename: String,
    /// Lowercase extension without the dot.
    pub extension: String,
    /// The raw file contents.
    pub bytes: Arc<[u8]>,
}

/// A single node created by a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedNode {
    /// Loader-assigned id, unique within one load.
    pub id: u64,
    /// Node name as found in the file; may be empty.
    pub name: String,
    /// The node's initial visibility.
    pub visible: bool,
    /// World-space bounds. [`Aabb::INVALID`] for nodes without geometry.
    pub bounds: Aabb,
}

impl LoadedNode {
    /// Creates a visible node.
    pub fn new(id: u64, name: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            bounds,
        }
    }
}

/// What a loader reports once an asset has been materialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedScene {
    /// Created nodes, in load order.
    pub nodes: Vec<LoadedNode>,
    /// Measured statistics, when the loader could compute them.
    pub stats: Option<GeometryStats>,
}

/// The rendering boundary.
///
/// Implementations must be cheap to share: the lifecycle keeps one behind an
/// `Arc` and calls [`SceneLoader::load`] from a spawned task.
#[async_trait]
pub trait SceneLoader: Send + Sync {
    /// Decodes and materializes the asset described by `request`.
    async fn load(&self, request: &LoadRequest) -> Result<LoadedScene, LoadError>;

    /// Disposes every node whose name is not listed in `keep`.
    ///
    /// Called when a new asset starts loading.
    fn clear(&self, keep: &[String]) {
        let _ = keep;
    }

    /// Disposes the nodes created for `asset`.
    ///
    /// Called for failed attempts and for loads that finished after they were
    /// superseded.
    fn release(&self, asset: AssetId) {
        let _ = asset;
    }
}
