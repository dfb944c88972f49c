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

use crate::analysis::ModelAnalysis;
use crate::asset::{AssetId, AssetRef};
use serde::{Deserialize, Serialize};

/// Something observable that happened in the studio lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioEvent {
    /// A new asset became current and started loading.
    LoadStarted {
        /// The asset that is now current.
        asset: AssetRef,
    },
    /// The load progress of the current asset changed.
    Progress {
        /// The asset the progress belongs to.
        asset: AssetId,
        /// New progress, 0 to 100.
        progress: u8,
    },
    /// The current asset finished loading and its analysis was published.
    AnalysisPublished {
        /// The asset that finished.
        asset: AssetId,
        /// The published analysis.
        analysis: ModelAnalysis,
        /// Number of scene objects published for it.
        object_count: usize,
    },
    /// The current asset failed to load.
    LoadFailed {
        /// The asset that failed.
        asset: AssetId,
        /// Human-readable cause.
        message: String,
    },
    /// A result arrived for an asset that is no longer current and was
    /// discarded.
    StaleDiscarded {
        /// The superseded asset.
        asset: AssetId,
    },
    /// The showcase scene was published because no asset is loaded.
    DefaultScenePublished,
}

impl StudioEvent {
    /// The asset this event refers to, if any.
    pub fn asset(&self) -> Option<AssetId> {
        match self {
            StudioEvent::LoadStarted { asset } => Some(asset.id),
            StudioEvent::Progress { asset, .. }
            | StudioEvent::AnalysisPublished { asset, .. }
            | StudioEvent::LoadFailed { asset, .. }
            | StudioEvent::StaleDiscarded { asset } => Some(*asset),
            StudioEvent::DefaultScenePublished => None,
        }
    }
}
