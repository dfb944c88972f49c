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

use atelier_core::asset::AssetId;
use atelier_core::error::LoadError;
use atelier_core::loader::LoadedScene;

/// Where the current asset is in its lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    /// No asset has been loaded yet.
    #[default]
    Idle,
    /// The current asset is loading.
    Loading,
    /// The current asset loaded and its analysis is published.
    Ready,
    /// The current asset failed to load.
    Failed,
}

impl LoadPhase {
    /// Whether the current load has reached a final state.
    pub fn is_settled(self) -> bool {
        !matches!(self, LoadPhase::Loading)
    }
}

/// What the background tasks report to the manager.
///
/// Every message carries the id of the asset it was started for, so results
/// of superseded loads can be recognized and dropped.
#[derive(Debug)]
pub(crate) enum LifecycleMessage {
    /// The progress timer fired.
    Tick { asset: AssetId },
    /// The load task finished.
    Completed {
        asset: AssetId,
        result: Result<LoadedScene, LoadError>,
    },
}

impl LifecycleMessage {
    pub(crate) fn asset(&self) -> AssetId {
        match self {
            LifecycleMessage::Tick { asset } | LifecycleMessage::Completed { asset, .. } => *asset,
        }
    }
}
