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

#![allow(dead_code)]

use async_trait::async_trait;
use atelier_core::asset::{AssetId, AssetSource};
use atelier_core::config::StudioConfig;
use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, LoadedNode, LoadedScene, SceneLoader};
use atelier_core::math::Aabb;
use atelier_agents::SceneLifecycleManager;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub type LoadOutcome = Result<LoadedScene, LoadError>;

/// A loader whose results are released by the test, one file at a time.
///
/// Files without a gate load instantly as an empty scene.
#[derive(Default)]
pub struct GatedLoader {
    gates: Mutex<HashMap<String, oneshot::Receiver<LoadOutcome>>>,
    cleared: Mutex<Vec<Vec<String>>>,
    released: Mutex<Vec<AssetId>>,
}

impl GatedLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Holds the load of `filename` until the returned sender fires.
    pub fn gate(&self, filename: &str) -> oneshot::Sender<LoadOutcome> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(filename.to_string(), receiver);
        sender
    }

    /// Makes `filename` load instantly with `outcome`.
    pub fn script(&self, filename: &str, outcome: LoadOutcome) {
        self.gate(filename).send(outcome).unwrap();
    }

    pub fn cleared(&self) -> Vec<Vec<String>> {
        self.cleared.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<AssetId> {
        self.released.lock().unwrap().clone()
    }
}

#[async_trait]
impl SceneLoader for GatedLoader {
    async fn load(&self, request: &LoadRequest) -> Result<LoadedScene, LoadError> {
        let gate = self.gates.lock().unwrap().remove(&request.filename);
        match gate {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(LoadError::Loader("gate dropped".into()))),
            None => Ok(LoadedScene::default()),
        }
    }

    fn clear(&self, keep: &[String]) {
        self.cleared.lock().unwrap().push(keep.to_vec());
    }

    fn release(&self, asset: AssetId) {
        self.released.lock().unwrap().push(asset);
    }
}

pub fn node(id: u64, name: &str, min: [f32; 3], max: [f32; 3]) -> LoadedNode {
    LoadedNode::new(id, name, Aabb::from_min_max(min.into(), max.into()))
}

pub fn scene(nodes: Vec<LoadedNode>) -> LoadOutcome {
    Ok(LoadedScene { nodes, stats: None })
}

pub fn asset(filename: &str) -> AssetSource {
    AssetSource::from_bytes(filename, b"placeholder".to_vec())
}

pub fn manager(loader: &Arc<GatedLoader>) -> SceneLifecycleManager {
    let config = StudioConfig {
        seed: Some(42),
        ..StudioConfig::default()
    };
    SceneLifecycleManager::new(loader.clone(), config).unwrap()
}
