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

//! The `Studio` facade: one object that wires the lifecycle manager to the
//! mesh loader and answers the questions a presentation layer asks.

use anyhow::{bail, Context, Result};
use atelier_agents::{LoadPhase, SceneLifecycleManager};
use atelier_core::analysis::ModelAnalysis;
use atelier_core::asset::{AssetId, AssetRef, AssetSource};
use atelier_core::config::StudioConfig;
use atelier_core::domain::Domain;
use atelier_core::event::StudioEvent;
use atelier_core::scene::{CameraFraming, SceneObject};
use atelier_data::{DomainConfig, DomainConfigRegistry, StudioState, ToolConfig};
use atelier_infra::{MeshSceneLoader, SceneGraph};
use atelier_lanes::ToolRecommendationEngine;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// A serializable snapshot of what the studio currently shows.
#[derive(Debug, Serialize)]
pub struct StudioReport<'a> {
    /// The asset in the viewport, if any.
    pub asset: Option<&'a AssetRef>,
    /// Display name of the active domain.
    pub domain: &'static str,
    /// The published analysis, if any.
    pub analysis: Option<&'a ModelAnalysis>,
    /// The object registry.
    pub objects: &'a [SceneObject],
    /// The camera framing.
    pub camera: CameraFraming,
}

/// The studio, ready to import assets.
///
/// Assets are decoded by a [`MeshSceneLoader`] (OBJ and glTF, with an empty
/// fallback for every other format) and analyzed by a
/// [`SceneLifecycleManager`].
///
/// ```rust,no_run
/// # async fn demo() -> anyhow::Result<()> {
/// use atelier_sdk::prelude::*;
///
/// let mut studio = Studio::new(StudioConfig::default())?;
/// let analysis = studio.import_and_settle(AssetSource::from_path("chair.obj")).await?;
/// println!("{} ({:.0}%)", analysis.domain, analysis.confidence * 100.0);
/// # Ok(())
/// # }
/// ```
pub struct Studio {
    manager: SceneLifecycleManager,
    graph: Arc<SceneGraph>,
    registry: &'static DomainConfigRegistry,
    recommender: ToolRecommendationEngine,
}

impl Studio {
    /// Creates a studio from a validated configuration.
    pub fn new(config: StudioConfig) -> Result<Self> {
        let loader = MeshSceneLoader::from_config(&config).with_empty_fallback();
        let graph = Arc::clone(loader.graph());
        let manager = SceneLifecycleManager::new(Arc::new(loader), config)
            .context("invalid studio configuration")?;

        Ok(Self {
            manager,
            graph,
            registry: DomainConfigRegistry::global(),
            recommender: ToolRecommendationEngine::new(),
        })
    }

    /// Creates a studio from a RON configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = StudioConfig::load(path)
            .with_context(|| format!("failed to load configuration from '{}'", path.display()))?;
        Self::new(config)
    }

    /// Starts importing `source` and returns its identity token.
    ///
    /// Any load already in flight is superseded.
    pub fn import(&mut self, source: AssetSource) -> AssetId {
        self.manager.begin_load(source)
    }

    /// Starts importing the file at `path`.
    pub fn import_path(&mut self, path: impl AsRef<Path>) -> AssetId {
        self.import(AssetSource::from_path(path))
    }

    /// Drives the lifecycle until nothing is in flight.
    pub async fn settle(&mut self) -> LoadPhase {
        self.manager.wait_until_settled().await
    }

    /// Imports `source`, waits for it, and returns its analysis.
    pub async fn import_and_settle(&mut self, source: AssetSource) -> Result<ModelAnalysis> {
        let filename = source.filename().to_owned();
        // Listens for this import only; the stream closes when it returns.
        let events = self.manager.subscribe();
        let asset = self.import(source);
        let phase = self.settle().await;
        let failure = failure_of(&events, asset);
        drop(events);

        match (phase, self.manager.state().model_analysis()) {
            (LoadPhase::Ready, Some(analysis)) if self.manager.current_asset() == Some(asset) => {
                Ok(analysis.clone())
            }
            _ => match failure {
                Some(message) => bail!("failed to import '{filename}': {message}"),
                None => bail!("failed to import '{filename}'"),
            },
        }
    }

    /// Publishes the showcase scene when nothing has been imported yet.
    pub fn show_default_scene(&mut self) -> bool {
        self.manager.populate_default_scene()
    }

    /// Opens a new event stream.
    pub fn subscribe(&mut self) -> flume::Receiver<StudioEvent> {
        self.manager.subscribe()
    }

    /// The studio state.
    pub fn state(&self) -> &StudioState {
        self.manager.state()
    }

    /// Mutable access for presentation-side setters (selection, visibility,
    /// viewport, panels, active tool).
    pub fn state_mut(&mut self) -> &mut StudioState {
        self.manager.state_mut()
    }

    /// The configuration of the active domain.
    pub fn domain_config(&self) -> &'static DomainConfig {
        self.state().domain_config(self.registry)
    }

    /// The tools recommended for the active asset, resolved against the
    /// active domain's configuration.
    ///
    /// Falls back to the domain's default recommendation when no analysis
    /// has been published. Ids the domain does not offer are skipped.
    pub fn recommended_tools(&self) -> Vec<&'static ToolConfig> {
        let config = self.domain_config();
        match self.state().model_analysis() {
            Some(analysis) => analysis
                .recommended_tools
                .iter()
                .filter_map(|id| config.tool(id))
                .collect(),
            None => self
                .recommender
                .recommended_tools(self.state().current_domain())
                .iter()
                .filter_map(|id| config.tool(id))
                .collect(),
        }
    }

    /// The active domain.
    pub fn domain(&self) -> Domain {
        self.state().current_domain()
    }

    /// The nodes the loader currently holds, helpers included.
    pub fn scene_graph(&self) -> &Arc<SceneGraph> {
        &self.graph
    }

    /// The underlying lifecycle manager.
    pub fn manager(&mut self) -> &mut SceneLifecycleManager {
        &mut self.manager
    }

    /// A serializable snapshot of the current state.
    pub fn report(&self) -> StudioReport<'_> {
        let state = self.state();
        StudioReport {
            asset: state.current_asset(),
            domain: self.domain_config().name,
            analysis: state.model_analysis(),
            objects: state.scene_objects(),
            camera: state.camera_framing(),
        }
    }
}

/// The last failure message reported for `asset` on `events`.
fn failure_of(events: &flume::Receiver<StudioEvent>, asset: AssetId) -> Option<String> {
    events
        .try_iter()
        .filter_map(|event| match event {
            StudioEvent::LoadFailed { asset: id, message } if id == asset => Some(message),
            _ => None,
        })
        .last()
}
