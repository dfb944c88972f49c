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

use super::message::{LifecycleMessage, LoadPhase};
use super::showcase::showcase_objects;
use super::tasks::{spawn_load, spawn_progress_timer};
use atelier_core::analysis::{Classification, GeometryStats, ModelAnalysis};
use atelier_core::asset::{AssetId, AssetRef, AssetSource};
use atelier_core::config::StudioConfig;
use atelier_core::error::{ConfigError, LoadError};
use atelier_core::event::{EventBus, StudioEvent};
use atelier_core::loader::{LoadedScene, SceneLoader};
use atelier_core::random::{RandomSource, SeededRandom};
use atelier_core::scene::SceneObject;
use atelier_data::StudioState;
use atelier_lanes::classification_lane::estimate_geometry;
use atelier_lanes::{DomainClassifier, FramingLane, Recommendation, ToolRecommendationEngine};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Name given to loaded nodes that have none.
const UNNAMED: &str = "Unnamed";

/// Everything decided about the current asset when its load began.
#[derive(Debug)]
struct StagedAsset {
    asset: AssetRef,
    classification: Classification,
    recommendation: Recommendation,
    placeholder: GeometryStats,
}

/// Coordinates asset loads with classification, bounds, camera framing and
/// the object registry.
///
/// The manager owns the [`StudioState`] and is its only writer while loads
/// run. Background work (reading bytes, the loader itself, the progress
/// timer) runs in spawned tasks that never touch the state: they report
/// through a channel, tagged with the [`AssetId`] they were started for, and
/// the manager applies the reports in [`process_pending`], [`next_event`] or
/// [`wait_until_settled`]. Reports for an asset that is no longer current
/// are discarded.
///
/// Loads are started with [`tokio::spawn`], so [`begin_load`] must be called
/// from within a Tokio runtime.
///
/// [`process_pending`]: SceneLifecycleManager::process_pending
/// [`next_event`]: SceneLifecycleManager::next_event
/// [`wait_until_settled`]: SceneLifecycleManager::wait_until_settled
/// [`begin_load`]: SceneLifecycleManager::begin_load
pub struct SceneLifecycleManager {
    config: StudioConfig,
    loader: Arc<dyn SceneLoader>,
    classifier: DomainClassifier,
    recommender: ToolRecommendationEngine,
    framing: FramingLane,
    rng: Box<dyn RandomSource>,
    state: StudioState,
    phase: LoadPhase,
    current: Option<StagedAsset>,
    timer: Option<JoinHandle<()>>,
    in_flight: usize,
    sender: UnboundedSender<LifecycleMessage>,
    receiver: UnboundedReceiver<LifecycleMessage>,
    events: EventBus<StudioEvent>,
}

impl SceneLifecycleManager {
    /// Creates a manager after validating `config`.
    ///
    /// The classification random source is seeded from `config.seed`, or from
    /// entropy when no seed is set.
    pub fn new(loader: Arc<dyn SceneLoader>, config: StudioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(loader, config))
    }

    /// Creates a manager with the default configuration.
    pub fn with_defaults(loader: Arc<dyn SceneLoader>) -> Self {
        Self::build(loader, StudioConfig::default())
    }

    fn build(loader: Arc<dyn SceneLoader>, config: StudioConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        log::info!("Scene lifecycle manager initialized.");
        Self {
            classifier: DomainClassifier::new(),
            recommender: ToolRecommendationEngine::new(),
            framing: FramingLane::from_config(&config),
            rng: Box::new(SeededRandom::from_optional_seed(config.seed)),
            state: StudioState::new(),
            phase: LoadPhase::Idle,
            current: None,
            timer: None,
            in_flight: 0,
            sender,
            receiver,
            events: EventBus::new(),
            config,
            loader,
        }
    }

    /// Replaces the random source behind classification and placeholders.
    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the domain classifier.
    pub fn with_classifier(mut self, classifier: DomainClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    // --- Accessors ---

    /// The phase of the current asset.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The identity token of the current asset.
    pub fn current_asset(&self) -> Option<AssetId> {
        self.current.as_ref().map(|staged| staged.asset.id)
    }

    /// The studio state.
    pub fn state(&self) -> &StudioState {
        &self.state
    }

    /// Mutable access for presentation-driven setters (selection, visibility,
    /// viewport, panels, tools).
    pub fn state_mut(&mut self) -> &mut StudioState {
        &mut self.state
    }

    /// The configuration in use.
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Opens a stream of lifecycle events.
    pub fn subscribe(&mut self) -> flume::Receiver<StudioEvent> {
        self.events.subscribe()
    }

    /// Number of event streams still being listened to.
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }

    // --- Transitions ---

    /// Makes `source` the current asset and starts loading it.
    ///
    /// Any load in flight is superseded: its progress timer stops at once and
    /// its eventual result will be discarded. Returns the identity token of
    /// the new load.
    pub fn begin_load(&mut self, source: AssetSource) -> AssetId {
        let id = AssetId::new();
        let asset = source.to_ref(id);

        if let Some(previous) = self.current.as_ref().filter(|_| self.phase == LoadPhase::Loading) {
            log::info!(
                "Load of '{}' superseded by '{}'.",
                previous.asset.filename,
                asset.filename
            );
        }
        self.stop_timer();

        self.loader.clear(&self.config.permanent_helpers);
        let helpers = &self.config.permanent_helpers;
        self.state
            .retain_scene_objects(|object| helpers.iter().any(|helper| *helper == object.name));
        self.state.select_object(None);
        self.state.set_load_progress(0);
        self.state.set_loading(true);
        self.state.set_analyzing(true);
        self.state.set_current_asset(Some(asset.clone()));

        let classification =
            self.classifier
                .classify_asset(&asset.filename, &asset.extension, self.rng.as_mut());
        let recommendation = self.recommender.recommend(classification.domain);
        let placeholder = estimate_geometry(classification.domain, self.rng.as_mut());

        log::info!(
            "Loading '{}' as {} (asset {id}).",
            asset.filename,
            classification.domain
        );

        self.current = Some(StagedAsset {
            asset: asset.clone(),
            classification,
            recommendation,
            placeholder,
        });
        self.phase = LoadPhase::Loading;

        self.timer = Some(spawn_progress_timer(
            id,
            self.config.progress_interval(),
            self.sender.clone(),
        ));
        spawn_load(id, source, Arc::clone(&self.loader), self.sender.clone());
        self.in_flight += 1;

        self.events.publish(StudioEvent::LoadStarted { asset });
        id
    }

    /// Publishes the showcase objects when no asset has been imported.
    ///
    /// Returns `false` and changes nothing once an asset is current.
    pub fn populate_default_scene(&mut self) -> bool {
        if self.current.is_some() {
            return false;
        }
        let helpers = &self.config.permanent_helpers;
        self.state
            .retain_scene_objects(|object| helpers.iter().any(|helper| *helper == object.name));
        let mut objects = self.state.scene_objects().to_vec();
        objects.extend(showcase_objects());
        self.state.set_scene_objects(objects);
        log::debug!("Showcase scene published.");
        self.events.publish(StudioEvent::DefaultScenePublished);
        true
    }

    // --- Event driving ---

    /// Applies every report that has already arrived, without waiting.
    ///
    /// Returns how many reports were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.apply(message);
            applied += 1;
        }
        applied
    }

    /// Waits for the next report and applies it.
    ///
    /// Returns `false` immediately when no load is in flight and nothing is
    /// queued, since no report can arrive.
    pub async fn next_event(&mut self) -> bool {
        if let Ok(message) = self.receiver.try_recv() {
            self.apply(message);
            return true;
        }
        if self.in_flight == 0 {
            return false;
        }
        match self.receiver.recv().await {
            Some(message) => {
                self.apply(message);
                true
            }
            None => false,
        }
    }

    /// Drives the lifecycle until the current asset is ready or failed.
    pub async fn wait_until_settled(&mut self) -> LoadPhase {
        while !self.phase.is_settled() {
            if !self.next_event().await {
                break;
            }
        }
        self.phase
    }

    fn apply(&mut self, message: LifecycleMessage) {
        let asset = message.asset();
        let is_current = self.current_asset() == Some(asset) && self.phase == LoadPhase::Loading;

        match message {
            LifecycleMessage::Tick { .. } if is_current => self.advance_progress(asset),
            LifecycleMessage::Tick { .. } => {}
            LifecycleMessage::Completed { result, .. } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if !is_current {
                    self.discard_stale(asset);
                    return;
                }
                self.stop_timer();
                match result {
                    Ok(scene) => self.complete(asset, scene),
                    Err(err) => self.fail(asset, err),
                }
            }
        }
    }

    fn advance_progress(&mut self, asset: AssetId) {
        let current = self.state.load_progress();
        let next = current
            .saturating_add(self.config.progress_step)
            .min(self.config.progress_cap)
            .max(current);
        if next != current {
            log::trace!("Asset {asset} progress {current} -> {next}.");
            self.state.set_load_progress(next);
            self.events.publish(StudioEvent::Progress {
                asset,
                progress: next,
            });
        }
    }

    fn complete(&mut self, asset: AssetId, scene: LoadedScene) {
        let Some(staged) = self.current.as_ref() else {
            return;
        };

        let nodes: Vec<_> = self.framing.asset_nodes(&scene.nodes).collect();
        let bounds = atelier_lanes::framing_lane::aggregate_bounds(nodes.iter().copied());
        match self.framing.frame(&bounds) {
            Some(framing) => self.state.set_camera_framing(framing),
            None => log::debug!("Asset {asset} produced no geometry; camera left unchanged."),
        }

        let mut objects = self.state.scene_objects().to_vec();
        objects.extend(nodes.iter().map(|node| {
            let name = if node.name.is_empty() {
                UNNAMED
            } else {
                node.name.as_str()
            };
            SceneObject::mesh(node.id, name).with_visibility(node.visible)
        }));
        let object_count = nodes.len();
        self.state.set_scene_objects(objects);

        let analysis = ModelAnalysis::new(
            staged.classification.clone(),
            scene.stats.unwrap_or(staged.placeholder),
            bounds,
            staged.recommendation.tool_ids(),
            staged.recommendation.workflow,
        );
        self.state.publish_analysis(analysis.clone());
        self.state.set_load_progress(100);
        self.state.set_loading(false);
        self.state.set_analyzing(false);
        self.phase = LoadPhase::Ready;

        log::info!(
            "Loaded '{}': {} object(s), domain {}.",
            staged.asset.filename,
            object_count,
            analysis.domain
        );
        self.events.publish(StudioEvent::Progress {
            asset,
            progress: 100,
        });
        self.events.publish(StudioEvent::AnalysisPublished {
            asset,
            analysis,
            object_count,
        });
    }

    fn fail(&mut self, asset: AssetId, err: LoadError) {
        let filename = self
            .current
            .as_ref()
            .map(|staged| staged.asset.filename.clone())
            .unwrap_or_default();
        log::error!("Failed to load '{filename}' (asset {asset}): {err}");

        self.loader.release(asset);
        self.state.set_loading(false);
        self.state.set_analyzing(false);
        self.phase = LoadPhase::Failed;

        self.events.publish(StudioEvent::LoadFailed {
            asset,
            message: err.to_string(),
        });
    }

    fn discard_stale(&mut self, asset: AssetId) {
        log::debug!("Discarding result of superseded asset {asset}.");
        self.loader.release(asset);
        self.events.publish(StudioEvent::StaleDiscarded { asset });
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SceneLifecycleManager {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
