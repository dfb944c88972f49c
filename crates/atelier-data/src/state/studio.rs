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

use super::viewport::{PanelLayout, ViewportSettings, ViewportUpdate};
use crate::registry::{DomainConfig, DomainConfigRegistry};
use atelier_core::analysis::ModelAnalysis;
use atelier_core::asset::AssetRef;
use atelier_core::domain::Domain;
use atelier_core::scene::{self, CameraFraming, SceneObject, SceneObjectId};
use serde::Serialize;

/// Tool selected when the studio starts.
pub const DEFAULT_TOOL: &str = "select";

/// Snapshot of everything the studio shows.
///
/// All mutation goes through the setters below; [`StudioState::reset`]
/// restores the initial snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioState {
    scene_objects: Vec<SceneObject>,
    selected_object_id: Option<SceneObjectId>,
    current_domain: Domain,
    model_analysis: Option<ModelAnalysis>,
    is_analyzing: bool,
    viewport: ViewportSettings,
    panels: PanelLayout,
    active_tool_id: Option<String>,
    current_asset: Option<AssetRef>,
    is_loading: bool,
    load_progress: u8,
    camera: CameraFraming,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            scene_objects: Vec::new(),
            selected_object_id: None,
            current_domain: Domain::Unknown,
            model_analysis: None,
            is_analyzing: false,
            viewport: ViewportSettings::default(),
            panels: PanelLayout::default(),
            active_tool_id: Some(DEFAULT_TOOL.to_string()),
            current_asset: None,
            is_loading: false,
            load_progress: 0,
            camera: CameraFraming::DEFAULT,
        }
    }
}

impl StudioState {
    /// Creates the initial snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the initial snapshot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --- Scene ---

    /// The object registry, top-level objects in display order.
    pub fn scene_objects(&self) -> &[SceneObject] {
        &self.scene_objects
    }

    /// Replaces the object registry wholesale.
    pub fn set_scene_objects(&mut self, objects: Vec<SceneObject>) {
        self.scene_objects = objects;
    }

    /// Keeps only the top-level objects for which `keep` returns `true`.
    pub fn retain_scene_objects(&mut self, keep: impl FnMut(&SceneObject) -> bool) {
        self.scene_objects.retain(keep);
    }

    /// The selected object id, if any.
    pub fn selected_object_id(&self) -> Option<&SceneObjectId> {
        self.selected_object_id.as_ref()
    }

    /// Selects an object, or clears the selection with `None`.
    ///
    /// The id is stored as given; selecting an id that is not in the registry
    /// simply yields no [`StudioState::selected_object`].
    pub fn select_object(&mut self, id: Option<SceneObjectId>) {
        self.selected_object_id = id;
    }

    /// Flips the visibility of the object with `id`, wherever it is in the
    /// forest.
    ///
    /// Returns `false`, leaving the state untouched, when no object has that
    /// id.
    pub fn toggle_object_visibility(&mut self, id: &SceneObjectId) -> bool {
        match scene::find_in_forest_mut(&mut self.scene_objects, id) {
            Some(object) => {
                object.visible = !object.visible;
                true
            }
            None => {
                log::debug!("Visibility toggle ignored: no object with id '{id}'.");
                false
            }
        }
    }

    // --- Analysis ---

    /// The domain of the current asset.
    pub fn current_domain(&self) -> Domain {
        self.current_domain
    }

    /// Sets the current domain.
    pub fn set_domain(&mut self, domain: Domain) {
        self.current_domain = domain;
    }

    /// The analysis of the current asset, if one has been published.
    pub fn model_analysis(&self) -> Option<&ModelAnalysis> {
        self.model_analysis.as_ref()
    }

    /// Sets or clears the analysis without touching the domain.
    pub fn set_model_analysis(&mut self, analysis: Option<ModelAnalysis>) {
        self.model_analysis = analysis;
    }

    /// Publishes an analysis together with its domain, in one step.
    pub fn publish_analysis(&mut self, analysis: ModelAnalysis) {
        self.current_domain = analysis.domain;
        self.model_analysis = Some(analysis);
    }

    /// Whether classification is in progress.
    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    /// Raises or clears the analyzing flag.
    pub fn set_analyzing(&mut self, analyzing: bool) {
        self.is_analyzing = analyzing;
    }

    // --- Viewport & layout ---

    /// The viewport toggles.
    pub fn viewport(&self) -> &ViewportSettings {
        &self.viewport
    }

    /// Applies a partial viewport update.
    pub fn update_viewport(&mut self, update: ViewportUpdate) {
        self.viewport.apply(update);
    }

    /// The panel sizes.
    pub fn panels(&self) -> &PanelLayout {
        &self.panels
    }

    /// Sets the left panel width.
    pub fn set_left_panel_width(&mut self, width: u32) {
        self.panels.left_width = width;
    }

    /// Sets the right panel width.
    pub fn set_right_panel_width(&mut self, width: u32) {
        self.panels.right_width = width;
    }

    /// Sets the bottom panel height.
    pub fn set_bottom_panel_height(&mut self, height: u32) {
        self.panels.bottom_height = height;
    }

    /// The active tool id, if any.
    pub fn active_tool_id(&self) -> Option<&str> {
        self.active_tool_id.as_deref()
    }

    /// Activates a tool, or none.
    pub fn set_active_tool(&mut self, tool_id: Option<String>) {
        self.active_tool_id = tool_id;
    }

    // --- Asset ---

    /// The asset currently in the studio.
    pub fn current_asset(&self) -> Option<&AssetRef> {
        self.current_asset.as_ref()
    }

    /// Sets or clears the current asset reference.
    pub fn set_current_asset(&mut self, asset: Option<AssetRef>) {
        self.current_asset = asset;
    }

    /// Whether an asset is loading.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Raises or clears the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Load progress, 0 to 100.
    pub fn load_progress(&self) -> u8 {
        self.load_progress
    }

    /// Sets the load progress. Values above 100 are clamped.
    pub fn set_load_progress(&mut self, progress: u8) {
        self.load_progress = progress.min(100);
    }

    /// The camera framing derived from the last loaded asset.
    pub fn camera_framing(&self) -> CameraFraming {
        self.camera
    }

    /// Sets the camera framing.
    pub fn set_camera_framing(&mut self, framing: CameraFraming) {
        self.camera = framing;
    }

    // --- Derived views ---

    /// Every object of the forest whose own visibility flag is set, depth-first.
    pub fn visible_objects(&self) -> impl Iterator<Item = &SceneObject> + '_ {
        scene::iter_forest(&self.scene_objects).filter(|object| object.visible)
    }

    /// Finds an object anywhere in the forest.
    pub fn find_object(&self, id: &SceneObjectId) -> Option<&SceneObject> {
        scene::find_in_forest(&self.scene_objects, id)
    }

    /// Objects whose name contains `query`, ignoring case. An empty query
    /// matches everything.
    pub fn objects_matching<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a SceneObject> + 'a {
        let query = query.to_lowercase();
        scene::iter_forest(&self.scene_objects)
            .filter(move |object| object.name.to_lowercase().contains(&query))
    }

    /// Number of objects in the whole forest.
    pub fn object_count(&self) -> usize {
        scene::iter_forest(&self.scene_objects).count()
    }

    /// The selected object, when the selection resolves to one.
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected_object_id
            .as_ref()
            .and_then(|id| self.find_object(id))
    }

    /// The configuration of the current domain.
    pub fn domain_config<'r>(&self, registry: &'r DomainConfigRegistry) -> &'r DomainConfig {
        registry.get(self.current_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RenderMode, ViewportUpdate};

    fn populated() -> StudioState {
        let mut state = StudioState::new();
        state.set_scene_objects(vec![
            SceneObject::mesh("1", "Chassis").with_children(vec![
                SceneObject::mesh("2", "Wheel FL"),
                SceneObject::mesh("3", "Wheel FR").with_visibility(false),
            ]),
            SceneObject::mesh("4", "Spoiler"),
        ]);
        state
    }

    #[test]
    fn initial_snapshot() {
        let state = StudioState::new();
        assert!(state.scene_objects().is_empty());
        assert_eq!(state.selected_object_id(), None);
        assert_eq!(state.current_domain(), Domain::Unknown);
        assert!(state.model_analysis().is_none());
        assert!(!state.is_analyzing());
        assert!(state.viewport().show_grid && state.viewport().show_axes && state.viewport().show_stats);
        assert_eq!(state.viewport().render_mode, RenderMode::Textured);
        assert_eq!(state.panels().left_width, 280);
        assert_eq!(state.panels().right_width, 300);
        assert_eq!(state.panels().bottom_height, 200);
        assert_eq!(state.active_tool_id(), Some("select"));
        assert!(state.current_asset().is_none());
        assert!(!state.is_loading());
        assert_eq!(state.load_progress(), 0);
        assert_eq!(state.camera_framing(), CameraFraming::DEFAULT);
    }

    #[test]
    fn toggle_reaches_nested_objects() {
        let mut state = populated();
        assert!(state.toggle_object_visibility(&"3".into()));
        assert!(state.find_object(&"3".into()).unwrap().visible);
        assert!(state.toggle_object_visibility(&"3".into()));
        assert!(!state.find_object(&"3".into()).unwrap().visible);
    }

    #[test]
    fn toggling_an_absent_id_changes_nothing() {
        let mut state = populated();
        let before = state.clone();
        assert!(!state.toggle_object_visibility(&"missing".into()));
        assert_eq!(state, before);

        let mut empty = StudioState::new();
        assert!(!empty.toggle_object_visibility(&"missing".into()));
        assert_eq!(empty, StudioState::new());
    }

    #[test]
    fn derived_views_cover_the_whole_forest() {
        let state = populated();
        assert_eq!(state.object_count(), 4);

        let visible: Vec<_> = state.visible_objects().map(|o| o.name.as_str()).collect();
        assert_eq!(visible, vec!["Chassis", "Wheel FL", "Spoiler"]);

        let wheels: Vec<_> = state.objects_matching("WHEEL").map(|o| o.id.as_str()).collect();
        assert_eq!(wheels, vec!["2", "3"]);
        assert_eq!(state.objects_matching("").count(), 4);
    }

    #[test]
    fn selection_resolves_through_the_forest() {
        let mut state = populated();
        state.select_object(Some("2".into()));
        assert_eq!(state.selected_object().map(|o| o.name.as_str()), Some("Wheel FL"));
        state.select_object(Some("nope".into()));
        assert!(state.selected_object().is_none());
        state.select_object(None);
        assert!(state.selected_object_id().is_none());
    }

    #[test]
    fn progress_is_clamped() {
        let mut state = StudioState::new();
        state.set_load_progress(250);
        assert_eq!(state.load_progress(), 100);
    }

    #[test]
    fn domain_config_follows_current_domain() {
        let registry = DomainConfigRegistry::new();
        let mut state = StudioState::new();
        assert_eq!(state.domain_config(&registry).name, "General");
        state.set_domain(Domain::Jewelry);
        assert_eq!(state.domain_config(&registry).id, Domain::Jewelry);
    }

    #[test]
    fn reset_restores_the_initial_snapshot() {
        let mut state = populated();
        state.set_domain(Domain::Cad);
        state.set_loading(true);
        state.set_load_progress(40);
        state.set_active_tool(None);
        state.set_left_panel_width(500);
        state.update_viewport(ViewportUpdate {
            show_stats: Some(false),
            ..Default::default()
        });
        state.reset();
        assert_eq!(state, StudioState::new());
    }
}
