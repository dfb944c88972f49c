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

use serde::{Deserialize, Serialize};

/// How surfaces are drawn in the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Flat-colored solids.
    Solid,
    /// Edges only.
    Wireframe,
    /// Solids with their textures.
    #[default]
    Textured,
    /// Full material preview.
    Material,
}

/// How lighting is evaluated on surfaces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Per-face normals.
    Flat,
    /// Interpolated normals.
    Smooth,
    /// Physically based shading.
    #[default]
    Pbr,
}

/// Display toggles of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Draw the ground grid.
    pub show_grid: bool,
    /// Draw the world axes.
    pub show_axes: bool,
    /// Show the statistics overlay.
    pub show_stats: bool,
    /// Surface drawing mode.
    pub render_mode: RenderMode,
    /// Lighting mode.
    pub shading_mode: ShadingMode,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
            show_stats: true,
            render_mode: RenderMode::Textured,
            shading_mode: ShadingMode::Pbr,
        }
    }
}

impl ViewportSettings {
    /// Applies the fields set in `update`, leaving the others untouched.
    pub fn apply(&mut self, update: ViewportUpdate) {
        if let Some(show_grid) = update.show_grid {
            self.show_grid = show_grid;
        }
        if let Some(show_axes) = update.show_axes {
            self.show_axes = show_axes;
        }
        if let Some(show_stats) = update.show_stats {
            self.show_stats = show_stats;
        }
        if let Some(render_mode) = update.render_mode {
            self.render_mode = render_mode;
        }
        if let Some(shading_mode) = update.shading_mode {
            self.shading_mode = shading_mode;
        }
    }
}

/// A partial update of [`ViewportSettings`]. Unset fields are kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportUpdate {
    /// New grid toggle.
    pub show_grid: Option<bool>,
    /// New axes toggle.
    pub show_axes: Option<bool>,
    /// New statistics toggle.
    pub show_stats: Option<bool>,
    /// New render mode.
    pub render_mode: Option<RenderMode>,
    /// New shading mode.
    pub shading_mode: Option<ShadingMode>,
}

/// Sizes of the docked panels, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Width of the left panel.
    pub left_width: u32,
    /// Width of the right panel.
    pub right_width: u32,
    /// Height of the bottom panel.
    pub bottom_height: u32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            left_width: 280,
            right_width: 300,
            bottom_height: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_only_touches_given_fields() {
        let mut settings = ViewportSettings::default();
        settings.apply(ViewportUpdate {
            show_grid: Some(false),
            render_mode: Some(RenderMode::Wireframe),
            ..Default::default()
        });
        assert!(!settings.show_grid);
        assert!(settings.show_axes);
        assert_eq!(settings.render_mode, RenderMode::Wireframe);
        assert_eq!(settings.shading_mode, ShadingMode::Pbr);
    }

    #[test]
    fn modes_serialize_lowercase() {
        let json = serde_json::to_string(&ViewportSettings::default()).unwrap();
        assert!(json.contains("\"render_mode\":\"textured\""), "{json}");
        assert!(json.contains("\"shading_mode\":\"pbr\""), "{json}");
    }
}
