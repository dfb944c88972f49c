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

//! Computes the aggregate bounds of a loaded asset and the camera framing
//! derived from them.

use atelier_core::config::StudioConfig;
use atelier_core::loader::LoadedNode;
use atelier_core::math::Aabb;
use atelier_core::scene::CameraFraming;

/// Folds node bounds into one box.
///
/// The fold starts from the `+inf`/`-inf` sentinels of [`Aabb::INVALID`], so
/// an empty input, or one where no node has geometry, returns an invalid box.
pub fn aggregate_bounds<'a>(nodes: impl IntoIterator<Item = &'a LoadedNode>) -> Aabb {
    nodes
        .into_iter()
        .filter(|node| node.bounds.is_valid())
        .fold(Aabb::INVALID, |acc, node| acc.merge(&node.bounds))
}

/// Frames `bounds`: the camera targets the box center from
/// `diagonal * margin` away.
///
/// Returns `None` for an invalid box.
pub fn frame_bounds(bounds: &Aabb, margin: f32) -> Option<CameraFraming> {
    if !bounds.is_valid() {
        return None;
    }
    Some(CameraFraming::new(
        bounds.center(),
        bounds.diagonal_length() * margin,
    ))
}

/// Bounds and framing with the studio's exclusions applied.
#[derive(Debug, Clone)]
pub struct FramingLane {
    margin: f32,
    ignored_names: Vec<String>,
}

impl FramingLane {
    /// Creates a lane that frames with `margin` and skips nodes named in
    /// `ignored_names`.
    pub fn new(margin: f32, ignored_names: Vec<String>) -> Self {
        Self {
            margin,
            ignored_names,
        }
    }

    /// Skips the permanent helpers and the root proxy of `config`.
    pub fn from_config(config: &StudioConfig) -> Self {
        let mut ignored_names = config.permanent_helpers.clone();
        ignored_names.push(config.root_proxy_name.clone());
        Self::new(config.framing_margin, ignored_names)
    }

    /// Whether a node with this name is not part of the asset.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.iter().any(|ignored| ignored == name)
    }

    /// The nodes that belong to the asset, in load order.
    pub fn asset_nodes<'a>(
        &'a self,
        nodes: &'a [LoadedNode],
    ) -> impl Iterator<Item = &'a LoadedNode> + 'a {
        nodes.iter().filter(move |node| !self.is_ignored(&node.name))
    }

    /// Aggregate bounds of the asset's nodes.
    pub fn bounds(&self, nodes: &[LoadedNode]) -> Aabb {
        aggregate_bounds(self.asset_nodes(nodes))
    }

    /// Framing for `bounds` with this lane's margin.
    pub fn frame(&self, bounds: &Aabb) -> Option<CameraFraming> {
        frame_bounds(bounds, self.margin)
    }
}

impl Default for FramingLane {
    fn default() -> Self {
        Self::from_config(&StudioConfig::default())
    }
}
