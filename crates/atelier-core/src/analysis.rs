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

//! The records produced when an asset is analyzed.
//!
//! A [`Classification`] is the pure output of the classifier. A
//! [`ModelAnalysis`] is the full, published judgment for one asset: the
//! classification plus geometry statistics, bounds and recommendations.

use crate::domain::Domain;
use crate::math::{Aabb, Vec3};
use serde::{Deserialize, Serialize};

/// The classifier's verdict for a single `(filename, extension)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The detected domain.
    pub domain: Domain,
    /// Certainty of the verdict, always within `[0, 1]`.
    pub confidence: f64,
    /// Finer-grained label within the domain, if the domain has any.
    pub subtype: Option<String>,
}

/// Geometry statistics for a loaded asset.
///
/// Loaders fill this from the decoded file when they can. When they cannot,
/// the lifecycle substitutes randomized placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryStats {
    /// Total number of vertices across all meshes.
    pub vertex_count: u64,
    /// Total number of faces (triangles) across all meshes.
    pub face_count: u64,
    /// Number of distinct materials.
    pub material_count: u32,
    /// Whether the asset carries animation clips.
    pub has_animations: bool,
    /// Whether the asset carries a skeleton / skin.
    pub has_skeleton: bool,
}

/// The complete analysis published for one asset.
///
/// Immutable once built; the next asset replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAnalysis {
    /// The detected domain.
    pub domain: Domain,
    /// Classification confidence within `[0, 1]`.
    pub confidence: f64,
    /// Optional finer-grained label.
    pub subtype: Option<String>,
    /// Total vertex count.
    pub vertex_count: u64,
    /// Total face count.
    pub face_count: u64,
    /// Number of materials.
    pub material_count: u32,
    /// Whether the asset is animated.
    pub has_animations: bool,
    /// Whether the asset is skinned.
    pub has_skeleton: bool,
    /// World-space extent of the asset, `min <= max` componentwise.
    pub bounding_box: Aabb,
    /// Exactly four suggested tool ids, most relevant first.
    pub recommended_tools: Vec<String>,
    /// Label of the suggested workflow.
    pub recommended_workflow: String,
}

impl ModelAnalysis {
    /// Bounds reported when the asset produced no measurable geometry.
    pub const PLACEHOLDER_BOUNDS: Aabb = Aabb {
        min: Vec3::new(-1.0, 0.0, -1.0),
        max: Vec3::new(1.0, 2.0, 1.0),
    };

    /// Assembles an analysis from its parts.
    ///
    /// An unresolved `bounding_box` (see [`Aabb::INVALID`]) is replaced with
    /// [`ModelAnalysis::PLACEHOLDER_BOUNDS`] so the published record always
    /// satisfies `min <= max`.
    pub fn new(
        classification: Classification,
        stats: GeometryStats,
        bounding_box: Aabb,
        recommended_tools: Vec<String>,
        recommended_workflow: impl Into<String>,
    ) -> Self {
        let bounding_box = if bounding_box.is_valid() {
            bounding_box
        } else {
            Self::PLACEHOLDER_BOUNDS
        };

        Self {
            domain: classification.domain,
            confidence: classification.confidence.clamp(0.0, 1.0),
            subtype: classification.subtype,
            vertex_count: stats.vertex_count,
            face_count: stats.face_count,
            material_count: stats.material_count,
            has_animations: stats.has_animations,
            has_skeleton: stats.has_skeleton,
            bounding_box,
            recommended_tools,
            recommended_workflow: recommended_workflow.into(),
        }
    }

    /// Returns the geometry statistics part of the analysis.
    pub fn stats(&self) -> GeometryStats {
        GeometryStats {
            vertex_count: self.vertex_count,
            face_count: self.face_count,
            material_count: self.material_count,
            has_animations: self.has_animations,
            has_skeleton: self.has_skeleton,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification() -> Classification {
        Classification {
            domain: Domain::Character,
            confidence: 0.9,
            subtype: Some("Humanoid".to_string()),
        }
    }

    #[test]
    fn unresolved_bounds_become_placeholder() {
        let analysis = ModelAnalysis::new(
            classification(),
            GeometryStats::default(),
            Aabb::INVALID,
            vec![],
            "Rig Setup",
        );
        assert_eq!(analysis.bounding_box, ModelAnalysis::PLACEHOLDER_BOUNDS);
        assert!(analysis.bounding_box.is_valid());
    }

    #[test]
    fn resolved_bounds_are_kept() {
        let bounds = Aabb::from_min_max(Vec3::new(-4.0, 0.0, -2.0), Vec3::new(4.0, 1.0, 2.0));
        let stats = GeometryStats {
            vertex_count: 120,
            face_count: 40,
            material_count: 2,
            has_animations: true,
            has_skeleton: true,
        };
        let analysis = ModelAnalysis::new(
            classification(),
            stats,
            bounds,
            vec!["rig-tools".into()],
            "Rig Setup",
        );
        assert_eq!(analysis.bounding_box, bounds);
        assert_eq!(analysis.stats(), stats);
        assert_eq!(analysis.subtype.as_deref(), Some("Humanoid"));
    }
}
