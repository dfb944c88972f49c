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

//! Maps a domain to the tools and workflow the studio suggests first.

use atelier_core::domain::Domain;

/// The suggestion for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Four tool ids, most relevant first.
    pub tools: [&'static str; 4],
    /// Label of the suggested workflow.
    pub workflow: &'static str,
}

impl Recommendation {
    /// The tool ids as owned strings, ready for a [`ModelAnalysis`].
    ///
    /// [`ModelAnalysis`]: atelier_core::analysis::ModelAnalysis
    pub fn tool_ids(&self) -> Vec<String> {
        self.tools.iter().map(|id| id.to_string()).collect()
    }
}

const FALLBACK: Recommendation = Recommendation {
    tools: ["select", "move", "rotate", "scale"],
    workflow: "Basic Editing",
};

/// Static lookup of recommended tools and workflows.
///
/// Every id it hands out belongs to that domain's tool list in the
/// [`DomainConfigRegistry`](atelier_data::DomainConfigRegistry).
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolRecommendationEngine;

impl ToolRecommendationEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// The full recommendation for `domain`.
    pub fn recommend(&self, domain: Domain) -> Recommendation {
        let (tools, workflow) = match domain {
            Domain::Building => (
                ["measure", "section", "bim-inspector", "clash-detect"],
                "Design Review",
            ),
            Domain::Character => (
                ["rig-tools", "weight-paint", "morph-targets", "pose-library"],
                "Rig Setup",
            ),
            Domain::Cad => (
                ["parametric", "assembly-tree", "tolerance", "section-views"],
                "Design Review",
            ),
            Domain::Vegetation => (
                ["density-paint", "lod-gen", "wind-sim", "seasonal"],
                "Forest Setup",
            ),
            Domain::Textile => (
                ["pattern", "seam", "fabric-sim", "size-grade"],
                "Garment Design",
            ),
            Domain::Ocean => (
                ["wave-sim", "fluid", "buoyancy", "caustics"],
                "Underwater Scene",
            ),
            Domain::Mining => (["volume", "ore-grade", "blast", "stockpile"], "Pit Design"),
            Domain::Aerospace => (["aero", "thermal", "stress", "mass"], "Flight Analysis"),
            Domain::Gaming => (["lod", "uv", "pbr", "collision"], "Asset Preparation"),
            Domain::Film => (
                ["camera-track", "motion-blur", "dof", "composite"],
                "VFX Shot",
            ),
            Domain::Medical => (
                ["slice", "segment", "measure-3d", "annotate"],
                "Medical Review",
            ),
            Domain::Product => (
                ["material", "render", "turntable", "ar-preview"],
                "Product Visualization",
            ),
            Domain::Furniture => (
                ["dimension", "material", "configurator", "room-place"],
                "Furniture Design",
            ),
            Domain::Jewelry => (["gem", "prong", "metal", "ring-sizer"], "Ring Design"),
            Domain::Unknown => return FALLBACK,
        };
        Recommendation { tools, workflow }
    }

    /// Exactly four tool ids for `domain`.
    pub fn recommended_tools(&self, domain: Domain) -> [&'static str; 4] {
        self.recommend(domain).tools
    }

    /// The workflow label for `domain`.
    pub fn recommended_workflow(&self, domain: Domain) -> &'static str {
        self.recommend(domain).workflow
    }

    /// Like [`ToolRecommendationEngine::recommend`], for a raw identifier.
    /// Unrecognized keys get the `unknown` recommendation.
    pub fn recommend_for_key(&self, key: &str) -> Recommendation {
        Domain::from_id(key).map_or(FALLBACK, |domain| self.recommend(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_data::DomainConfigRegistry;

    #[test]
    fn unknown_gets_basic_editing() {
        let engine = ToolRecommendationEngine::new();
        assert_eq!(
            engine.recommended_tools(Domain::Unknown),
            ["select", "move", "rotate", "scale"]
        );
        assert_eq!(engine.recommended_workflow(Domain::Unknown), "Basic Editing");
    }

    #[test]
    fn raw_keys_fall_back() {
        let engine = ToolRecommendationEngine::new();
        assert_eq!(engine.recommend_for_key("hovercraft"), FALLBACK);
        assert_eq!(engine.recommend_for_key("MINING").workflow, "Pit Design");
    }

    #[test]
    fn recommendations_exist_in_the_registry() {
        let engine = ToolRecommendationEngine::new();
        let registry = DomainConfigRegistry::global();
        for domain in Domain::ALL {
            let recommendation = engine.recommend(domain);
            let config = registry.get(domain);
            for tool in recommendation.tools {
                assert!(config.has_tool(tool), "{domain}: '{tool}' is not a registry tool");
            }
            assert!(
                config.workflow_named(recommendation.workflow).is_some(),
                "{domain}: workflow '{}' is not in the registry",
                recommendation.workflow
            );
        }
    }

    #[test]
    fn tool_ids_are_distinct() {
        let engine = ToolRecommendationEngine::new();
        for domain in Domain::ALL {
            let mut tools = engine.recommended_tools(domain).to_vec();
            tools.sort_unstable();
            tools.dedup();
            assert_eq!(tools.len(), 4, "{domain} repeats a tool");
        }
    }
}
