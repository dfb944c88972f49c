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

use atelier_core::analysis::{Classification, GeometryStats, ModelAnalysis};
use atelier_core::domain::Domain;
use atelier_core::math::Aabb;
use atelier_core::scene::SceneObject;
use atelier_data::{DomainConfigRegistry, StudioState};

fn analysis(domain: Domain) -> ModelAnalysis {
    ModelAnalysis::new(
        Classification {
            domain,
            confidence: 0.97,
            subtype: Some("Assembly".into()),
        },
        GeometryStats::default(),
        Aabb::INVALID,
        vec!["parametric".into(), "assembly-tree".into(), "tolerance".into(), "section-views".into()],
        "Design Review",
    )
}

#[test]
fn publishing_an_analysis_moves_the_domain_with_it() {
    let registry = DomainConfigRegistry::global();
    let mut state = StudioState::new();

    state.publish_analysis(analysis(Domain::Cad));

    assert_eq!(state.current_domain(), Domain::Cad);
    let config = state.domain_config(registry);
    for tool in &state.model_analysis().unwrap().recommended_tools {
        assert!(config.has_tool(tool), "{tool} missing from {}", config.id);
    }
}

#[test]
fn snapshot_serializes_for_the_presentation_layer() {
    let mut state = StudioState::new();
    state.set_scene_objects(vec![SceneObject::mesh("defaultSphere", "Sphere")]);
    state.publish_analysis(analysis(Domain::Cad));

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["current_domain"], "cad");
    assert_eq!(json["scene_objects"][0]["type"], "mesh");
    assert_eq!(json["scene_objects"][0]["id"], "defaultSphere");
    assert_eq!(json["model_analysis"]["recommended_workflow"], "Design Review");
    assert_eq!(json["viewport"]["render_mode"], "textured");
    assert_eq!(json["camera"]["radius"], 10.0);
}

#[test]
fn registry_serializes_tools_with_optional_shortcuts() {
    let config = DomainConfigRegistry::global().get(Domain::Unknown);
    let json = serde_json::to_value(config).unwrap();
    assert_eq!(json["id"], "unknown");
    assert_eq!(json["tools"][0]["shortcut"], "Q");
    assert!(json["tools"][5]["shortcut"].is_null());
}
