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

use atelier_core::domain::Domain;
use atelier_core::random::{RandomSource, SeededRandom};
use atelier_lanes::classification_lane::{subtypes_of, ConfidenceBand};
use atelier_lanes::{DomainClassifier, ToolRecommendationEngine};

/// A random source that replays a fixed list of values.
struct Scripted(Vec<f64>);

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.0.remove(0)
        }
    }
}

#[test]
fn cad_exchange_file_is_classified_with_high_confidence() {
    let classifier = DomainClassifier::new();
    let mut rng = SeededRandom::new(2024);
    for _ in 0..200 {
        let result = classifier.classify_asset("engine_assembly.step", "step", &mut rng);
        assert_eq!(result.domain, Domain::Cad);
        assert!((0.95..=0.99).contains(&result.confidence), "{}", result.confidence);
        assert!(subtypes_of(Domain::Cad).contains(&result.subtype.as_deref().unwrap()));
    }
}

#[test]
fn rule_order_breaks_ties_in_favour_of_vegetation() {
    let classifier = DomainClassifier::new();
    let mut rng = SeededRandom::new(8);
    for _ in 0..200 {
        let result = classifier.classify_asset("forest_scene.gltf", "gltf", &mut rng);
        assert_eq!(result.domain, Domain::Vegetation);
        assert!((0.85..0.95).contains(&result.confidence), "{}", result.confidence);
    }
}

#[test]
fn strong_keyword_lands_in_the_middle_band() {
    let classifier = DomainClassifier::new();
    let mut rng = SeededRandom::new(8);
    for _ in 0..200 {
        let result = classifier.classify_asset("oak_tree.gltf", "gltf", &mut rng);
        assert_eq!(result.domain, Domain::Vegetation);
        assert!((0.85..0.95).contains(&result.confidence), "{}", result.confidence);
    }
}

#[test]
fn plain_interchange_file_is_a_game_asset() {
    let classifier = DomainClassifier::new();
    let mut rng = SeededRandom::new(99);
    for _ in 0..200 {
        let result = classifier.classify_asset("model.glb", "glb", &mut rng);
        assert_eq!(result.domain, Domain::Gaming);
        assert!((0.60..0.80).contains(&result.confidence), "{}", result.confidence);
    }
}

#[test]
fn extreme_draws_respect_band_limits() {
    let classifier = DomainClassifier::new();
    let mut top = Scripted(vec![1.0 - f64::EPSILON]);
    let confidence = classifier.confidence("game_level.glb", "glb", &mut top);
    assert!(confidence < 0.95);

    let mut bottom = Scripted(vec![0.0]);
    assert_eq!(classifier.confidence("model.glb", "glb", &mut bottom), 0.60);
}

#[test]
fn keyword_outside_the_strong_list_still_uses_the_strong_band() {
    let classifier = DomainClassifier::new();
    assert_eq!(classifier.classify("office_chair.obj", "obj"), Domain::Furniture);
    assert_eq!(classifier.band("office_chair.obj", "obj"), ConfidenceBand::STRONG_KEYWORD);

    let mut rng = SeededRandom::new(5);
    for _ in 0..200 {
        let confidence = classifier.confidence("archive.obj", "obj", &mut rng);
        assert!((0.85..0.95).contains(&confidence), "{confidence}");
    }
    assert_eq!(classifier.classify("archive.obj", "obj"), Domain::Building);
}

#[test]
fn format_only_verdicts_use_the_weak_band() {
    let classifier = DomainClassifier::new();
    assert_eq!(classifier.band("scan_042.obj", "obj"), ConfidenceBand::WEAK);
    assert_eq!(classifier.band("notes.txt", "txt"), ConfidenceBand::WEAK);
}

#[test]
fn same_seed_gives_same_classification() {
    let classifier = DomainClassifier::new();
    let names = [
        ("engine_assembly.step", "step"),
        ("forest_scene.gltf", "gltf"),
        ("character_rig.fbx", "fbx"),
        ("model.glb", "glb"),
        ("notes.txt", "txt"),
    ];

    let run = |seed| {
        let mut rng = SeededRandom::new(seed);
        names
            .iter()
            .map(|(file, ext)| classifier.classify_asset(file, ext, &mut rng))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(17), run(17));
}

#[test]
fn classification_is_total() {
    let classifier = DomainClassifier::new();
    let mut rng = SeededRandom::new(0);
    for (file, ext) in [
        ("", ""),
        ("ÜBER_MODELL.FBX", "FBX"),
        ("...", ""),
        ("a.b.c.d", "d"),
        ("spaces in name .obj", "obj"),
    ] {
        let result = classifier.classify_asset(file, ext, &mut rng);
        assert!((0.0..=1.0).contains(&result.confidence));
        assert_eq!(result.subtype.is_none(), result.domain == Domain::Unknown);
    }
}

#[test]
fn every_domain_gets_four_tools() {
    let engine = ToolRecommendationEngine::new();
    for domain in Domain::ALL {
        assert_eq!(engine.recommended_tools(domain).len(), 4);
        assert!(!engine.recommended_workflow(domain).is_empty());
    }
}
