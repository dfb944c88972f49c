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

//! Turns a file's identity into a domain judgment.
//!
//! There is no trained model behind this lane: the domain comes from an
//! ordered rule cascade over the filename and extension, and the confidence
//! and subtype are drawn from a [`RandomSource`]. A real model can replace
//! [`DomainClassifier`] without changing its callers.

mod confidence;
mod geometry;
mod rules;
mod subtypes;

pub use confidence::{band_for, ConfidenceBand, STRONG_KEYWORDS};
pub use geometry::estimate_geometry;
pub use rules::{ClassificationRule, CAD_EXTENSIONS, DEFAULT_RULES};
pub use subtypes::subtypes_of;

use atelier_core::analysis::Classification;
use atelier_core::domain::Domain;
use atelier_core::random::RandomSource;
use std::borrow::Cow;

/// The rule-based domain classifier.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    rules: Cow<'static, [ClassificationRule]>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainClassifier {
    /// Creates a classifier using [`DEFAULT_RULES`].
    pub fn new() -> Self {
        Self {
            rules: Cow::Borrowed(DEFAULT_RULES),
        }
    }

    /// Creates a classifier with a custom cascade.
    pub fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self {
            rules: Cow::Owned(rules),
        }
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Returns the domain of the first matching rule, or `unknown`.
    ///
    /// Never fails; matching ignores case.
    pub fn classify(&self, filename: &str, extension: &str) -> Domain {
        let (filename, extension) = normalize(filename, extension);
        self.first_match(&filename, &extension)
            .map_or(Domain::Unknown, |rule| rule.domain)
    }

    /// The band a confidence score for these inputs is drawn from.
    pub fn band(&self, filename: &str, extension: &str) -> ConfidenceBand {
        let (filename, extension) = normalize(filename, extension);
        let named = self
            .first_match(&filename, &extension)
            .is_some_and(|rule| rule.matches_name(&filename));
        band_for(&filename, &extension, named)
    }

    /// Draws a confidence score from the band the inputs fall into.
    pub fn confidence(
        &self,
        filename: &str,
        extension: &str,
        rng: &mut dyn RandomSource,
    ) -> f64 {
        self.band(filename, extension).sample(rng.next_unit())
    }

    fn first_match(&self, filename: &str, extension: &str) -> Option<&ClassificationRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(filename, extension))
    }

    /// Picks a subtype uniformly from the domain's list.
    ///
    /// Only the domain drives the pick today; `unknown` never has a subtype.
    pub fn subtype(
        &self,
        domain: Domain,
        _filename: &str,
        rng: &mut dyn RandomSource,
    ) -> Option<&'static str> {
        let candidates = subtypes_of(domain);
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.next_index(candidates.len())])
    }

    /// Runs the whole classification for one asset.
    pub fn classify_asset(
        &self,
        filename: &str,
        extension: &str,
        rng: &mut dyn RandomSource,
    ) -> Classification {
        let domain = self.classify(filename, extension);
        let confidence = self.confidence(filename, extension, rng);
        let subtype = self.subtype(domain, filename, rng).map(str::to_string);
        log::debug!(
            "Classified '{filename}' as {domain} (confidence {confidence:.3}, subtype {subtype:?})."
        );
        Classification {
            domain,
            confidence,
            subtype,
        }
    }
}

fn normalize(filename: &str, extension: &str) -> (String, String) {
    (
        filename.to_lowercase(),
        extension.trim_start_matches('.').to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::random::SeededRandom;

    fn classify(filename: &str, extension: &str) -> Domain {
        DomainClassifier::new().classify(filename, extension)
    }

    #[test]
    fn cad_extensions_win_over_everything() {
        assert_eq!(classify("tree_house.step", "step"), Domain::Cad);
        assert_eq!(classify("bracket.SLDPRT", "SLDPRT"), Domain::Cad);
    }

    #[test]
    fn building_by_extension_or_keyword() {
        assert_eq!(classify("site.ifc", "ifc"), Domain::Building);
        assert_eq!(classify("Beach_House.fbx", "fbx"), Domain::Building);
        assert_eq!(classify("archive.obj", "obj"), Domain::Building);
    }

    #[test]
    fn keyword_rules_in_order() {
        assert_eq!(classify("avatar_v2.glb", "glb"), Domain::Character);
        assert_eq!(classify("truck.glb", "glb"), Domain::Cad);
        assert_eq!(classify("forest_scene.gltf", "gltf"), Domain::Vegetation);
        assert_eq!(classify("sword_prop.fbx", "fbx"), Domain::Gaming);
        assert_eq!(classify("summer_dress.obj", "obj"), Domain::Textile);
        assert_eq!(classify("office_chair.obj", "obj"), Domain::Furniture);
        assert_eq!(classify("water_bottle.obj", "obj"), Domain::Product);
    }

    #[test]
    fn interchange_formats_default_to_gaming() {
        assert_eq!(classify("model.glb", "glb"), Domain::Gaming);
        assert_eq!(classify("mesh.OBJ", "OBJ"), Domain::Gaming);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(classify("scan.ply", "ply"), Domain::Unknown);
        assert_eq!(classify("", ""), Domain::Unknown);
        assert_eq!(classify("no_extension", ""), Domain::Unknown);
    }

    #[test]
    fn leading_dot_in_extension_is_ignored() {
        assert_eq!(classify("part.stp", ".STP"), Domain::Cad);
    }

    #[test]
    fn custom_rules_replace_the_cascade() {
        let classifier = DomainClassifier::with_rules(vec![ClassificationRule {
            domain: Domain::Medical,
            extensions: &["dcm"],
            keywords: &["skull"],
        }]);
        assert_eq!(classifier.classify("skull.obj", "obj"), Domain::Medical);
        assert_eq!(classifier.classify("model.glb", "glb"), Domain::Unknown);
    }

    #[test]
    fn keyword_verdicts_use_the_strong_band() {
        let classifier = DomainClassifier::new();
        assert_eq!(classifier.band("forest_scene.gltf", "gltf"), ConfidenceBand::STRONG_KEYWORD);
        assert_eq!(classifier.band("Office_Chair.OBJ", "OBJ"), ConfidenceBand::STRONG_KEYWORD);
        assert_eq!(classifier.band("model.glb", "glb"), ConfidenceBand::WEAK);
        assert_eq!(classifier.band("site.ifc", "ifc"), ConfidenceBand::WEAK);
        assert_eq!(classifier.band("engine.step", "step"), ConfidenceBand::EXCLUSIVE_FORMAT);
    }

    #[test]
    fn unknown_has_no_subtype() {
        let mut rng = SeededRandom::new(1);
        let classifier = DomainClassifier::new();
        assert_eq!(classifier.subtype(Domain::Unknown, "x", &mut rng), None);
        let subtype = classifier.subtype(Domain::Jewelry, "x", &mut rng).unwrap();
        assert!(subtypes_of(Domain::Jewelry).contains(&subtype));
    }
}
