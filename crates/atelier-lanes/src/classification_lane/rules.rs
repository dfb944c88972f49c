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

/// A single step of the classification cascade.
///
/// A rule matches when the extension is one of `extensions`, or when the
/// filename contains one of `keywords`. Both inputs are compared lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// The domain assigned when the rule matches.
    pub domain: Domain,
    /// Extensions (lowercase, no dot) that trigger the rule.
    pub extensions: &'static [&'static str],
    /// Filename fragments (lowercase) that trigger the rule.
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    /// Tests the rule against an already lowercased filename and extension.
    pub fn matches(&self, filename: &str, extension: &str) -> bool {
        self.extensions.contains(&extension) || self.matches_name(filename)
    }

    /// Whether one of the keywords occurs in the lowercased filename.
    pub fn matches_name(&self, filename: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| filename.contains(keyword))
    }
}

/// Extensions that only CAD packages produce.
pub const CAD_EXTENSIONS: &[&str] = &["step", "stp", "iges", "igs", "catpart", "sldprt", "prt"];

/// The built-in cascade. First match wins; anything else is `unknown`.
pub const DEFAULT_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        domain: Domain::Cad,
        extensions: CAD_EXTENSIONS,
        keywords: &[],
    },
    ClassificationRule {
        domain: Domain::Building,
        extensions: &["ifc", "rvt", "dwg", "dxf"],
        keywords: &["building", "house", "arch"],
    },
    ClassificationRule {
        domain: Domain::Character,
        extensions: &[],
        keywords: &["character", "human", "person", "avatar", "body", "rig"],
    },
    ClassificationRule {
        domain: Domain::Cad,
        extensions: &[],
        keywords: &["car", "vehicle", "truck", "auto"],
    },
    ClassificationRule {
        domain: Domain::Vegetation,
        extensions: &[],
        keywords: &["tree", "forest", "plant", "vegetation"],
    },
    ClassificationRule {
        domain: Domain::Gaming,
        extensions: &[],
        keywords: &["game", "prop", "weapon", "armor"],
    },
    ClassificationRule {
        domain: Domain::Textile,
        extensions: &[],
        keywords: &["cloth", "dress", "shirt", "garment"],
    },
    ClassificationRule {
        domain: Domain::Furniture,
        extensions: &[],
        keywords: &["chair", "table", "sofa", "furniture"],
    },
    ClassificationRule {
        domain: Domain::Product,
        extensions: &[],
        keywords: &["product", "packaging", "bottle", "consumer"],
    },
    ClassificationRule {
        domain: Domain::Gaming,
        extensions: &["fbx", "gltf", "glb", "obj"],
        keywords: &[],
    },
];
