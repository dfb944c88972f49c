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

//! Defines the closed set of asset domains the studio recognizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category an imported asset belongs to.
///
/// This is a closed set of fourteen named domains plus [`Domain::Unknown`].
/// It is never extended at runtime; every lookup keyed by a domain has a
/// defined answer for each variant.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// BIM, architectural models, structural engineering.
    Building,
    /// Character models, rigging, animation.
    Character,
    /// CAD models, mechanical parts, assemblies, vehicles.
    Cad,
    /// Trees, plants, forest environments.
    Vegetation,
    /// Clothing, fabrics, fashion design.
    Textile,
    /// Marine environments, underwater scenes.
    Ocean,
    /// Mining operations, geological models.
    Mining,
    /// Aircraft, spacecraft, satellites.
    Aerospace,
    /// Game assets, real-time rendering.
    Gaming,
    /// Visual effects, cinematography.
    Film,
    /// Medical imaging, anatomical models.
    Medical,
    /// Consumer products, industrial design.
    Product,
    /// Furniture design, interior objects.
    Furniture,
    /// Jewelry design, gemstones.
    Jewelry,
    /// No confident classification; general editing tools.
    #[default]
    Unknown,
}

impl Domain {
    /// Every domain, in declaration order.
    pub const ALL: [Domain; 15] = [
        Domain::Building,
        Domain::Character,
        Domain::Cad,
        Domain::Vegetation,
        Domain::Textile,
        Domain::Ocean,
        Domain::Mining,
        Domain::Aerospace,
        Domain::Gaming,
        Domain::Film,
        Domain::Medical,
        Domain::Product,
        Domain::Furniture,
        Domain::Jewelry,
        Domain::Unknown,
    ];

    /// Returns the stable string identifier of the domain.
    pub const fn id(self) -> &'static str {
        match self {
            Domain::Building => "building",
            Domain::Character => "character",
            Domain::Cad => "cad",
            Domain::Vegetation => "vegetation",
            Domain::Textile => "textile",
            Domain::Ocean => "ocean",
            Domain::Mining => "mining",
            Domain::Aerospace => "aerospace",
            Domain::Gaming => "gaming",
            Domain::Film => "film",
            Domain::Medical => "medical",
            Domain::Product => "product",
            Domain::Furniture => "furniture",
            Domain::Jewelry => "jewelry",
            Domain::Unknown => "unknown",
        }
    }

    /// Looks a domain up by its identifier, case-insensitively.
    ///
    /// Returns `None` for identifiers outside the closed set. Callers that need
    /// a total mapping should use [`Domain::from_id_or_unknown`].
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|domain| domain.id().eq_ignore_ascii_case(id))
    }

    /// Total variant of [`Domain::from_id`]: unrecognized identifiers map to
    /// [`Domain::Unknown`].
    pub fn from_id_or_unknown(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Domain::Unknown)
    }

    /// Returns `true` for [`Domain::Unknown`].
    pub const fn is_unknown(self) -> bool {
        matches!(self, Domain::Unknown)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
