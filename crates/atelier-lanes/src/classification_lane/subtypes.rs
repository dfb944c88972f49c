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

/// The finer-grained labels available within `domain`.
///
/// `unknown` has none.
pub fn subtypes_of(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Building => &["Residential", "Commercial", "Industrial", "Infrastructure"],
        Domain::Character => &["Humanoid", "Stylized", "Realistic", "Creature"],
        Domain::Cad => &["Assembly", "Part", "Drawing", "Sheet Metal"],
        Domain::Vegetation => &["Deciduous", "Coniferous", "Tropical", "Ground Cover"],
        Domain::Textile => &["Dress", "Casual", "Sportswear", "Formal"],
        Domain::Ocean => &["Surface", "Underwater", "Coastal", "Deep Sea"],
        Domain::Mining => &["Open Pit", "Underground", "Processing", "Survey"],
        Domain::Aerospace => &["Aircraft", "Spacecraft", "Satellite", "UAV"],
        Domain::Gaming => &["Character", "Environment", "Prop", "Vehicle"],
        Domain::Film => &["Character", "Set", "Prop", "Effect"],
        Domain::Medical => &["Anatomical", "Implant", "Scan", "Prosthetic"],
        Domain::Product => &["Consumer", "Electronics", "Packaging", "Tool"],
        Domain::Furniture => &["Seating", "Table", "Storage", "Decor"],
        Domain::Jewelry => &["Ring", "Necklace", "Earring", "Bracelet"],
        Domain::Unknown => &[],
    }
}
