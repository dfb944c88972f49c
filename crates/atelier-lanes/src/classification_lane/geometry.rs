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

use atelier_core::analysis::GeometryStats;
use atelier_core::domain::Domain;
use atelier_core::random::RandomSource;

/// Produces placeholder statistics for an asset whose loader could not
/// measure its geometry.
///
/// Counts are random (vertices in `10_000..510_000`, faces in
/// `5_000..255_000`, materials in `1..=20`). Animation is assumed for
/// characters and game assets, a skeleton for characters only.
pub fn estimate_geometry(domain: Domain, rng: &mut dyn RandomSource) -> GeometryStats {
    let vertex_count = (rng.next_unit() * 500_000.0).floor() as u64 + 10_000;
    let face_count = (rng.next_unit() * 250_000.0).floor() as u64 + 5_000;
    let material_count = (rng.next_unit() * 20.0).floor() as u32 + 1;

    GeometryStats {
        vertex_count,
        face_count,
        material_count,
        has_animations: matches!(domain, Domain::Character | Domain::Gaming),
        has_skeleton: domain == Domain::Character,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::random::SeededRandom;

    #[test]
    fn counts_stay_in_range() {
        let mut rng = SeededRandom::new(11);
        for domain in Domain::ALL {
            let stats = estimate_geometry(domain, &mut rng);
            assert!((10_000..510_000).contains(&stats.vertex_count));
            assert!((5_000..255_000).contains(&stats.face_count));
            assert!((1..=20).contains(&stats.material_count));
        }
    }

    #[test]
    fn rig_flags_follow_the_domain() {
        let mut rng = SeededRandom::new(5);
        let character = estimate_geometry(Domain::Character, &mut rng);
        assert!(character.has_animations && character.has_skeleton);

        let gaming = estimate_geometry(Domain::Gaming, &mut rng);
        assert!(gaming.has_animations && !gaming.has_skeleton);

        let cad = estimate_geometry(Domain::Cad, &mut rng);
        assert!(!cad.has_animations && !cad.has_skeleton);
    }
}
