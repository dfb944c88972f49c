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

use super::rules::CAD_EXTENSIONS;

/// A range confidence scores are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    /// Lowest possible score.
    pub low: f64,
    /// Upper limit of the band.
    pub high: f64,
    /// Whether `high` itself can be returned.
    pub inclusive: bool,
}

impl ConfidenceBand {
    /// Scores for extensions only CAD tools produce: `[0.95, 0.99]`.
    pub const EXCLUSIVE_FORMAT: Self = Self {
        low: 0.95,
        high: 0.99,
        inclusive: true,
    };

    /// Scores for filenames carrying a strong keyword: `[0.85, 0.95)`.
    pub const STRONG_KEYWORD: Self = Self {
        low: 0.85,
        high: 0.95,
        inclusive: false,
    };

    /// Scores for everything else: `[0.60, 0.80)`.
    pub const WEAK: Self = Self {
        low: 0.60,
        high: 0.80,
        inclusive: false,
    };

    /// Maps `unit`, a value in `[0, 1)`, into the band.
    pub fn sample(&self, unit: f64) -> f64 {
        let value = (self.low + unit.clamp(0.0, 1.0) * (self.high - self.low)).max(self.low);
        if self.inclusive {
            value.min(self.high)
        } else if value >= self.high {
            self.high - f64::EPSILON
        } else {
            value
        }
    }

    /// Whether `value` lies inside the band.
    pub fn contains(&self, value: f64) -> bool {
        if self.inclusive {
            (self.low..=self.high).contains(&value)
        } else {
            (self.low..self.high).contains(&value)
        }
    }
}

/// Filename fragments that earn the strong-keyword band.
pub const STRONG_KEYWORDS: &[&str] = &["character", "building", "car", "tree", "game"];

/// Picks the band for a lowercased filename and extension.
///
/// `named` tells whether the domain was decided by a filename keyword; such
/// verdicts share the strong-keyword band even when the keyword is not in
/// [`STRONG_KEYWORDS`]. So `forest_scene.gltf` (vegetation via "forest") and
/// `office_chair.obj` (furniture via "chair") both land in
/// [`ConfidenceBand::STRONG_KEYWORD`]; only verdicts reached by extension
/// alone, or no verdict at all, fall to [`ConfidenceBand::WEAK`].
pub fn band_for(filename: &str, extension: &str, named: bool) -> ConfidenceBand {
    if CAD_EXTENSIONS.contains(&extension) {
        ConfidenceBand::EXCLUSIVE_FORMAT
    } else if named || STRONG_KEYWORDS.iter().any(|keyword| filename.contains(keyword)) {
        ConfidenceBand::STRONG_KEYWORD
    } else {
        ConfidenceBand::WEAK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rule_verdicts_share_the_strong_band() {
        assert!(!STRONG_KEYWORDS.iter().any(|k| "office_chair".contains(k)));
        assert_eq!(
            band_for("office_chair.obj", "obj", true),
            ConfidenceBand::STRONG_KEYWORD
        );
        assert_eq!(band_for("office_chair.obj", "obj", false), ConfidenceBand::WEAK);
    }

    #[test]
    fn half_open_bands_never_reach_their_limit() {
        let band = ConfidenceBand::STRONG_KEYWORD;
        assert!(band.sample(1.0) < 0.95);
        assert!(band.contains(band.sample(0.999_999_999_999)));
        assert!(approx::abs_diff_eq!(band.sample(0.0), 0.85));
    }

    #[test]
    fn inclusive_band_reaches_its_limit() {
        let band = ConfidenceBand::EXCLUSIVE_FORMAT;
        assert!(approx::abs_diff_eq!(band.sample(1.0), 0.99));
        assert!(band.contains(0.99));
    }

    #[test]
    fn band_selection_order() {
        assert_eq!(band_for("car.step", "step", true), ConfidenceBand::EXCLUSIVE_FORMAT);
        assert_eq!(band_for("my_game.obj", "obj", false), ConfidenceBand::STRONG_KEYWORD);
        assert_eq!(band_for("sofa.obj", "obj", true), ConfidenceBand::STRONG_KEYWORD);
        assert_eq!(band_for("scan.ply", "ply", false), ConfidenceBand::WEAK);
    }
}
