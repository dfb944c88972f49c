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

//! Tunables of the studio, stored as RON.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Names of the helper objects that survive every scene reset.
pub const DEFAULT_PERMANENT_HELPERS: [&str; 4] = ["grid", "xAxis", "yAxis", "zAxis"];

/// Name of the proxy node a loader may create as the parent of an asset.
pub const DEFAULT_ROOT_PROXY_NAME: &str = "__root__";

/// Runtime configuration of the lifecycle.
///
/// Every field has a default, so a RON file only needs to list what it
/// overrides:
///
/// ```
/// use atelier_core::config::StudioConfig;
///
/// let config = StudioConfig::from_ron_str("(progress_step: 5, seed: Some(42))").unwrap();
/// assert_eq!(config.progress_step, 5);
/// assert_eq!(config.progress_cap, 90);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Period of the simulated progress timer, in milliseconds.
    pub progress_interval_ms: u64,
    /// Percentage added on every tick.
    pub progress_step: u8,
    /// Highest value the timer may reach before the load completes.
    pub progress_cap: u8,
    /// Camera radius as a multiple of the bounding-box diagonal.
    pub framing_margin: f32,
    /// Object names that are never cleared nor counted as asset geometry.
    pub permanent_helpers: Vec<String>,
    /// Name of the loader's root proxy node, ignored when computing bounds.
    pub root_proxy_name: String,
    /// Seed of the classification random source. Entropy when absent.
    pub seed: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: 200,
            progress_step: 10,
            progress_cap: 90,
            framing_margin: 1.5,
            permanent_helpers: DEFAULT_PERMANENT_HELPERS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            root_proxy_name: DEFAULT_ROOT_PROXY_NAME.to_string(),
            seed: None,
        }
    }
}

impl StudioConfig {
    /// Parses and validates a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded studio configuration from '{}'.", path.display());
        Self::from_ron_str(&text)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "progress_interval_ms must be greater than zero".into(),
            ));
        }
        if self.progress_step == 0 {
            return Err(ConfigError::Invalid(
                "progress_step must be greater than zero".into(),
            ));
        }
        if !(1..=99).contains(&self.progress_cap) {
            return Err(ConfigError::Invalid(format!(
                "progress_cap must be within 1..=99, got {}",
                self.progress_cap
            )));
        }
        if !self.framing_margin.is_finite() || self.framing_margin <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "framing_margin must be positive, got {}",
                self.framing_margin
            )));
        }
        Ok(())
    }

    /// The progress timer period.
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    /// Whether `name` belongs to a permanent helper object.
    pub fn is_permanent_helper(&self, name: &str) -> bool {
        self.permanent_helpers.iter().any(|helper| helper == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_studio_behaviour() {
        let config = StudioConfig::default();
        assert_eq!(config.progress_interval(), Duration::from_millis(200));
        assert_eq!(config.progress_step, 10);
        assert_eq!(config.progress_cap, 90);
        assert!(approx::abs_diff_eq!(config.framing_margin, 1.5));
        assert!(config.is_permanent_helper("xAxis"));
        assert!(!config.is_permanent_helper("Sphere"));
        assert_eq!(config.root_proxy_name, "__root__");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = StudioConfig::from_ron_str("(progress_cap: 80, framing_margin: 2.0)").unwrap();
        assert_eq!(config.progress_cap, 80);
        assert_eq!(config.progress_step, 10);
        assert!(approx::abs_diff_eq!(config.framing_margin, 2.0));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn serialized_default_parses_back() {
        let text = ron::to_string(&StudioConfig::default()).unwrap();
        assert_eq!(StudioConfig::from_ron_str(&text).unwrap(), StudioConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        for text in [
            "(progress_interval_ms: 0)",
            "(progress_step: 0)",
            "(progress_cap: 0)",
            "(progress_cap: 100)",
            "(framing_margin: 0.0)",
            "(framing_margin: -1.0)",
        ] {
            let err = StudioConfig::from_ron_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text} -> {err}");
        }
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = StudioConfig::from_ron_str("(progress_step: \"ten\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(seed: Some(7), permanent_helpers: [\"grid\"])").unwrap();
        let config = StudioConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.permanent_helpers, vec!["grid".to_string()]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StudioConfig::load(dir.path().join("studio.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
