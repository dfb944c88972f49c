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

//! The static mapping from each domain to its tools and workflows.
//!
//! [`DomainConfigRegistry::global`] is built once, lazily, on first use and
//! is read-only afterwards. Lookups never fail: anything unresolved falls
//! back to the `unknown` configuration.

mod config;
mod tables;

pub use config::*;

use atelier_core::domain::Domain;
use std::collections::HashMap;
use std::sync::OnceLock;

static GLOBAL: OnceLock<DomainConfigRegistry> = OnceLock::new();

/// Read-only lookup table of [`DomainConfig`]s.
#[derive(Debug, Clone)]
pub struct DomainConfigRegistry {
    configs: HashMap<Domain, DomainConfig>,
}

impl DomainConfigRegistry {
    /// Builds a registry holding the built-in configuration of every domain.
    pub fn new() -> Self {
        let configs = tables::BUILTIN
            .iter()
            .map(|config| (config.id, *config))
            .collect();
        Self { configs }
    }

    /// The process-wide registry.
    pub fn global() -> &'static DomainConfigRegistry {
        GLOBAL.get_or_init(|| {
            log::debug!("Domain configuration registry initialized.");
            Self::new()
        })
    }

    /// Returns the configuration of `domain`, or the `unknown` configuration
    /// if it has none.
    pub fn get(&self, domain: Domain) -> &DomainConfig {
        self.configs
            .get(&domain)
            .or_else(|| self.configs.get(&Domain::Unknown))
            .unwrap_or(&tables::FALLBACK)
    }

    /// Looks up a configuration by its raw identifier.
    ///
    /// Identifiers are matched case-insensitively; anything unrecognized
    /// resolves to the `unknown` configuration.
    pub fn get_by_id(&self, id: &str) -> &DomainConfig {
        self.get(Domain::from_id_or_unknown(id))
    }

    /// All domains, in declaration order.
    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        Domain::ALL
            .into_iter()
            .filter(|domain| self.configs.contains_key(domain))
    }

    /// Every configuration, in domain declaration order.
    pub fn configs(&self) -> impl Iterator<Item = &DomainConfig> + '_ {
        Domain::ALL
            .iter()
            .filter_map(|domain| self.configs.get(domain))
    }
}

impl Default for DomainConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
