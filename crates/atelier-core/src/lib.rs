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

//! # Atelier Core
//!
//! Foundational crate of the studio: math primitives, the domain and analysis
//! records, the scene-object forest, asset identity, and the contracts
//! (`RandomSource`, `SceneLoader`) that the higher crates implement or
//! consume.

#![warn(missing_docs)]

pub mod analysis;
pub mod asset;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod loader;
pub mod math;
pub mod random;
pub mod scene;

pub use analysis::{Classification, GeometryStats, ModelAnalysis};
pub use asset::{AssetId, AssetRef, AssetSource, ByteSource};
pub use config::StudioConfig;
pub use domain::Domain;
pub use error::{ConfigError, LoadError};
pub use loader::{LoadRequest, LoadedNode, LoadedScene, SceneLoader};
pub use random::{RandomSource, SeededRandom};
