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

//! The public-facing API of the studio.
//!
//! Most applications only need [`Studio`] and [`init_logging`]; the
//! [`prelude`] re-exports the types that come with them.

#![warn(missing_docs)]

mod studio;

pub use studio::{Studio, StudioReport};

/// Installs `env_logger`, honoring `RUST_LOG` and defaulting to `info`.
///
/// Returns an error when a logger is already installed.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).try_init()
}

/// Commonly used types.
pub mod prelude {
    pub use crate::{init_logging, Studio, StudioReport};
    pub use atelier_agents::LoadPhase;
    pub use atelier_core::{
        AssetId, AssetRef, AssetSource, ByteSource, Domain, LoadError, ModelAnalysis,
        StudioConfig,
    };
    pub use atelier_core::event::StudioEvent;
    pub use atelier_core::scene::{CameraFraming, SceneObject, SceneObjectId};
    pub use atelier_data::{DomainConfig, StudioState, ToolConfig};
}
