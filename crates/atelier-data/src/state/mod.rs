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

//! The single state container of the studio.
//!
//! [`StudioState`] holds everything the presentation layer reads: the latest
//! analysis, the object registry, selection, load progress, viewport and
//! layout settings. It is a plain owned value; the lifecycle manager owns one
//! and is its only writer while an asset loads.

mod studio;
mod viewport;

pub use studio::StudioState;
pub use viewport::{PanelLayout, RenderMode, ShadingMode, ViewportSettings, ViewportUpdate};
