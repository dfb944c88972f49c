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

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Where the orbit camera looks and how far away it sits.
///
/// The renderer applies this to its own camera; the studio only stores the
/// latest value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFraming {
    /// The point the camera orbits around.
    pub target: Vec3,
    /// Distance from the target.
    pub radius: f32,
}

impl CameraFraming {
    /// Framing of the empty viewport: looking at the origin from 10 units away.
    pub const DEFAULT: Self = Self {
        target: Vec3::ZERO,
        radius: 10.0,
    };

    /// Creates a framing from a target and a radius.
    pub const fn new(target: Vec3, radius: f32) -> Self {
        Self { target, radius }
    }
}

impl Default for CameraFraming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
