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

//! Provides the small set of 3D math primitives the studio needs.
//!
//! The lifecycle only reasons about world-space extents: it merges per-node
//! bounds into one [`Aabb`] and derives a camera framing from it. Anything
//! heavier (matrices, quaternions) belongs to the rendering collaborator.

// --- Declare Sub-Modules ---

pub mod geometry;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::geometry::Aabb;
pub use self::vector::Vec3;
