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

//! Groups the data structures that describe what is currently in the scene.
//!
//! The object registry is a forest of [`SceneObject`]s: each object owns its
//! children outright and nothing points back up the tree. The
//! [`CameraFraming`] is the view target and distance derived from the loaded
//! asset's bounds.

mod framing;
mod object;

pub use framing::*;
pub use object::*;
