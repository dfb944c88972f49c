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

//! Concrete implementations of the studio's loading boundary.
//!
//! [`MeshSceneLoader`] decodes OBJ (via `tobj`) and glTF/GLB (via `gltf`) on
//! the blocking pool and keeps the created nodes in a [`SceneGraph`].

#![warn(missing_docs)]

pub mod loader;
pub mod mesh;
pub mod scene_graph;

pub use loader::MeshSceneLoader;
pub use mesh::{EmptyDecoder, GltfDecoder, MeshDecoder, ObjDecoder};
pub use scene_graph::SceneGraph;
