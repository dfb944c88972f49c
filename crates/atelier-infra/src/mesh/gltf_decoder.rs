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

//! Decodes glTF 2.0 assets, both `.gltf` JSON and `.glb` containers.
//!
//! Bounds come from the `min`/`max` of each primitive's `POSITION` accessor,
//! which the format requires, so buffer payloads never need to be resolved.
//! Every node of the active scene is reported with its world-space bounds;
//! nodes without a mesh report [`Aabb::INVALID`].

use super::{parse_error, MeshDecoder};
use atelier_core::analysis::GeometryStats;
use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, LoadedNode, LoadedScene};
use atelier_core::math::{Aabb, Vec3};
use gltf::mesh::Mode;
use gltf::Semantic;
use std::collections::HashSet;

type Mat4 = [[f32; 4]; 4];

const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Decodes glTF documents with the `gltf` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct GltfDecoder;

impl MeshDecoder for GltfDecoder {
    fn format_name(&self) -> &'static str {
        "gltf"
    }

    fn decode(&self, request: &LoadRequest) -> Result<LoadedScene, LoadError> {
        let gltf = gltf::Gltf::from_slice(&request.bytes)
            .map_err(|e| parse_error(request, format!("failed to parse glTF: {e}")))?;
        let document = &gltf.document;

        let mut walker = Walker::default();
        for root in root_nodes(document) {
            walker.visit(root, &IDENTITY);
        }

        let mut stats = walker.stats;
        stats.material_count = match document.materials().count() {
            0 if walker.has_primitives => 1,
            count => count as u32,
        };
        stats.has_animations = document.animations().next().is_some();
        stats.has_skeleton = document.skins().next().is_some();

        log::debug!(
            "Decoded glTF '{}': {} node(s), {} vertices.",
            request.filename,
            walker.nodes.len(),
            stats.vertex_count
        );
        Ok(LoadedScene {
            nodes: walker.nodes,
            stats: Some(stats),
        })
    }
}

/// The roots of the default scene, else the first scene, else every node
/// that is nobody's child.
fn root_nodes(document: &gltf::Document) -> Vec<gltf::Node<'_>> {
    if let Some(scene) = document.default_scene().or_else(|| document.scenes().next()) {
        return scene.nodes().collect();
    }
    let children: HashSet<usize> = document
        .nodes()
        .flat_map(|node| node.children().map(|child| child.index()))
        .collect();
    document
        .nodes()
        .filter(|node| !children.contains(&node.index()))
        .collect()
}

#[derive(Default)]
struct Walker {
    nodes: Vec<LoadedNode>,
    stats: GeometryStats,
    has_primitives: bool,
}

impl Walker {
    fn visit(&mut self, node: gltf::Node<'_>, parent: &Mat4) {
        let world = mul(parent, &node.transform().matrix());

        let mut bounds = Aabb::INVALID;
        let mut mesh_name = None;
        if let Some(mesh) = node.mesh() {
            mesh_name = mesh.name().map(str::to_owned);
            for primitive in mesh.primitives() {
                self.has_primitives = true;
                let local = primitive.bounding_box();
                bounds = bounds.merge(&transform_box(&world, local.min, local.max));

                let vertices = primitive
                    .get(&Semantic::Positions)
                    .map_or(0, |accessor| accessor.count());
                let elements = primitive.indices().map_or(vertices, |idx| idx.count());
                self.stats.vertex_count += vertices as u64;
                self.stats.face_count += face_count(primitive.mode(), elements) as u64;
            }
        }

        let name = node
            .name()
            .map(str::to_owned)
            .or(mesh_name)
            .unwrap_or_default();
        let id = self.nodes.len() as u64 + 1;
        self.nodes.push(LoadedNode::new(id, name, bounds));

        for child in node.children() {
            self.visit(child, &world);
        }
    }
}

fn face_count(mode: Mode, elements: usize) -> usize {
    match mode {
        Mode::Triangles => elements / 3,
        Mode::TriangleStrip | Mode::TriangleFan => elements.saturating_sub(2),
        Mode::Points | Mode::Lines | Mode::LineLoop | Mode::LineStrip => 0,
    }
}

/// Column-major `a * b`.
fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [[0.0; 4]; 4];
    for (col, out_col) in out.iter_mut().enumerate() {
        for (row, cell) in out_col.iter_mut().enumerate() {
            *cell = (0..4).map(|k| a[k][row] * b[col][k]).sum();
        }
    }
    out
}

fn transform_point(m: &Mat4, p: [f32; 3]) -> Vec3 {
    let row = |r: usize| m[0][r] * p[0] + m[1][r] * p[1] + m[2][r] * p[2] + m[3][r];
    Vec3::new(row(0), row(1), row(2))
}

fn transform_box(m: &Mat4, min: [f32; 3], max: [f32; 3]) -> Aabb {
    let corners: Vec<Vec3> = (0..8)
        .map(|i| {
            let pick = |axis: usize| if i & (1 << axis) == 0 { min[axis] } else { max[axis] };
            transform_point(m, [pick(0), pick(1), pick(2)])
        })
        .collect();
    Aabb::from_points(&corners).unwrap_or(Aabb::INVALID)
}
