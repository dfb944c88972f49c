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

//! Decodes Wavefront OBJ files.

use super::{parse_error, MeshDecoder};
use atelier_core::analysis::GeometryStats;
use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, LoadedNode, LoadedScene};
use atelier_core::math::{Aabb, Vec3};
use std::collections::HashSet;

/// Decodes OBJ text with `tobj`, one node per object or group.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjDecoder;

impl MeshDecoder for ObjDecoder {
    fn format_name(&self) -> &'static str {
        "obj"
    }

    fn decode(&self, request: &LoadRequest) -> Result<LoadedScene, LoadError> {
        let text = std::str::from_utf8(&request.bytes)
            .map_err(|e| parse_error(request, format!("OBJ file is not valid UTF-8: {e}")))?;

        // Material libraries live next to the file and are not part of the
        // request; geometry loads without them.
        let (models, _materials) = tobj::load_obj_buf(
            &mut std::io::Cursor::new(text),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
            |_| Err(tobj::LoadError::OpenFileFailed),
        )
        .map_err(|e| parse_error(request, format!("failed to parse OBJ file: {e}")))?;

        let mut nodes = Vec::with_capacity(models.len());
        let mut stats = GeometryStats::default();
        let mut material_ids = HashSet::new();

        for (index, model) in models.iter().enumerate() {
            let mesh = &model.mesh;
            let points: Vec<Vec3> = mesh
                .positions
                .chunks_exact(3)
                .map(|v| Vec3::new(v[0], v[1], v[2]))
                .collect();
            let bounds = Aabb::from_points(&points).unwrap_or(Aabb::INVALID);

            stats.vertex_count += points.len() as u64;
            stats.face_count += (mesh.indices.len() / 3) as u64;
            if let Some(id) = mesh.material_id {
                material_ids.insert(id);
            }

            nodes.push(LoadedNode::new(index as u64 + 1, model.name.clone(), bounds));
        }

        stats.material_count = match material_ids.len() {
            0 if stats.vertex_count > 0 => 1,
            count => count as u32,
        };

        log::debug!(
            "Decoded OBJ '{}': {} object(s), {} vertices.",
            request.filename,
            nodes.len(),
            stats.vertex_count
        );
        Ok(LoadedScene {
            nodes,
            stats: Some(stats),
        })
    }
}
