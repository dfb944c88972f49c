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

use atelier_core::asset::AssetId;
use atelier_core::config::StudioConfig;
use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, SceneLoader};
use atelier_core::math::Vec3;
use atelier_infra::{MeshSceneLoader, SceneGraph};
use std::sync::Arc;

const TRIANGLE: &str = "\
o Shard
v -1 0 0
v 1 0 0
v 0 4 2
f 1 2 3
";

fn request(filename: &str, extension: &str, bytes: &[u8]) -> LoadRequest {
    LoadRequest {
        asset: AssetId::new(),
        filename: filename.into(),
        extension: extension.into(),
        bytes: Arc::from(bytes),
    }
}

#[tokio::test]
async fn obj_load_adds_root_proxy_and_nodes() {
    let loader = MeshSceneLoader::from_config(&StudioConfig::default());
    let req = request("shard.obj", "obj", TRIANGLE.as_bytes());

    let scene = loader.load(&req).await.unwrap();
    let names: Vec<_> = scene.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["__root__", "Shard"]);

    let proxy = &scene.nodes[0];
    assert_eq!(proxy.bounds.min, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(proxy.bounds.max, Vec3::new(1.0, 4.0, 2.0));

    let stats = scene.stats.unwrap();
    assert_eq!(stats.vertex_count, 3);
    assert_eq!(stats.face_count, 1);

    // Four helpers plus the two nodes just created.
    assert_eq!(loader.graph().len(), 6);
    assert_eq!(loader.graph().nodes_of(req.asset), scene.nodes);
}

#[tokio::test]
async fn clear_keeps_helpers_and_release_drops_the_asset() {
    let config = StudioConfig::default();
    let loader = MeshSceneLoader::from_config(&config);

    let first = request("a.obj", "obj", TRIANGLE.as_bytes());
    loader.load(&first).await.unwrap();
    loader.clear(&config.permanent_helpers);
    assert_eq!(loader.graph().len(), 4);

    let second = request("b.obj", "obj", TRIANGLE.as_bytes());
    loader.load(&second).await.unwrap();
    loader.release(second.asset);
    let names: Vec<_> = loader.graph().nodes().into_iter().map(|n| n.name).collect();
    assert_eq!(names, config.permanent_helpers);
}

#[tokio::test]
async fn asset_objects_named_like_helpers_do_not_accumulate() {
    const GRID_RIG: &str = "\
o grid
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o Body
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";
    let config = StudioConfig::default();
    let loader = MeshSceneLoader::from_config(&config);

    for _ in 0..2 {
        loader.clear(&config.permanent_helpers);
        let scene = loader
            .load(&request("grid_rig.obj", "obj", GRID_RIG.as_bytes()))
            .await
            .unwrap();
        assert_eq!(scene.nodes.len(), 3);
    }
    // Four helpers plus the proxy, grid and Body of the latest load.
    assert_eq!(loader.graph().len(), 7);

    loader.clear(&config.permanent_helpers);
    let names: Vec<_> = loader.graph().nodes().into_iter().map(|n| n.name).collect();
    assert_eq!(names, config.permanent_helpers);
}

#[tokio::test]
async fn unknown_extension_is_rejected_without_fallback() {
    let loader = MeshSceneLoader::new(Arc::new(SceneGraph::new()));
    assert!(loader.supports("glb"));
    assert!(!loader.supports("step"));

    let err = loader
        .load(&request("Engine_Assembly.step", "step", b"ISO-10303-21;"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat { ref extension } if extension == "step"));
    assert!(loader.graph().is_empty());
}

#[tokio::test]
async fn empty_fallback_reports_only_the_proxy() {
    let loader = MeshSceneLoader::new(Arc::new(SceneGraph::new())).with_empty_fallback();
    let scene = loader
        .load(&request("Engine_Assembly.step", "step", b"ISO-10303-21;"))
        .await
        .unwrap();

    assert_eq!(scene.nodes.len(), 1);
    assert!(!scene.nodes[0].bounds.is_valid());
    assert_eq!(scene.stats, None);
}

#[tokio::test]
async fn decode_failure_leaves_the_graph_untouched() {
    let loader = MeshSceneLoader::new(Arc::new(SceneGraph::new()));
    let err = loader
        .load(&request("broken.gltf", "gltf", b"{ \"asset\": "))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(loader.graph().is_empty());
}

#[tokio::test]
async fn obj_file_on_disk_round_trips_through_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shard.obj");
    std::fs::write(&path, TRIANGLE).unwrap();

    let bytes = tokio::fs::read(&path).await.unwrap();
    let loader = MeshSceneLoader::new(Arc::new(SceneGraph::new()));
    let scene = loader
        .load(&request("shard.obj", "obj", &bytes))
        .await
        .unwrap();
    assert_eq!(scene.nodes.len(), 2);
}
