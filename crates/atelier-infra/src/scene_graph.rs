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

//! The node store the mesh loader materializes assets into.

use atelier_core::asset::AssetId;
use atelier_core::loader::LoadedNode;
use atelier_core::math::Aabb;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
struct GraphEntry {
    owner: Option<AssetId>,
    node: LoadedNode,
}

#[derive(Debug, Default)]
struct GraphInner {
    entries: Vec<GraphEntry>,
    next_id: u64,
}

impl GraphInner {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A flat, thread-safe list of live nodes, each tagged with the asset that
/// created it.
///
/// Helper nodes such as the grid and axes have no owning asset. Node ids are
/// assigned by the graph and never reused.
#[derive(Debug, Default)]
pub struct SceneGraph {
    inner: Mutex<GraphInner>,
}

impl SceneGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding one ownerless helper node per name.
    pub fn with_helpers<S: AsRef<str>>(names: &[S]) -> Self {
        let graph = Self::new();
        {
            let mut inner = graph.lock();
            for name in names {
                let id = inner.allocate();
                inner.entries.push(GraphEntry {
                    owner: None,
                    node: LoadedNode::new(id, name.as_ref(), Aabb::INVALID),
                });
            }
        }
        graph
    }

    fn lock(&self) -> MutexGuard<'_, GraphInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `nodes` on behalf of `asset`, renumbering them with graph ids.
    ///
    /// Returns the nodes as stored.
    pub fn insert(&self, asset: AssetId, nodes: Vec<LoadedNode>) -> Vec<LoadedNode> {
        let mut inner = self.lock();
        let mut stored = Vec::with_capacity(nodes.len());
        for mut node in nodes {
            node.id = inner.allocate();
            inner.entries.push(GraphEntry {
                owner: Some(asset),
                node: node.clone(),
            });
            stored.push(node);
        }
        stored
    }

    /// Removes every node except the ownerless helpers named in `keep`.
    ///
    /// Asset nodes are always removed, even when they share a helper's name.
    pub fn clear<S: AsRef<str>>(&self, keep: &[S]) -> usize {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|entry| {
            entry.owner.is_none() && keep.iter().any(|name| name.as_ref() == entry.node.name)
        });
        before - inner.entries.len()
    }

    /// Removes the nodes created for `asset`.
    pub fn release(&self, asset: AssetId) -> usize {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|entry| entry.owner != Some(asset));
        before - inner.entries.len()
    }

    /// A snapshot of every live node.
    pub fn nodes(&self) -> Vec<LoadedNode> {
        self.lock().entries.iter().map(|e| e.node.clone()).collect()
    }

    /// A snapshot of the nodes owned by `asset`.
    pub fn nodes_of(&self, asset: AssetId) -> Vec<LoadedNode> {
        self.lock()
            .entries
            .iter()
            .filter(|e| e.owner == Some(asset))
            .map(|e| e.node.clone())
            .collect()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the graph holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> LoadedNode {
        LoadedNode::new(0, name, Aabb::INVALID)
    }

    #[test]
    fn ids_are_assigned_by_the_graph() {
        let graph = SceneGraph::with_helpers(&["grid"]);
        let stored = graph.insert(AssetId::new(), vec![named("a"), named("b")]);
        assert_eq!(stored[0].id, 2);
        assert_eq!(stored[1].id, 3);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn clear_keeps_listed_helpers_only() {
        let graph = SceneGraph::with_helpers(&["grid", "xAxis"]);
        graph.insert(AssetId::new(), vec![named("Chair")]);
        assert_eq!(graph.clear(&["grid", "xAxis"]), 1);
        let names: Vec<_> = graph.nodes().into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["grid", "xAxis"]);
    }

    #[test]
    fn clear_removes_asset_nodes_named_like_helpers() {
        let graph = SceneGraph::with_helpers(&["grid"]);
        graph.insert(AssetId::new(), vec![named("grid"), named("Body")]);
        assert_eq!(graph.clear(&["grid"]), 2);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn release_only_touches_the_owner() {
        let graph = SceneGraph::new();
        let first = AssetId::new();
        let second = AssetId::new();
        graph.insert(first, vec![named("old")]);
        graph.insert(second, vec![named("new")]);

        assert_eq!(graph.release(first), 1);
        assert!(graph.nodes_of(first).is_empty());
        assert_eq!(graph.nodes_of(second).len(), 1);
        assert_eq!(graph.release(first), 0);
    }
}
