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

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for an entry in the object registry.
///
/// Unique for the lifetime of the asset that produced it. Renderer node ids
/// are carried over verbatim (as their decimal string), helper and showcase
/// objects use their node names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneObjectId(String);

impl SceneObjectId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for SceneObjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// What kind of scene node an object represents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneObjectKind {
    /// Renderable geometry.
    #[default]
    Mesh,
    /// A light source.
    Light,
    /// A camera.
    Camera,
    /// A bare transform node.
    Empty,
}

/// One entry of the object registry.
///
/// Children are owned by their parent; the registry as a whole is a forest
/// with no cycles and no shared nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Stable identifier.
    pub id: SceneObjectId,
    /// Display name.
    pub name: String,
    /// The node kind.
    #[serde(rename = "type")]
    pub kind: SceneObjectKind,
    /// Whether the node is drawn.
    pub visible: bool,
    /// Whether the node is protected from editing.
    pub locked: bool,
    /// Owned child objects, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    /// Creates a visible, unlocked mesh object without children.
    pub fn mesh(id: impl Into<SceneObjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: SceneObjectKind::Mesh,
            visible: true,
            locked: false,
            children: Vec::new(),
        }
    }

    /// Sets the node kind.
    pub fn with_kind(mut self, kind: SceneObjectKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the initial visibility.
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Replaces the children list.
    pub fn with_children(mut self, children: Vec<SceneObject>) -> Self {
        self.children = children;
        self
    }

    /// Iterates over this object and all of its descendants, depth-first,
    /// parents before children.
    pub fn iter(&self) -> SceneObjectIter<'_> {
        SceneObjectIter { stack: vec![self] }
    }

    /// Finds this object or a descendant by id.
    pub fn find(&self, id: &SceneObjectId) -> Option<&SceneObject> {
        self.iter().find(|object| &object.id == id)
    }

    /// Mutable variant of [`SceneObject::find`].
    pub fn find_mut(&mut self, id: &SceneObjectId) -> Option<&mut SceneObject> {
        if &self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

/// Depth-first iterator over a [`SceneObject`] subtree.
pub struct SceneObjectIter<'a> {
    stack: Vec<&'a SceneObject>,
}

impl<'a> Iterator for SceneObjectIter<'a> {
    type Item = &'a SceneObject;

    fn next(&mut self) -> Option<Self::Item> {
        let object = self.stack.pop()?;
        // Reverse so the first child is visited first.
        self.stack.extend(object.children.iter().rev());
        Some(object)
    }
}

/// Iterates over every object of a forest, depth-first.
pub fn iter_forest(roots: &[SceneObject]) -> impl Iterator<Item = &SceneObject> {
    roots.iter().flat_map(SceneObject::iter)
}

/// Finds an object anywhere in a forest.
pub fn find_in_forest<'a>(
    roots: &'a [SceneObject],
    id: &SceneObjectId,
) -> Option<&'a SceneObject> {
    roots.iter().find_map(|root| root.find(id))
}

/// Mutable variant of [`find_in_forest`].
pub fn find_in_forest_mut<'a>(
    roots: &'a mut [SceneObject],
    id: &SceneObjectId,
) -> Option<&'a mut SceneObject> {
    roots.iter_mut().find_map(|root| root.find_mut(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<SceneObject> {
        vec![
            SceneObject::mesh("body", "Body").with_children(vec![
                SceneObject::mesh("head", "Head"),
                SceneObject::mesh("arm", "Arm")
                    .with_children(vec![SceneObject::mesh("hand", "Hand")]),
            ]),
            SceneObject::mesh("sun", "Sun").with_kind(SceneObjectKind::Light),
        ]
    }

    #[test]
    fn iteration_is_depth_first_pre_order() {
        let forest = sample_forest();
        let names: Vec<_> = iter_forest(&forest).map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Body", "Head", "Arm", "Hand", "Sun"]);
    }

    #[test]
    fn find_reaches_nested_children() {
        let forest = sample_forest();
        let hand = find_in_forest(&forest, &"hand".into()).expect("hand exists");
        assert_eq!(hand.name, "Hand");
        assert!(find_in_forest(&forest, &"tail".into()).is_none());
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut forest = sample_forest();
        find_in_forest_mut(&mut forest, &"arm".into())
            .expect("arm exists")
            .visible = false;
        assert!(!find_in_forest(&forest, &"arm".into()).unwrap().visible);
        assert!(find_in_forest(&forest, &"hand".into()).unwrap().visible);
    }

    #[test]
    fn numeric_ids_use_decimal_form() {
        assert_eq!(SceneObjectId::from(42u64).as_str(), "42");
    }
}
