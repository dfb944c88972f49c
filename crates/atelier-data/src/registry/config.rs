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

use atelier_core::domain::Domain;
use serde::Serialize;

/// One editing tool offered by a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolConfig {
    /// Identifier, unique within its domain.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Icon reference understood by the presentation layer.
    pub icon: &'static str,
    /// Optional single-key shortcut.
    pub shortcut: Option<&'static str>,
    /// One-line description.
    pub description: &'static str,
    /// Category label used for grouping.
    pub category: &'static str,
}

impl ToolConfig {
    /// Creates a tool without a keyboard shortcut.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        icon: &'static str,
        description: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            icon,
            shortcut: None,
            description,
            category,
        }
    }

    /// Assigns a keyboard shortcut.
    pub const fn with_shortcut(self, shortcut: &'static str) -> Self {
        Self {
            shortcut: Some(shortcut),
            ..self
        }
    }
}

/// A named, ordered list of steps. Purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowConfig {
    /// Identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Step labels, in order.
    pub steps: &'static [&'static str],
}

/// The tools and workflows of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainConfig {
    /// The domain this configuration belongs to.
    pub id: Domain,
    /// Display name.
    pub name: &'static str,
    /// Icon shown next to the name.
    pub icon: &'static str,
    /// Color token of the domain's accent.
    pub color: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Tools, in display order. Ids are unique.
    pub tools: &'static [ToolConfig],
    /// Workflows, in display order.
    pub workflows: &'static [WorkflowConfig],
}

impl DomainConfig {
    /// Finds a tool by id.
    pub fn tool(&self, id: &str) -> Option<&'static ToolConfig> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Whether the domain offers a tool with this id.
    pub fn has_tool(&self, id: &str) -> bool {
        self.tool(id).is_some()
    }

    /// Finds a workflow by its display name.
    pub fn workflow_named(&self, name: &str) -> Option<&'static WorkflowConfig> {
        self.workflows.iter().find(|workflow| workflow.name == name)
    }

    /// Groups the tools by category.
    ///
    /// Categories appear in the order they are first seen, and tools keep
    /// their relative order within a category.
    pub fn tools_by_category(&self) -> Vec<(&'static str, Vec<&'static ToolConfig>)> {
        let mut groups: Vec<(&'static str, Vec<&'static ToolConfig>)> = Vec::new();
        for tool in self.tools {
            match groups.iter_mut().find(|(category, _)| *category == tool.category) {
                Some((_, tools)) => tools.push(tool),
                None => groups.push((tool.category, vec![tool])),
            }
        }
        groups
    }
}
