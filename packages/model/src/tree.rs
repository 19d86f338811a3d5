//! Tree structure: nodes with a shared header and owned children.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::kind::NodeKind;
use crate::nodes::{Build, NodeData};

/// A node in the build log tree.
///
/// Every node carries the `is_low_relevance` flag and its children in
/// document order; everything else lives in the variant payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub is_low_relevance: bool,
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a childless node with the given payload.
    #[must_use]
    pub fn new(data: NodeData) -> Self {
        Self {
            is_low_relevance: false,
            data,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.data.name()
    }

    /// Append a child after any existing children.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Pre-order iterator over this node and everything below it.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.descendants().count()
    }
}

/// Pre-order, depth-first iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A tree whose root is known to be a [`Build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "Build")]
pub struct BuildLog {
    pub is_low_relevance: bool,
    #[serde(flatten)]
    pub build: Build,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl BuildLog {
    /// Pre-order iterator over every node below the root.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Total number of nodes, the root included.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.descendants().count()
    }

    /// Number of nodes per kind, the root included.
    #[must_use]
    pub fn count_by_kind(&self) -> BTreeMap<NodeKind, usize> {
        let mut counts = BTreeMap::new();
        counts.insert(NodeKind::Build, 1);
        for node in self.descendants() {
            *counts.entry(node.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Turn the log back into a plain tree rooted at a `Build` node.
    #[must_use]
    pub fn into_tree(self) -> TreeNode {
        TreeNode {
            is_low_relevance: self.is_low_relevance,
            data: NodeData::Build(self.build),
            children: self.children,
        }
    }
}

impl TryFrom<TreeNode> for BuildLog {
    /// The node is handed back unchanged when it is not a `Build`.
    type Error = TreeNode;

    fn try_from(node: TreeNode) -> Result<Self, Self::Error> {
        match node.data {
            NodeData::Build(build) => Ok(Self {
                is_low_relevance: node.is_low_relevance,
                build,
                children: node.children,
            }),
            data => Err(TreeNode { data, ..node }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Folder, Message, Project, Property};
    use pretty_assertions::assert_eq;

    fn named_folder(name: &str) -> TreeNode {
        TreeNode::new(NodeData::Folder(Folder {
            name: Some(name.to_string()),
        }))
    }

    fn sample_log() -> BuildLog {
        let mut project = TreeNode::new(NodeData::Project(Project {
            name: Some("A".to_string()),
            ..Project::default()
        }));
        project.add_child(TreeNode::new(NodeData::Property(Property {
            name: Some("Configuration".to_string()),
            value: "Debug".to_string(),
        })));
        project.add_child(named_folder("Evaluation"));

        let mut root = TreeNode::new(NodeData::Build(Build::default()));
        root.add_child(project);
        root.add_child(TreeNode::new(NodeData::Message(Message::default())));

        BuildLog::try_from(root).unwrap()
    }

    #[test]
    fn test_descendants_pre_order() {
        let log = sample_log();
        let kinds: Vec<_> = log.descendants().map(TreeNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Project,
                NodeKind::Property,
                NodeKind::Folder,
                NodeKind::Message
            ]
        );
    }

    #[test]
    fn test_counts() {
        let log = sample_log();
        assert_eq!(log.count(), 5);

        let counts = log.count_by_kind();
        assert_eq!(counts.get(&NodeKind::Build), Some(&1));
        assert_eq!(counts.get(&NodeKind::Project), Some(&1));
        assert_eq!(counts.get(&NodeKind::Task), None);
    }

    #[test]
    fn test_try_from_rejects_non_build() {
        let mut folder = named_folder("Unknown");
        folder.is_low_relevance = true;
        folder.add_child(named_folder("Inner"));

        let rejected = BuildLog::try_from(folder.clone()).unwrap_err();
        assert_eq!(rejected, folder);
    }

    #[test]
    fn test_into_tree_round_trip() {
        let log = sample_log();
        let tree = log.clone().into_tree();
        assert_eq!(tree.kind(), NodeKind::Build);
        assert_eq!(tree.count(), 5);
        assert_eq!(BuildLog::try_from(tree).unwrap(), log);
    }

    #[test]
    fn test_serialize_shape() {
        let mut root = TreeNode::new(NodeData::Build(Build {
            succeeded: true,
            ..Build::default()
        }));
        root.add_child(named_folder("Unknown"));
        let log = BuildLog::try_from(root).unwrap();

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["kind"], "Build");
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["start_time"], "1970-01-01T00:00:00Z");
        assert_eq!(json["children"][0]["kind"], "Folder");
        assert_eq!(json["children"][0]["name"], "Unknown");
        assert_eq!(json["children"][0]["is_low_relevance"], false);
        assert!(json["children"][0].get("children").is_none());
    }
}
