//! The closed set of node variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying which variant a [`TreeNode`](crate::TreeNode) is.
///
/// The variant name doubles as the XML element name it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Build,
    Project,
    Target,
    Task,
    Item,
    Property,
    Metadata,
    Parameter,
    Message,
    Folder,
}

impl NodeKind {
    /// Every variant, in declaration order.
    pub const ALL: [NodeKind; 10] = [
        NodeKind::Build,
        NodeKind::Project,
        NodeKind::Target,
        NodeKind::Task,
        NodeKind::Item,
        NodeKind::Property,
        NodeKind::Metadata,
        NodeKind::Parameter,
        NodeKind::Message,
        NodeKind::Folder,
    ];

    /// Unqualified variant name, e.g. `"Project"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Project => "Project",
            Self::Target => "Target",
            Self::Task => "Task",
            Self::Item => "Item",
            Self::Property => "Property",
            Self::Metadata => "Metadata",
            Self::Parameter => "Parameter",
            Self::Message => "Message",
            Self::Folder => "Folder",
        }
    }

    /// Whether nodes of this kind carry a start and end time.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            Self::Build | Self::Project | Self::Target | Self::Task
        )
    }

    /// Whether nodes of this kind take their value from the element's text content.
    #[must_use]
    pub fn reads_inline_text(&self) -> bool {
        matches!(self, Self::Property | Self::Metadata | Self::Message)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
