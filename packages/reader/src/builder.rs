//! Recursive tree builder turning XML elements into tree nodes.

use roxmltree::Node;

use buildlog_model::{NodeData, TreeNode};

use crate::binder::bind_attributes;
use crate::config::{ATTR_TIMESTAMP, FOLDER_ELEMENT};
use crate::registry::{node_registry, NodeRegistry};
use crate::xml::{element_children, get_datetime, get_tag_name, text_content};

/// Builder that walks an element tree and produces the matching node tree.
///
/// The builder holds no state besides the registry, so one instance can
/// read any number of documents.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'r> {
    registry: &'r NodeRegistry,
}

impl Default for TreeBuilder<'static> {
    fn default() -> Self {
        Self::new(node_registry())
    }
}

impl<'r> TreeBuilder<'r> {
    /// Create a builder resolving element names through `registry`.
    #[must_use]
    pub fn new(registry: &'r NodeRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &'r NodeRegistry {
        self.registry
    }

    /// Build the node for `element` and, recursively, for all its child elements.
    ///
    /// Attributes are bound before the children are attached, and inline
    /// text is read after, so text interleaved with child elements is still
    /// taken in full.
    pub fn read_node(&self, element: Node<'_, '_>) -> TreeNode {
        let tag_name = get_tag_name(element);
        let mut node = self.registry.construct(tag_name);

        if let NodeData::Folder(folder) = &mut node.data {
            if tag_name != FOLDER_ELEMENT {
                tracing::debug!(tag = %tag_name, "Unknown element, reading as folder");
                folder.name = Some(tag_name.to_string());
            }
        }

        bind_attributes(&mut node, element);

        for child in element_children(element) {
            node.add_child(self.read_node(child));
        }

        match &mut node.data {
            NodeData::Property(property) => property.value = text_content(element),
            NodeData::Metadata(metadata) => metadata.value = text_content(element),
            NodeData::Message(message) => {
                message.timestamp = get_datetime(element, ATTR_TIMESTAMP);
                message.text = text_content(element);
            }
            _ => {}
        }

        node
    }
}
