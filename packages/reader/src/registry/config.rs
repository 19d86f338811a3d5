//! Registration table for the build log node variants.

use std::sync::LazyLock;

use buildlog_model::{
    Build, Folder, Item, Message, Metadata, NodeData, NodeKind, Parameter, Project, Property,
    Target, Task,
};

use super::core::NodeRegistry;

static NODE_REGISTRY: LazyLock<NodeRegistry> = LazyLock::new(create_node_registry);

/// Shared registry, built on first use and immutable afterwards.
pub fn node_registry() -> &'static NodeRegistry {
    &NODE_REGISTRY
}

/// Create a registry with one entry per node variant.
#[must_use]
pub fn create_node_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    // Timed nodes
    registry.register(NodeKind::Build, || NodeData::Build(Build::default()));
    registry.register(NodeKind::Project, || NodeData::Project(Project::default()));
    registry.register(NodeKind::Target, || NodeData::Target(Target::default()));
    registry.register(NodeKind::Task, || NodeData::Task(Task::default()));

    // Named leaves
    registry.register(NodeKind::Item, || NodeData::Item(Item::default()));
    registry.register(NodeKind::Property, || NodeData::Property(Property::default()));
    registry.register(NodeKind::Metadata, || NodeData::Metadata(Metadata::default()));
    registry.register(NodeKind::Parameter, || {
        NodeData::Parameter(Parameter::default())
    });

    registry.register(NodeKind::Message, || NodeData::Message(Message::default()));
    registry.register(NodeKind::Folder, || NodeData::Folder(Folder::default()));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_registered() {
        let registry = create_node_registry();
        assert_eq!(registry.len(), NodeKind::ALL.len());
        assert!(registry.registered_names().contains("Parameter"));

        for kind in NodeKind::ALL {
            assert!(registry.is_registered(kind.name()), "{kind} missing");
            let node = registry.construct(kind.name());
            assert_eq!(node.kind(), kind);
            assert!(node.children.is_empty());
            assert!(!node.is_low_relevance);
        }
    }

    #[test]
    fn test_shared_registry_is_single_instance() {
        let first: *const NodeRegistry = node_registry();
        let second: *const NodeRegistry = node_registry();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let kinds: Vec<NodeKind> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["Task", "Item", "Unknown"]
                .into_iter()
                .map(|name| scope.spawn(move || node_registry().resolve(name)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(kinds, vec![NodeKind::Task, NodeKind::Item, NodeKind::Folder]);
    }
}
