//! Registry mapping element names to node constructors.

use std::collections::{HashMap, HashSet};

use buildlog_model::{Folder, NodeData, NodeKind, TreeNode};

/// Constructor producing an empty payload for one variant.
pub type NodeConstructor = fn() -> NodeData;

/// Registry mapping element local names to node constructors.
///
/// Lookups that miss resolve to a [`Folder`].
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    constructors: HashMap<&'static str, NodeConstructor>,
}

impl NodeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the constructor for a variant under the variant's name.
    ///
    /// # Panics
    /// Panics if the name is already registered, or if the constructor
    /// builds a different variant than `kind`. Both mean the registration
    /// table itself is wrong.
    pub fn register(&mut self, kind: NodeKind, constructor: NodeConstructor) {
        assert_eq!(
            constructor().kind(),
            kind,
            "constructor registered for {kind} builds another variant"
        );
        let previous = self.constructors.insert(kind.name(), constructor);
        assert!(previous.is_none(), "duplicate node variant name: {kind}");
    }

    /// Resolve the variant an element with this local name becomes.
    #[must_use]
    pub fn resolve(&self, local_name: &str) -> NodeKind {
        self.constructors
            .get(local_name)
            .map_or(NodeKind::Folder, |constructor| constructor().kind())
    }

    /// Construct an empty node for an element with this local name.
    #[must_use]
    pub fn construct(&self, local_name: &str) -> TreeNode {
        let data = match self.constructors.get(local_name) {
            Some(constructor) => constructor(),
            None => NodeData::Folder(Folder::default()),
        };
        TreeNode::new(data)
    }

    /// Check if a constructor is registered for a name.
    #[must_use]
    pub fn is_registered(&self, local_name: &str) -> bool {
        self.constructors.contains_key(local_name)
    }

    /// Return set of all registered names.
    #[must_use]
    pub fn registered_names(&self) -> HashSet<&'static str> {
        self.constructors.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
