//! buildlog model - Typed tree of build log events.
//!
//! A build log is a tree of builds, projects, targets, tasks, items,
//! properties, metadata, parameters, messages, and generic folders. Each
//! node is a [`TreeNode`]: a shared header (`is_low_relevance`, children)
//! plus a variant payload in [`NodeData`].
//!
//! # Example
//!
//! ```
//! use buildlog_model::{Build, BuildLog, NodeData, NodeKind, TreeNode};
//!
//! let root = TreeNode::new(NodeData::Build(Build::default()));
//! let log = BuildLog::try_from(root).unwrap();
//! assert_eq!(log.count_by_kind().get(&NodeKind::Build), Some(&1));
//! ```

pub mod kind;
pub mod nodes;
pub mod tree;

pub use kind::NodeKind;
pub use nodes::{
    default_instant, Build, Folder, Item, Message, Metadata, Named, NodeData, Parameter, Project,
    Property, Target, Task, Timed,
};
pub use tree::{BuildLog, Descendants, TreeNode};
