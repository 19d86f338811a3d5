//! Node registry mapping element names to node constructors.
//!
//! Every element of a build log is realized as one of the variants in
//! [`NodeKind`](buildlog_model::NodeKind). The registry decides which one
//! by the element's local name, falling back to a folder for names it does
//! not know.

mod config;
mod core;

pub use config::{create_node_registry, node_registry};
pub use core::{NodeConstructor, NodeRegistry};
