//! buildlog reader - Rebuild typed build log trees from XML.
//!
//! This crate reads an XML build log and materializes it as a
//! [`BuildLog`](buildlog_model::BuildLog): a tree of builds, projects,
//! targets, tasks, items, properties, metadata, parameters, messages and
//! folders.
//!
//! # Example
//!
//! ```
//! use buildlog_reader::read_from_str;
//! use buildlog_model::NodeKind;
//!
//! let xml = r#"<Build Succeeded="true">
//!   <Project Name="A" ProjectFile="a.proj"/>
//!   <Custom><Message>hi</Message></Custom>
//! </Build>"#;
//!
//! let log = read_from_str(xml).unwrap();
//! assert!(log.build.succeeded);
//! assert_eq!(log.children[1].kind(), NodeKind::Folder);
//! assert_eq!(log.children[1].name(), Some("Custom"));
//! ```
//!
//! # Architecture
//!
//! - [`xml`]: DOM helpers and tolerant attribute coercion
//! - [`registry`]: Element name to node variant mapping
//! - [`binder`]: Per-variant attribute binding
//! - [`builder`]: Recursive tree builder
//! - [`reader`]: Entry points for files, strings and parsed documents
//! - [`config`]: Constants and reader options
//! - [`error`]: Error types and Result alias
//! - [`output`]: Tree, stats, JSON and YAML rendering
//! - [`cli`]: Command-line interface

pub mod binder;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod reader;
pub mod registry;
pub mod xml;

// Re-export main functions
pub use reader::{
    read_document, read_from_str, read_from_str_with_config, read_from_xml,
    read_from_xml_with_config,
};

// Re-export commonly used items
pub use builder::TreeBuilder;
pub use config::ReaderConfig;
pub use error::{ReaderError, Result};
pub use registry::{node_registry, NodeRegistry};
