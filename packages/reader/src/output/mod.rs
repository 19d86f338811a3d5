//! Output generation for build log trees.

mod serialize;
mod text;

pub use serialize::{to_json, to_yaml};
pub use text::{format_duration, render_stats, render_tree};

use clap::ValueEnum;

use buildlog_model::BuildLog;

use crate::error::Result;

/// Output formats supported by `buildlog show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline.
    #[default]
    Tree,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Render a log in the requested format.
pub fn render(log: &BuildLog, format: OutputFormat, max_depth: Option<usize>) -> Result<String> {
    match format {
        OutputFormat::Tree => Ok(render_tree(log, max_depth)),
        OutputFormat::Json => to_json(log),
        OutputFormat::Yaml => to_yaml(log),
    }
}
