//! Configuration constants and reader options.

use std::path::Path;

use roxmltree::ParsingOptions;

use crate::error::{ReaderError, Result};

/// Attribute flagging a node as low relevance. Read on every element.
pub const ATTR_IS_LOW_RELEVANCE: &str = "IsLowRelevance";
pub const ATTR_NAME: &str = "Name";
pub const ATTR_SUCCEEDED: &str = "Succeeded";
pub const ATTR_START_TIME: &str = "StartTime";
pub const ATTR_END_TIME: &str = "EndTime";
pub const ATTR_PROJECT_FILE: &str = "ProjectFile";
pub const ATTR_FROM_ASSEMBLY: &str = "FromAssembly";
pub const ATTR_COMMAND_LINE_ARGUMENTS: &str = "CommandLineArguments";
/// Item attribute whose value becomes the item's text.
pub const ATTR_ITEM_SPEC: &str = "ItemSpec";
pub const ATTR_TIMESTAMP: &str = "Timestamp";

/// Element name of an explicit folder. Folders with this name keep no name.
pub const FOLDER_ELEMENT: &str = "Folder";

/// Default cap on the number of DOM nodes a single document may produce.
pub const DEFAULT_NODES_LIMIT: u32 = u32::MAX;

/// Text wrap width for the tree renderer.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Options for loading a build log document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Accept documents carrying a DTD.
    pub allow_dtd: bool,

    /// Maximum number of DOM nodes. Larger documents fail to parse.
    pub nodes_limit: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            allow_dtd: false,
            nodes_limit: DEFAULT_NODES_LIMIT,
        }
    }
}

impl ReaderConfig {
    /// Enable or disable DTD support.
    #[must_use]
    pub fn with_allow_dtd(mut self, allow_dtd: bool) -> Self {
        self.allow_dtd = allow_dtd;
        self
    }

    /// Set the DOM node limit.
    #[must_use]
    pub fn with_nodes_limit(mut self, nodes_limit: u32) -> Self {
        self.nodes_limit = nodes_limit;
        self
    }

    /// Convert into the DOM parser's options.
    #[must_use]
    pub fn parsing_options(&self) -> ParsingOptions {
        let mut options = ParsingOptions::default();
        options.allow_dtd = self.allow_dtd;
        options.nodes_limit = self.nodes_limit;
        options
    }
}

/// Validate that a path points at an existing regular file.
///
/// # Examples
/// ```
/// use buildlog_reader::config::validate_input_path;
///
/// assert!(validate_input_path(std::path::Path::new("does/not/exist.xml")).is_err());
/// ```
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReaderError::InvalidPath {
            path: path.to_path_buf(),
            reason: "file does not exist".to_string(),
        });
    }
    if !path.is_file() {
        return Err(ReaderError::InvalidPath {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert!(!config.allow_dtd);
        assert_eq!(config.nodes_limit, u32::MAX);
    }

    #[test]
    fn test_parsing_options() {
        let config = ReaderConfig::default()
            .with_allow_dtd(true)
            .with_nodes_limit(10);
        let options = config.parsing_options();
        assert!(options.allow_dtd);
        assert_eq!(options.nodes_limit, 10);
    }

    #[test]
    fn test_validate_input_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_input_path(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_input_path_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_input_path(file.path()).is_ok());
    }
}
