//! Entry points: read a whole build log document into a [`BuildLog`].

use std::fs;
use std::path::Path;

use roxmltree::Document;

use buildlog_model::BuildLog;

use crate::builder::TreeBuilder;
use crate::config::ReaderConfig;
use crate::error::{ReaderError, Result};
use crate::xml::get_tag_name;

/// Read a build log from an XML file.
///
/// # Arguments
/// * `path` - Path to the XML log file
///
/// # Returns
/// The log tree rooted at its `Build` node
///
/// # Errors
/// Fails when the file cannot be read, is not well-formed XML, or its root
/// element is not a `<Build>`.
pub fn read_from_xml(path: impl AsRef<Path>) -> Result<BuildLog> {
    read_from_xml_with_config(path, &ReaderConfig::default())
}

/// Read a build log from an XML file using explicit parser options.
pub fn read_from_xml_with_config(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<BuildLog> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|source| ReaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "Loaded build log");
    read_from_str_with_config(&xml, config)
}

/// Read a build log from an XML string.
///
/// # Examples
/// ```
/// use buildlog_reader::read_from_str;
///
/// let log = read_from_str(r#"<Build Succeeded="true"><Project Name="A"/></Build>"#).unwrap();
/// assert!(log.build.succeeded);
/// assert_eq!(log.children[0].name(), Some("A"));
/// ```
pub fn read_from_str(xml: &str) -> Result<BuildLog> {
    read_from_str_with_config(xml, &ReaderConfig::default())
}

/// Read a build log from an XML string using explicit parser options.
pub fn read_from_str_with_config(xml: &str, config: &ReaderConfig) -> Result<BuildLog> {
    let doc = Document::parse_with_options(xml, config.parsing_options())?;
    read_document(&doc)
}

/// Build the log tree from an already parsed document.
///
/// # Errors
/// Returns [`ReaderError::RootNotBuild`] when the root element does not
/// resolve to a `Build` node.
pub fn read_document(doc: &Document<'_>) -> Result<BuildLog> {
    let element = doc.root_element();
    let root = TreeBuilder::default().read_node(element);
    let log = BuildLog::try_from(root).map_err(|_| ReaderError::RootNotBuild {
        found: get_tag_name(element).to_string(),
    })?;

    tracing::debug!(nodes = log.count(), succeeded = log.build.succeeded, "Read build log");
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_from_str_root_not_build() {
        let err = read_from_str("<Unknown/>").unwrap_err();
        assert!(matches!(
            err,
            ReaderError::RootNotBuild { ref found } if found == "Unknown"
        ));
    }

    #[test]
    fn test_read_from_str_root_is_other_variant() {
        let err = read_from_str(r#"<Project Name="A"/>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Document root must be <Build>, found <Project>"
        );
    }

    #[test]
    fn test_read_from_str_explicit_folder_root() {
        let err = read_from_str("<Folder/>").unwrap_err();
        assert!(matches!(
            err,
            ReaderError::RootNotBuild { ref found } if found == "Folder"
        ));
    }

    #[test]
    fn test_read_from_str_malformed() {
        let err = read_from_str("<Build><Project></Build>").unwrap_err();
        assert!(matches!(err, ReaderError::XmlParse(_)));
    }

    #[test]
    fn test_nodes_limit() {
        let config = ReaderConfig::default().with_nodes_limit(2);
        let err = read_from_str_with_config("<Build><A/><B/><C/></Build>", &config).unwrap_err();
        assert!(matches!(err, ReaderError::XmlParse(_)));
    }

    #[test]
    fn test_dtd_rejected_by_default() {
        let xml = r#"<!DOCTYPE Build [<!ENTITY x "y">]><Build/>"#;
        assert!(read_from_str(xml).is_err());

        let config = ReaderConfig::default().with_allow_dtd(true);
        assert!(read_from_str_with_config(xml, &config).is_ok());
    }

    #[test]
    fn test_read_from_xml_missing_file() {
        let err = read_from_xml("definitely/not/here.xml").unwrap_err();
        assert!(matches!(err, ReaderError::Io { .. }));
    }

    #[test]
    fn test_read_from_xml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"<Build Succeeded="true"><Target Name="T"/></Build>"#).unwrap();

        let log = read_from_xml(file.path()).unwrap();
        assert!(log.build.succeeded);
        assert_eq!(log.children.len(), 1);
    }
}
