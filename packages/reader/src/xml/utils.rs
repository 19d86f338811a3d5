//! XML utility functions for reading build log elements.
//!
//! The attribute helpers never fail: log files come from many producers,
//! so an absent or malformed attribute falls back to a default value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use roxmltree::Node;

use buildlog_model::default_instant;

/// Date-time layouts accepted when no UTC offset is present.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use buildlog_reader::xml::get_tag_name;
///
/// let xml = r#"<b:Build xmlns:b="urn:build"><b:Project/></b:Build>"#;
/// let doc = Document::parse(xml).unwrap();
/// let project = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(project), "Project");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all element children of a node, in document order.
///
/// Text nodes, comments and processing instructions are left out.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the raw value of an attribute.
///
/// # Arguments
/// * `node` - Element to read from
/// * `name` - Attribute name (case-sensitive)
///
/// # Returns
/// The attribute text exactly as written, or `None` if the attribute is absent
pub fn get_string<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Read a boolean attribute.
///
/// Returns `false` when the attribute is absent or not a boolean.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use buildlog_reader::xml::get_boolean;
///
/// let doc = Document::parse(r#"<Build Succeeded="True" IsLowRelevance="maybe"/>"#).unwrap();
/// let build = doc.root_element();
/// assert!(get_boolean(build, "Succeeded"));
/// assert!(!get_boolean(build, "IsLowRelevance"));
/// assert!(!get_boolean(build, "Missing"));
/// ```
pub fn get_boolean(node: Node<'_, '_>, name: &str) -> bool {
    let Some(text) = get_string(node, name) else {
        return false;
    };
    parse_boolean(text).unwrap_or_else(|| {
        tracing::trace!(attribute = name, value = text, "Unparseable boolean, using false");
        false
    })
}

/// Read a timestamp attribute.
///
/// Returns the default instant when the attribute is absent or not a
/// recognizable ISO-8601 date-time.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use buildlog_reader::xml::get_datetime;
/// use buildlog_model::default_instant;
///
/// let doc = Document::parse(r#"<Target StartTime="2024-01-01T00:00:00Z" EndTime="soon"/>"#).unwrap();
/// let target = doc.root_element();
/// assert_eq!(get_datetime(target, "StartTime").to_rfc3339(), "2024-01-01T00:00:00+00:00");
/// assert_eq!(get_datetime(target, "EndTime"), default_instant());
/// ```
pub fn get_datetime(node: Node<'_, '_>, name: &str) -> DateTime<Utc> {
    let Some(text) = get_string(node, name) else {
        return default_instant();
    };
    parse_datetime(text).unwrap_or_else(|| {
        tracing::trace!(attribute = name, value = text, "Unparseable timestamp, using default");
        default_instant()
    })
}

/// Parse a boolean case-insensitively, ignoring surrounding whitespace.
#[must_use]
pub fn parse_boolean(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse an ISO-8601 instant.
///
/// Values with an offset (or `Z`) are converted to UTC. Values without an
/// offset are taken to be UTC already; a bare date means midnight.
#[must_use]
pub fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Concatenate every text node below an element, in document order.
///
/// Whitespace is kept as the DOM surfaces it, and text inside child
/// elements is included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use buildlog_reader::xml::text_content;
///
/// let doc = Document::parse("<Message> a <b>b</b> c</Message>").unwrap();
/// assert_eq!(text_content(doc.root_element()), " a b c");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
