//! JSON and YAML serialization of a build log.

use buildlog_model::BuildLog;

use crate::error::Result;

/// Serialize a log to pretty-printed JSON.
pub fn to_json(log: &BuildLog) -> Result<String> {
    Ok(serde_json::to_string_pretty(log)?)
}

/// Serialize a log to YAML.
pub fn to_yaml(log: &BuildLog) -> Result<String> {
    Ok(serde_yaml_ng::to_string(log)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_from_str;

    const XML: &str = r#"<Build Succeeded="true"><Item Name="Compile" ItemSpec="a.cs"/></Build>"#;

    #[test]
    fn test_to_json() {
        let log = read_from_str(XML).unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&log).unwrap()).unwrap();

        assert_eq!(json["kind"], "Build");
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["children"][0]["kind"], "Item");
        assert_eq!(json["children"][0]["text"], "a.cs");
    }

    #[test]
    fn test_to_yaml() {
        let log = read_from_str(XML).unwrap();
        let yaml = to_yaml(&log).unwrap();

        assert!(yaml.contains("kind: Build"));
        assert!(yaml.contains("succeeded: true"));
        assert!(yaml.contains("name: Compile"));
        assert!(yaml.contains("text: a.cs"));
    }
}
