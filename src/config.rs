//! Custom property configuration
//!
//! Users can register custom UI Automation properties so scan reports render
//! them by name instead of raw GUID. The configuration is a JSON document and
//! is validated as a unit: one bad entry rejects the whole file, so a scan
//! never runs with a half-applied registration.

use crate::types::PropertyDataType;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid custom property \"{name}\": {reason}")]
    InvalidProperty { name: String, reason: String },
}

/// A validated custom property registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomProperty {
    /// The property's GUID as registered with UI Automation.
    pub guid: String,
    /// Name used when rendering the property in reports.
    pub programmatic_name: String,
    pub data_type: PropertyDataType,
}

/// Raw JSON shape before validation.
#[derive(Debug, Deserialize)]
struct RawCustomProperty {
    #[serde(default)]
    guid: String,
    #[serde(rename = "programmaticName", default)]
    programmatic_name: String,
    #[serde(rename = "uiaType", default)]
    uia_type: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    properties: Vec<RawCustomProperty>,
}

/// The set of custom properties a scan should resolve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomPropertyConfig {
    pub properties: Vec<CustomProperty>,
}

impl CustomPropertyConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(content)?;
        let mut properties = Vec::with_capacity(raw.properties.len());
        for entry in raw.properties {
            properties.push(validate_property(entry)?);
        }
        log::debug!("loaded {} custom properties", properties.len());
        Ok(Self { properties })
    }

    /// Look up a registration by GUID, case-insensitively.
    pub fn by_guid(&self, guid: &str) -> Option<&CustomProperty> {
        self.properties
            .iter()
            .find(|p| p.guid.eq_ignore_ascii_case(guid))
    }
}

fn validate_property(raw: RawCustomProperty) -> Result<CustomProperty, ConfigError> {
    if raw.guid.is_empty() {
        return Err(ConfigError::InvalidProperty {
            name: raw.programmatic_name,
            reason: "guid must not be empty".to_string(),
        });
    }
    if !is_valid_guid(&raw.guid) {
        return Err(ConfigError::InvalidProperty {
            name: raw.programmatic_name,
            reason: format!("\"{}\" is not a valid GUID", raw.guid),
        });
    }
    if raw.programmatic_name.is_empty() {
        return Err(ConfigError::InvalidProperty {
            name: raw.guid,
            reason: "programmaticName must not be empty".to_string(),
        });
    }
    let data_type: PropertyDataType =
        raw.uia_type
            .parse()
            .map_err(|reason| ConfigError::InvalidProperty {
                name: raw.programmatic_name.clone(),
                reason,
            })?;

    Ok(CustomProperty {
        guid: raw.guid,
        programmatic_name: raw.programmatic_name,
        data_type,
    })
}

/// Validate GUID format, braces optional.
fn is_valid_guid(s: &str) -> bool {
    let guid_re =
        Regex::new(r"(?i)^\{?[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\}?$")
            .expect("static pattern");
    guid_re.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const VALID: &str = r#"{
        "properties": [
            {
                "guid": "{4BB56516-F354-44CF-A5AA-96B52E968CFD}",
                "programmaticName": "Comment",
                "uiaType": "string"
            },
            {
                "guid": "e33e07c9-7845-4a1d-b85e-2d0ec93f30a2",
                "programmaticName": "Revision",
                "uiaType": "int"
            }
        ]
    }"#;

    #[test]
    fn test_valid_config_loads() {
        let config = CustomPropertyConfig::load_from_str(VALID).unwrap();
        assert_eq!(config.properties.len(), 2);
        assert_eq!(config.properties[0].programmatic_name, "Comment");
        assert_eq!(config.properties[1].data_type, PropertyDataType::Int);
    }

    #[test]
    fn test_lookup_by_guid_is_case_insensitive() {
        let config = CustomPropertyConfig::load_from_str(VALID).unwrap();
        let found = config
            .by_guid("E33E07C9-7845-4A1D-B85E-2D0EC93F30A2")
            .unwrap();
        assert_eq!(found.programmatic_name, "Revision");
        assert!(config.by_guid("00000000-0000-0000-0000-000000000000").is_none());
    }

    #[test]
    fn test_empty_guid_rejects_whole_config() {
        let content = r#"{
            "properties": [
                {"guid": "", "programmaticName": "Comment", "uiaType": "string"}
            ]
        }"#;
        let err = CustomPropertyConfig::load_from_str(content).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProperty { .. }));
        assert!(err.to_string().contains("guid must not be empty"));
    }

    #[test]
    fn test_malformed_guid_rejected() {
        let content = r#"{
            "properties": [
                {"guid": "not-a-guid", "programmaticName": "Comment", "uiaType": "string"}
            ]
        }"#;
        let err = CustomPropertyConfig::load_from_str(content).unwrap_err();
        assert!(err.to_string().contains("not a valid GUID"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let content = r#"{
            "properties": [
                {
                    "guid": "{4BB56516-F354-44CF-A5AA-96B52E968CFD}",
                    "programmaticName": "Comment",
                    "uiaType": "guid"
                }
            ]
        }"#;
        let err = CustomPropertyConfig::load_from_str(content).unwrap_err();
        assert!(err.to_string().contains("Unknown property data type"));
    }

    #[test]
    fn test_missing_name_rejected() {
        let content = r#"{
            "properties": [
                {"guid": "{4BB56516-F354-44CF-A5AA-96B52E968CFD}", "uiaType": "string"}
            ]
        }"#;
        let err = CustomPropertyConfig::load_from_str(content).unwrap_err();
        assert!(err.to_string().contains("programmaticName"));
    }

    #[test]
    fn test_not_json_is_a_json_error() {
        let err = CustomPropertyConfig::load_from_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_empty_document_is_empty_config() {
        let config = CustomPropertyConfig::load_from_str("{}").unwrap();
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        let config = CustomPropertyConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.properties.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err =
            CustomPropertyConfig::load_from_file(Path::new("/nonexistent/props.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
