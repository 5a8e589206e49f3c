// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default schema version for policy files
fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_true() -> bool {
    true
}

/// Which verdicts reject an image.
///
/// `DECODER_ERROR`, `FORBIDDEN_OPERANDS` and `FORBIDDEN` always reject; only
/// the architecturally unspecified verdicts are negotiable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValidationPolicy {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_true")]
    pub reject_unknown: bool,
    #[serde(default = "default_true")]
    pub reject_undefined: bool,
    #[serde(default = "default_true")]
    pub reject_unpredictable: bool,
    /// Caps how many violations a report lists. Counting is unaffected.
    #[serde(default)]
    pub max_reported_violations: Option<usize>,
    /// Largest image the loader accepts, e.g. "64MB".
    #[serde(default)]
    pub max_image_size: Option<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reject_unknown: true,
            reject_undefined: true,
            reject_unpredictable: true,
            max_reported_violations: None,
            max_image_size: None,
        }
    }
}

impl ValidationPolicy {
    /// Loads a policy from YAML, or JSON when the file ends in `.json`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read validation policy at {:?}", path))?;

        let policy: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse validation policy JSON from {:?}", path))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse validation policy YAML from {:?}", path))?
        };
        policy.validate()?;
        tracing::debug!("Loaded validation policy from {:?}", path);
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema_version != "1.0" {
            anyhow::bail!(
                "Unsupported schema_version '{}'. Supported versions: '1.0'",
                self.schema_version
            );
        }

        if let Some(size) = &self.max_image_size {
            parse_size(size).context("Invalid 'max_image_size'")?;
        }

        Ok(())
    }

    /// The image size limit in bytes, if one is set.
    pub fn max_image_bytes(&self) -> Result<Option<u64>> {
        self.max_image_size.as_deref().map(parse_size).transpose()
    }
}

pub fn parse_size(size_str: &str) -> Result<u64> {
    use human_size::{Byte, Size, SpecificSize};
    let s: Size = size_str
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid size format: {}", e))?;
    let bytes: SpecificSize<Byte> = s.into();
    Ok(bytes.value() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_reject_everything_unsafe() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.schema_version, "1.0");
        assert!(policy.reject_unknown);
        assert!(policy.reject_undefined);
        assert!(policy.reject_unpredictable);
        assert_eq!(policy.max_reported_violations, None);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let policy: ValidationPolicy = serde_yaml::from_str("{}").unwrap();
        assert_eq!(policy, ValidationPolicy::default());
    }

    #[test]
    fn test_invalid_version() {
        let policy: ValidationPolicy = serde_yaml::from_str("schema_version: \"2.0\"").unwrap();
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("Unsupported schema_version '2.0'"));
    }

    #[test]
    fn test_image_size_limit() {
        let policy: ValidationPolicy = serde_yaml::from_str("max_image_size: \"2KB\"").unwrap();
        assert_eq!(policy.max_image_bytes().unwrap(), Some(2048));

        let policy: ValidationPolicy = serde_yaml::from_str("max_image_size: \"lots\"").unwrap();
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_from_file_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"reject_unknown": false, "max_reported_violations": 3}}"#).unwrap();

        let policy = ValidationPolicy::from_file(file.path()).unwrap();
        assert!(!policy.reject_unknown);
        assert!(policy.reject_unpredictable);
        assert_eq!(policy.max_reported_violations, Some(3));
    }

    #[test]
    fn test_from_file_reports_path() {
        let err = ValidationPolicy::from_file("/nonexistent/policy.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("policy.yaml"));
    }
}
