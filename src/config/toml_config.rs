use crate::core::payload::PayloadKind;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckManifest {
    pub manifest: ManifestInfo,
    #[serde(default)]
    pub checks: Vec<PayloadCheck>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCheck {
    pub name: String,
    pub kind: PayloadKind,
    /// 相對於清單檔所在目錄的 JSON 檔案路徑
    pub path: Option<String>,
    /// 內嵌的 JSON 負載
    pub payload: Option<String>,
    #[serde(default)]
    pub expect: Expectation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    #[default]
    Valid,
    Invalid,
}

impl CheckManifest {
    /// 從 TOML 檔案載入清單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析清單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ModelError::TomlError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${PAYLOAD_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("manifest.name", &self.manifest.name)?;

        if self.checks.is_empty() {
            return Err(ModelError::ConfigError {
                message: format!("Manifest '{}' defines no checks", self.manifest.name),
            });
        }

        let mut seen = HashSet::new();
        for check in &self.checks {
            validate_non_empty_string("checks.name", &check.name)?;

            if !seen.insert(check.name.as_str()) {
                return Err(ModelError::ConfigError {
                    message: format!("Duplicate check name '{}'", check.name),
                });
            }

            match (&check.path, &check.payload) {
                (Some(path), None) => validate_non_empty_string("checks.path", path)?,
                (None, Some(_)) => {}
                _ => {
                    return Err(ModelError::ConfigError {
                        message: format!(
                            "Check '{}' must set exactly one of 'path' or 'payload'",
                            check.name
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Validate for CheckManifest {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_MANIFEST: &str = r#"
[manifest]
name = "campaign-payloads"
description = "Schedules used by the spring campaign"

[[checks]]
name = "weekly"
kind = "schedule"
payload = '{"StartTime":"2024-05-01T10:00:00Z","Frequency":"WEEKLY"}'

[[checks]]
name = "yearly"
kind = "schedule"
payload = '{"StartTime":"IMMEDIATE","Frequency":"YEARLY"}'
expect = "invalid"

[[checks]]
name = "recency"
kind = "recency-dimension"
path = "recency.json"
"#;

    #[test]
    fn test_parse_basic_manifest() {
        let manifest = CheckManifest::from_toml_str(BASIC_MANIFEST).unwrap();

        assert_eq!(manifest.manifest.name, "campaign-payloads");
        assert_eq!(manifest.checks.len(), 3);
        assert_eq!(manifest.checks[0].expect, Expectation::Valid);
        assert_eq!(manifest.checks[1].expect, Expectation::Invalid);
        assert_eq!(manifest.checks[2].kind, PayloadKind::RecencyDimension);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PINPOINT_MODEL_TEST_DIR", "fixtures");

        let manifest = CheckManifest::from_toml_str(
            r#"
[manifest]
name = "env"

[[checks]]
name = "recency"
kind = "recency-dimension"
path = "${PINPOINT_MODEL_TEST_DIR}/recency.json"
"#,
        )
        .unwrap();
        assert_eq!(manifest.checks[0].path.as_deref(), Some("fixtures/recency.json"));

        std::env::remove_var("PINPOINT_MODEL_TEST_DIR");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = CheckManifest::from_toml_str(
            r#"
[manifest]
name = "bad"

[[checks]]
name = "x"
kind = "journey"
payload = "{}"
"#,
        );
        assert!(matches!(result, Err(ModelError::TomlError { .. })));
    }

    #[test]
    fn test_manifest_validation() {
        let empty = CheckManifest::from_toml_str("[manifest]\nname = \"empty\"\n").unwrap();
        assert!(empty.validate().is_err());

        let both = CheckManifest::from_toml_str(
            r#"
[manifest]
name = "both"

[[checks]]
name = "x"
kind = "schedule"
path = "a.json"
payload = "{}"
"#,
        )
        .unwrap();
        assert!(both.validate().is_err());

        let duplicate = CheckManifest::from_toml_str(
            r#"
[manifest]
name = "dup"

[[checks]]
name = "x"
kind = "schedule"
payload = "{}"

[[checks]]
name = "x"
kind = "schedule"
payload = "{}"
"#,
        )
        .unwrap();
        let err = duplicate.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_manifest_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_MANIFEST.as_bytes()).unwrap();

        let manifest = CheckManifest::from_file(temp_file.path()).unwrap();
        assert_eq!(manifest.manifest.name, "campaign-payloads");
    }
}
