use crate::config::toml_config::{CheckManifest, Expectation, PayloadCheck};
use crate::core::payload::{check_payload, CheckedPayload};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct CheckOutcome {
    pub name: String,
    pub expected: Expectation,
    pub result: Result<CheckedPayload>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self.expected {
            Expectation::Valid => self.result.is_ok(),
            Expectation::Invalid => self.result.is_err(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<CheckOutcome>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// 依型別化模型執行清單中的每個檢查
pub struct ManifestRunner {
    base_dir: PathBuf,
}

impl ManifestRunner {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 以清單檔所在目錄作為相對路徑的基準
    pub fn for_manifest_file(manifest_path: &Path) -> Self {
        let base_dir = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(base_dir)
    }

    fn load_payload(&self, check: &PayloadCheck) -> Result<String> {
        match (&check.payload, &check.path) {
            (Some(payload), None) => Ok(payload.clone()),
            (None, Some(path)) => {
                let full_path = self.base_dir.join(path);
                tracing::debug!(
                    "Reading payload for '{}' from {}",
                    check.name,
                    full_path.display()
                );
                Ok(std::fs::read_to_string(full_path)?)
            }
            _ => Err(ModelError::ConfigError {
                message: format!(
                    "Check '{}' must set exactly one of 'path' or 'payload'",
                    check.name
                ),
            }),
        }
    }

    /// 清單未通過驗證或 IO 錯誤時直接中止；負載本身的錯誤記錄在結果中
    pub fn run(&self, manifest: &CheckManifest) -> Result<RunSummary> {
        manifest.validate()?;

        tracing::info!(
            "Running manifest '{}' ({} checks)",
            manifest.manifest.name,
            manifest.checks.len()
        );

        let mut summary = RunSummary::default();

        for check in &manifest.checks {
            let json = self.load_payload(check)?;
            let outcome = CheckOutcome {
                name: check.name.clone(),
                expected: check.expect,
                result: check_payload(check.kind, &json),
            };

            match (&outcome.result, outcome.passed()) {
                (Ok(_), true) => tracing::info!("✅ {} ({}): valid", check.name, check.kind),
                (Err(e), true) => tracing::info!(
                    "✅ {} ({}): rejected as expected: {}",
                    check.name,
                    check.kind,
                    e
                ),
                (Ok(_), false) => tracing::warn!(
                    "❌ {} ({}): accepted but expected invalid",
                    check.name,
                    check.kind
                ),
                (Err(e), false) => tracing::warn!("❌ {} ({}): {}", check.name, check.kind, e),
            }

            summary.outcomes.push(outcome);
        }

        tracing::info!(
            "Manifest '{}' finished: {} passed, {} failed",
            manifest.manifest.name,
            summary.passed(),
            summary.failed()
        );

        Ok(summary)
    }
}
