use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for field '{field}': '{value}' ({reason})")]
    InvalidFieldValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// 錯誤分類，CLI 依此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端傳入的值不合法
    Input,
    /// 負載內容無法解析或未通過驗證
    Payload,
    Configuration,
    System,
}

impl ModelError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Input,
            Self::MissingFieldError { .. }
            | Self::InvalidFieldValueError { .. }
            | Self::SerializationError(_) => ErrorCategory::Payload,
            Self::TomlError { .. } | Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }
}

impl ErrorCategory {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Input => 2,
            ErrorCategory::Payload => 1,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// 取得 CLI 應使用的退出碼；系統錯誤回傳 None，交由 anyhow 回報
pub fn exit_code_of(error: &anyhow::Error) -> Option<i32> {
    match error.downcast_ref::<ModelError>().map(ModelError::category) {
        None | Some(ErrorCategory::System) => None,
        Some(category) => Some(category.exit_code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = ModelError::invalid_argument("Cannot create enum from BOGUS value!");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: Cannot create enum from BOGUS value!");
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_exit_code_of_wrapped_errors() {
        let input = anyhow::Error::new(ModelError::invalid_argument("YEARLY"))
            .context("parsing frequency");
        assert_eq!(exit_code_of(&input), Some(2));

        let config = anyhow::Error::new(ModelError::ConfigError {
            message: "no checks".to_string(),
        });
        assert_eq!(exit_code_of(&config), Some(3));

        let io = anyhow::Error::new(ModelError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "checks.toml",
        )))
        .context("Failed to load manifest checks.toml");
        assert_eq!(exit_code_of(&io), None);

        assert_eq!(exit_code_of(&anyhow::anyhow!("unrelated")), None);
    }

    #[test]
    fn test_category_exit_codes() {
        let missing = ModelError::MissingFieldError {
            field: "StartTime".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Payload);
        assert_eq!(missing.category().exit_code(), 1);

        let config = ModelError::ConfigError {
            message: "no checks".to_string(),
        };
        assert_eq!(config.category().exit_code(), 3);
    }
}
