use crate::utils::error::{ModelError, Result};
use chrono::{DateTime, FixedOffset, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ModelError::MissingFieldError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::InvalidFieldValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 解析 ISO 8601 (RFC 3339) 時間字串
pub fn validate_iso8601(field_name: &str, value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|e| ModelError::InvalidFieldValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Invalid ISO 8601 timestamp: {}", e),
    })
}

/// 驗證 `HH:mm` 格式的時鐘時間
pub fn validate_clock_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    // chrono 接受單位數小時，這裡要求固定兩位數
    if value.len() != 5 {
        return Err(ModelError::InvalidFieldValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected HH:mm".to_string(),
        });
    }

    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ModelError::InvalidFieldValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected HH:mm: {}", e),
    })
}

fn utc_offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^UTC(?:[+-](?:0\d|1[0-4])(?::[0-5]\d)?)?$").expect("valid UTC offset regex")
    })
}

/// 驗證 `UTC`、`UTC+08`、`UTC-03:30` 形式的時區
pub fn validate_utc_offset(field_name: &str, value: &str) -> Result<()> {
    if !utc_offset_pattern().is_match(value) {
        return Err(ModelError::InvalidFieldValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected UTC, UTC+HH or UTC+HH:MM".to_string(),
        });
    }
    Ok(())
}
