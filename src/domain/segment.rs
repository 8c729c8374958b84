use crate::domain::enums::{DimensionType, Duration, RecencyType};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// 區段條件：端點在指定期間內是否活躍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecencyDimension {
    pub duration: Duration,
    pub recency_type: RecencyType,
}

impl RecencyDimension {
    pub fn new(duration: Duration, recency_type: RecencyType) -> Self {
        Self {
            duration,
            recency_type,
        }
    }
}

impl Validate for RecencyDimension {
    fn validate(&self) -> Result<()> {
        // 兩個欄位皆為封閉列舉，反序列化成功即代表合法
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SegmentBehaviors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recency: Option<RecencyDimension>,
}

impl SegmentBehaviors {
    pub fn with_recency(mut self, recency: RecencyDimension) -> Self {
        self.recency = Some(recency);
        self
    }
}

impl Validate for SegmentBehaviors {
    fn validate(&self) -> Result<()> {
        if let Some(recency) = &self.recency {
            recency.validate()?;
        }
        Ok(())
    }
}

/// 要包含或排除的值集合，例如事件類型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetDimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_type: Option<DimensionType>,
    pub values: Vec<String>,
}

impl SetDimension {
    pub fn inclusive<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimension_type: Some(DimensionType::Inclusive),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn exclusive<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimension_type: Some(DimensionType::Exclusive),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// 未指定類型時服務端預設為 INCLUSIVE
    pub fn effective_dimension_type(&self) -> DimensionType {
        self.dimension_type.unwrap_or(DimensionType::Inclusive)
    }
}

impl Validate for SetDimension {
    fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(ModelError::InvalidFieldValueError {
                field: "Values".to_string(),
                value: "[]".to_string(),
                reason: "At least one value is required".to_string(),
            });
        }

        for value in &self.values {
            validate_non_empty_string("Values", value)?;
        }

        Ok(())
    }
}
