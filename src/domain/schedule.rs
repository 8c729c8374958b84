use crate::domain::enums::{FilterType, Frequency};
use crate::domain::segment::SetDimension;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{
    validate_clock_time, validate_iso8601, validate_required_field, validate_utc_offset, Validate,
};
use serde::{Deserialize, Serialize};

/// `StartTime` 可用此值表示立即開始
pub const IMMEDIATE_START: &str = "IMMEDIATE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<SetDimension>,
}

impl Validate for EventDimensions {
    fn validate(&self) -> Result<()> {
        if let Some(event_type) = &self.event_type {
            event_type.validate()?;
        }
        Ok(())
    }
}

/// 觸發事件型活動的事件過濾器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignEventFilter {
    pub dimensions: EventDimensions,
    pub filter_type: FilterType,
}

impl CampaignEventFilter {
    pub fn new(filter_type: FilterType, dimensions: EventDimensions) -> Self {
        Self {
            dimensions,
            filter_type,
        }
    }
}

impl Validate for CampaignEventFilter {
    fn validate(&self) -> Result<()> {
        self.dimensions.validate()
    }
}

/// 每日暫停發送訊息的時段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuietTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl QuietTime {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

impl Validate for QuietTime {
    fn validate(&self) -> Result<()> {
        match (&self.start, &self.end) {
            (None, None) => Ok(()),
            (Some(start), Some(end)) => {
                validate_clock_time("QuietTime.Start", start)?;
                validate_clock_time("QuietTime.End", end)?;
                Ok(())
            }
            (Some(_), None) => Err(ModelError::MissingFieldError {
                field: "QuietTime.End".to_string(),
            }),
            (None, Some(_)) => Err(ModelError::MissingFieldError {
                field: "QuietTime.Start".to_string(),
            }),
        }
    }
}

/// 活動的發送排程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_filter: Option<CampaignEventFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_local_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet_time: Option<QuietTime>,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Schedule {
    pub fn new(start_time: impl Into<String>) -> Self {
        Self {
            end_time: None,
            event_filter: None,
            frequency: None,
            is_local_time: None,
            quiet_time: None,
            start_time: start_time.into(),
            timezone: None,
        }
    }

    pub fn immediate() -> Self {
        Self::new(IMMEDIATE_START)
    }

    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn with_event_filter(mut self, event_filter: CampaignEventFilter) -> Self {
        self.event_filter = Some(event_filter);
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_local_time(mut self, is_local_time: bool) -> Self {
        self.is_local_time = Some(is_local_time);
        self
    }

    pub fn with_quiet_time(mut self, quiet_time: QuietTime) -> Self {
        self.quiet_time = Some(quiet_time);
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn starts_immediately(&self) -> bool {
        self.start_time == IMMEDIATE_START
    }

    pub fn is_event_driven(&self) -> bool {
        self.frequency == Some(Frequency::Event)
    }
}

impl Validate for Schedule {
    fn validate(&self) -> Result<()> {
        let start = if self.starts_immediately() {
            None
        } else {
            Some(validate_iso8601("StartTime", &self.start_time)?)
        };

        if let Some(end_time) = &self.end_time {
            let end = validate_iso8601("EndTime", end_time)?;
            if let Some(start) = start {
                if end < start {
                    return Err(ModelError::InvalidFieldValueError {
                        field: "EndTime".to_string(),
                        value: end_time.clone(),
                        reason: format!("EndTime is before StartTime {}", self.start_time),
                    });
                }
            }
        }

        // EVENT 頻率必須搭配事件過濾器
        if self.is_event_driven() {
            validate_required_field("EventFilter", &self.event_filter)?;
        }
        if let Some(event_filter) = &self.event_filter {
            event_filter.validate()?;
        }

        if let Some(quiet_time) = &self.quiet_time {
            quiet_time.validate()?;
        }

        if let Some(timezone) = &self.timezone {
            validate_utc_offset("Timezone", timezone)?;
        }

        Ok(())
    }
}
