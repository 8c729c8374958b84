use crate::domain::{
    CampaignEventFilter, ClosedStringEnum, DimensionType, Duration, FilterType, Frequency,
    RecencyDimension, RecencyType, Schedule, SegmentBehaviors,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 本 crate 的封閉列舉，可依名稱存取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EnumKind {
    Duration,
    FilterType,
    Frequency,
    RecencyType,
    DimensionType,
}

impl EnumKind {
    pub const ALL: [EnumKind; 5] = [
        EnumKind::Duration,
        EnumKind::FilterType,
        EnumKind::Frequency,
        EnumKind::RecencyType,
        EnumKind::DimensionType,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            EnumKind::Duration => Duration::NAME,
            EnumKind::FilterType => FilterType::NAME,
            EnumKind::Frequency => Frequency::NAME,
            EnumKind::RecencyType => RecencyType::NAME,
            EnumKind::DimensionType => DimensionType::NAME,
        }
    }

    pub fn values(&self) -> Vec<&'static str> {
        match self {
            EnumKind::Duration => Duration::wire_values(),
            EnumKind::FilterType => FilterType::wire_values(),
            EnumKind::Frequency => Frequency::wire_values(),
            EnumKind::RecencyType => RecencyType::wire_values(),
            EnumKind::DimensionType => DimensionType::wire_values(),
        }
    }

    /// 嚴格解析並回傳標準線路值
    pub fn parse(&self, raw: &str) -> Result<&'static str> {
        Ok(match self {
            EnumKind::Duration => Duration::from_value(raw)?.as_wire_value(),
            EnumKind::FilterType => FilterType::from_value(raw)?.as_wire_value(),
            EnumKind::Frequency => Frequency::from_value(raw)?.as_wire_value(),
            EnumKind::RecencyType => RecencyType::from_value(raw)?.as_wire_value(),
            EnumKind::DimensionType => DimensionType::from_value(raw)?.as_wire_value(),
        })
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// 可用來檢查 JSON 負載的模型型別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    Schedule,
    SegmentBehaviors,
    CampaignEventFilter,
    RecencyDimension,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 4] = [
        PayloadKind::Schedule,
        PayloadKind::SegmentBehaviors,
        PayloadKind::CampaignEventFilter,
        PayloadKind::RecencyDimension,
    ];
}

/// 名稱須與 serde 的 kebab-case 名稱一致
impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayloadKind::Schedule => "schedule",
            PayloadKind::SegmentBehaviors => "segment-behaviors",
            PayloadKind::CampaignEventFilter => "campaign-event-filter",
            PayloadKind::RecencyDimension => "recency-dimension",
        };
        f.write_str(name)
    }
}

/// 已嚴格反序列化並通過驗證的負載
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedPayload {
    pub kind: PayloadKind,
    /// 型別化模型重新序列化的結果，線路值為標準形式
    pub canonical: serde_json::Value,
}

impl CheckedPayload {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.canonical)?)
    }
}

fn check_typed<T>(json: &str) -> Result<serde_json::Value>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let model: T = serde_json::from_str(json)?;
    model.validate()?;
    Ok(serde_json::to_value(&model)?)
}

pub fn check_payload(kind: PayloadKind, json: &str) -> Result<CheckedPayload> {
    let canonical = match kind {
        PayloadKind::Schedule => check_typed::<Schedule>(json)?,
        PayloadKind::SegmentBehaviors => check_typed::<SegmentBehaviors>(json)?,
        PayloadKind::CampaignEventFilter => check_typed::<CampaignEventFilter>(json)?,
        PayloadKind::RecencyDimension => check_typed::<RecencyDimension>(json)?,
    };

    Ok(CheckedPayload { kind, canonical })
}
