pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::CheckManifest;
pub use crate::core::{check_payload, EnumKind, ManifestRunner, PayloadKind};
pub use domain::{
    CampaignEventFilter, ClosedStringEnum, DimensionType, Duration, EventDimensions, FilterType,
    Frequency, QuietTime, RecencyDimension, RecencyType, Schedule, SegmentBehaviors, SetDimension,
};
pub use utils::error::{ModelError, Result};
