// Domain layer: closed enumerations and the request/response models that carry them.

pub mod closed_enum;
pub mod enums;
pub mod schedule;
pub mod segment;

pub use closed_enum::ClosedStringEnum;
pub use enums::{DimensionType, Duration, FilterType, Frequency, RecencyType};
pub use schedule::{CampaignEventFilter, EventDimensions, QuietTime, Schedule, IMMEDIATE_START};
pub use segment::{RecencyDimension, SegmentBehaviors, SetDimension};
