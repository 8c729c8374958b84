pub mod checker;
pub mod payload;

pub use crate::utils::error::Result;
pub use checker::{CheckOutcome, ManifestRunner, RunSummary};
pub use payload::{check_payload, CheckedPayload, EnumKind, PayloadKind};
