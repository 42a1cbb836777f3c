use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Identifier shared by the primary key and every reference to a record.
pub type RecordId = String;

/// Fresh record identifier. Callers must treat the value as opaque.
pub fn new_id() -> RecordId {
    Uuid::now_v7().to_string()
}

/// Server timestamp at second precision, the resolution records are stamped with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
