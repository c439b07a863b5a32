use crate::{id::Id, time::Timestamp};

/// A single wait time observation for an establishment.
///
/// Samples are only ever appended; the current wait time
/// is the one with the latest timestamp.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitTimeSample {
    pub establishment_id : Id,
    pub created_at       : Timestamp,
    /// Minutes
    pub estimated_wait   : u32,
}

impl WaitTimeSample {
    pub fn now(establishment_id: Id, estimated_wait: u32) -> Self {
        Self {
            establishment_id,
            created_at: Timestamp::now(),
            estimated_wait,
        }
    }
}
