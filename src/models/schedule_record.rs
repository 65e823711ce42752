use super::ChordSymbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduling state of one reviewed chord. Chords never reviewed have no record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub chord_symbol: ChordSymbol,
    pub next_review: DateTime<Utc>,
    /// Minutes, always >= 1
    pub interval: u32,
}

impl ScheduleRecord {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    /// Chords with a record
    pub tracked: usize,
    pub due: usize,
}
