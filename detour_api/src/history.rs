use jiff::Timestamp;
use serde::Serialize;

/// Oldest entries fall off once the log is full.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// A route the user chose to keep after the engine answered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub timestamp: Timestamp,
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub algorithm: String,
    pub total_distance: u64,
    pub total_traffic: u64,
}

/// In-memory route log, newest first. The engine never writes here; the
/// caller records results after receiving them.
#[derive(Default)]
pub struct RouteHistory {
    records: Vec<RouteRecord>,
}

impl RouteHistory {
    pub fn append(&mut self, record: RouteRecord) {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
