// Read shape of a logbook entry as the list view renders it.

use serde::{Deserialize, Serialize};

use crate::modules::logbook::core::entry::LogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Event,
    ShiftChange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryView {
    pub id: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}

impl From<&LogEntry> for LogEntryView {
    fn from(entry: &LogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            date: entry.date.clone(),
            time: entry.time.clone(),
            entry_type: if entry.is_shift_change() {
                EntryType::ShiftChange
            } else {
                EntryType::Event
            },
            identifier: entry.identifier().to_string(),
            description: entry.description().to_string(),
            informed_to: entry.informed_to().to_string(),
            employee_name: entry.employee_name().map(str::to_string),
        }
    }
}
