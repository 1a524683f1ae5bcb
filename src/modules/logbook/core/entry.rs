use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SHIFT_CHANGE_IDENTIFIER: &str = "TURNO";
pub const SHIFT_CHANGE_INFORMED_TO: &str = "Sistema";

/// Identity of a log entry.
///
/// Minted from a UUID v7: ids created by the same process are strictly
/// increasing in creation order, so bulk minting during an import keeps the
/// order of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn mint() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralEvent {
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftChange {
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    GeneralEvent(GeneralEvent),
    ShiftChange(ShiftChange),
}

/// One line of the logbook.
///
/// `date` and `time` stay textual: entries recorded through the use cases
/// carry canonical `YYYY-MM-DD` and `HH:MM`, imported lines keep whatever the
/// file held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: EntryId,
    pub date: String,
    pub time: String,
    pub kind: EntryKind,
}

impl LogEntry {
    pub fn identifier(&self) -> &str {
        match &self.kind {
            EntryKind::GeneralEvent(event) => &event.identifier,
            EntryKind::ShiftChange(_) => SHIFT_CHANGE_IDENTIFIER,
        }
    }

    pub fn description(&self) -> &str {
        match &self.kind {
            EntryKind::GeneralEvent(event) => &event.description,
            EntryKind::ShiftChange(shift) => &shift.employee_name,
        }
    }

    pub fn informed_to(&self) -> &str {
        match &self.kind {
            EntryKind::GeneralEvent(event) => &event.informed_to,
            EntryKind::ShiftChange(_) => SHIFT_CHANGE_INFORMED_TO,
        }
    }

    pub fn employee_name(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::GeneralEvent(event) => event.employee_name.as_deref(),
            EntryKind::ShiftChange(shift) => Some(&shift.employee_name),
        }
    }

    pub fn is_shift_change(&self) -> bool {
        matches!(self.kind, EntryKind::ShiftChange(_))
    }
}
