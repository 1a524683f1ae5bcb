use crate::modules::logbook::core::entry::EntryId;

/// Replace the entry with `id` by a general event built from these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub id: EntryId,
    pub date: String,
    pub time: String,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}
