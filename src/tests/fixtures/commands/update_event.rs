use crate::modules::logbook::core::entry::EntryId;
use crate::modules::logbook::use_cases::update_event::command::UpdateEvent;

/// Valid replacement for the entry `id`, deliberately different from every
/// field of `make_general_event_entry`.
pub fn make_update_event(id: EntryId) -> UpdateEvent {
    UpdateEvent {
        id,
        date: "2024-01-16".into(),
        time: "10:30".into(),
        identifier: "vlv".into(),
        description: "Valve replaced".into(),
        informed_to: "Maintenance".into(),
        employee_name: Some("John Doe".into()),
    }
}
