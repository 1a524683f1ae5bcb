use crate::modules::logbook::core::entry::{
    EntryId, EntryKind, GeneralEvent, LogEntry, ShiftChange,
};

pub fn make_general_event_entry() -> LogEntry {
    LogEntry {
        id: EntryId::mint(),
        date: "2024-01-15".into(),
        time: "08:00".into(),
        kind: EntryKind::GeneralEvent(GeneralEvent {
            identifier: "ABC".into(),
            description: "Pump failure".into(),
            informed_to: "Supervisor".into(),
            employee_name: Some("John Doe".into()),
        }),
    }
}

pub fn make_shift_change_entry() -> LogEntry {
    shift_change_on("2024-01-15", "Maria Lopez")
}

pub fn event_on(date: &str, identifier: &str) -> LogEntry {
    let mut entry = make_general_event_entry();
    entry.date = date.to_string();
    if let EntryKind::GeneralEvent(event) = &mut entry.kind {
        event.identifier = identifier.to_string();
    }
    entry
}

pub fn shift_change_on(date: &str, employee_name: &str) -> LogEntry {
    LogEntry {
        id: EntryId::mint(),
        date: date.to_string(),
        time: "08:00".into(),
        kind: EntryKind::ShiftChange(ShiftChange {
            employee_name: employee_name.to_string(),
        }),
    }
}

pub fn without_operator(mut entry: LogEntry) -> LogEntry {
    if let EntryKind::GeneralEvent(event) = &mut entry.kind {
        event.employee_name = None;
    }
    entry
}
