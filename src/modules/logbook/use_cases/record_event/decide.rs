use crate::modules::logbook::core::decision::Decision;
use crate::modules::logbook::core::entry::{EntryId, EntryKind, LogEntry};
use crate::modules::logbook::core::validation::{
    DecideError, canonical_date, canonical_time, validate_general_event,
};
use crate::modules::logbook::use_cases::record_event::command::RecordEvent;

pub fn decide_record_event(command: RecordEvent, id: EntryId) -> Decision {
    match build_entry(&command, id) {
        Ok(entry) => Decision::Accepted { entry },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn build_entry(command: &RecordEvent, id: EntryId) -> Result<LogEntry, DecideError> {
    Ok(LogEntry {
        id,
        date: canonical_date(&command.date)?,
        time: canonical_time(&command.time)?,
        kind: EntryKind::GeneralEvent(validate_general_event(
            &command.identifier,
            &command.description,
            &command.informed_to,
            command.employee_name.as_deref(),
        )?),
    })
}
