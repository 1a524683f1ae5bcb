use crate::modules::logbook::core::decision::Decision;
use crate::modules::logbook::core::entry::{EntryKind, LogEntry};
use crate::modules::logbook::core::validation::{
    DecideError, canonical_date, canonical_time, validate_general_event,
};
use crate::modules::logbook::use_cases::update_event::command::UpdateEvent;

pub fn decide_update_event(command: UpdateEvent) -> Decision {
    match build_entry(&command) {
        Ok(entry) => Decision::Accepted { entry },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn build_entry(command: &UpdateEvent) -> Result<LogEntry, DecideError> {
    Ok(LogEntry {
        id: command.id,
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
