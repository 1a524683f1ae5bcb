use crate::modules::logbook::core::decision::Decision;
use crate::modules::logbook::core::entry::{EntryId, EntryKind, LogEntry};
use crate::modules::logbook::core::validation::{
    DecideError, canonical_date, canonical_time, validate_shift_change,
};
use crate::modules::logbook::use_cases::record_shift_change::command::RecordShiftChange;

pub fn decide_record_shift_change(command: RecordShiftChange, id: EntryId) -> Decision {
    match build_entry(&command, id) {
        Ok(entry) => Decision::Accepted { entry },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn build_entry(command: &RecordShiftChange, id: EntryId) -> Result<LogEntry, DecideError> {
    Ok(LogEntry {
        id,
        date: canonical_date(&command.date)?,
        time: canonical_time(&command.time)?,
        kind: EntryKind::ShiftChange(validate_shift_change(&command.employee_name)?),
    })
}
