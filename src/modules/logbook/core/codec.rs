// Line-based text format used for export, import and the printable view.
//
// Format
// - Shift change:  "{date} {time} - TURNO: {employee}"
// - General event: "{date} {time} - {identifier}: {description} (Informado a: {informed_to}, Operador: {employee})"
//
// Decoding is best effort and never fails: a line that does not carry the
// "(Informado a: .., Operador: ..)" suffix keeps its whole remainder as the
// description and gets "Desconocido" as recipient and operator. Ids are never
// read from the text, every decoded entry gets a freshly minted one. Only
// empty lines are skipped; a whitespace-only line still yields an entry.
//
// Free text containing " - ", ": " or the suffix markers is not escaped and
// may not survive a round trip.

use crate::modules::logbook::core::entry::{
    EntryId, EntryKind, GeneralEvent, LogEntry, SHIFT_CHANGE_IDENTIFIER, ShiftChange,
};

pub const UNKNOWN_FIELD: &str = "Desconocido";

const DATE_TIME_SEPARATOR: &str = " - ";
const IDENTIFIER_SEPARATOR: &str = ": ";
const INFORMED_TO_MARKER: &str = " (Informado a: ";
const OPERATOR_MARKER: &str = ", Operador: ";

pub fn encode_line(entry: &LogEntry) -> String {
    match &entry.kind {
        EntryKind::ShiftChange(shift) => format!(
            "{} {} - {}: {}",
            entry.date, entry.time, SHIFT_CHANGE_IDENTIFIER, shift.employee_name
        ),
        EntryKind::GeneralEvent(event) => format!(
            "{} {} - {}: {}{}{}{}{})",
            entry.date,
            entry.time,
            event.identifier,
            event.description,
            INFORMED_TO_MARKER,
            event.informed_to,
            OPERATOR_MARKER,
            event.employee_name.as_deref().unwrap_or_default()
        ),
    }
}

pub fn encode<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> String {
    entries
        .into_iter()
        .map(encode_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode every non-blank line, in order, minting ids as it goes.
pub fn decode(text: &str) -> Vec<LogEntry> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| decode_line(line, EntryId::mint()))
        .collect()
}

pub fn decode_line(line: &str, id: EntryId) -> LogEntry {
    let (date_time, rest) = line.split_once(DATE_TIME_SEPARATOR).unwrap_or((line, ""));
    let (date, time) = date_time.split_once(' ').unwrap_or((date_time, ""));
    let (identifier, details) = rest.split_once(IDENTIFIER_SEPARATOR).unwrap_or((rest, ""));

    let kind = if identifier == SHIFT_CHANGE_IDENTIFIER {
        EntryKind::ShiftChange(ShiftChange {
            employee_name: details.trim().to_string(),
        })
    } else {
        EntryKind::GeneralEvent(decode_general_event(identifier, details))
    };

    LogEntry {
        id,
        date: date.to_string(),
        time: time.to_string(),
        kind,
    }
}

fn decode_general_event(identifier: &str, details: &str) -> GeneralEvent {
    match split_event_details(details) {
        Some((description, informed_to, employee_name)) => GeneralEvent {
            identifier: identifier.to_string(),
            description: description.to_string(),
            informed_to: informed_to.to_string(),
            employee_name: Some(employee_name.to_string()).filter(|name| !name.is_empty()),
        },
        None => GeneralEvent {
            identifier: identifier.to_string(),
            description: details.to_string(),
            informed_to: UNKNOWN_FIELD.to_string(),
            employee_name: Some(UNKNOWN_FIELD.to_string()),
        },
    }
}

// Splits "<description> (Informado a: <informed_to>, Operador: <employee>)".
// The last occurrence of each marker wins; description and recipient must be
// non-empty, the operator may be.
fn split_event_details(details: &str) -> Option<(&str, &str, &str)> {
    let body = details.strip_suffix(')')?;
    let (head, employee_name) = body.rsplit_once(OPERATOR_MARKER)?;
    let (description, informed_to) = head.rsplit_once(INFORMED_TO_MARKER)?;
    if description.is_empty() || informed_to.is_empty() {
        return None;
    }
    Some((description, informed_to, employee_name))
}
