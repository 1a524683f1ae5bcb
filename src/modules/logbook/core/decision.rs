use crate::modules::logbook::core::entry::LogEntry;
use crate::modules::logbook::core::validation::DecideError;

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { entry: LogEntry },
    Rejected { reason: DecideError },
}
