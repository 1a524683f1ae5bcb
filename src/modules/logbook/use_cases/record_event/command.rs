// Intent to add a general event at the end of the logbook.
//
// `employee_name` left out means "whoever is on shift": the handler fills it
// from the session before deciding.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEvent {
    pub date: String,
    pub time: String,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}
