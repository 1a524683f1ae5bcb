// Intent to log that a new operator took over the shift.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShiftChange {
    pub date: String,
    pub time: String,
    pub employee_name: String,
}
