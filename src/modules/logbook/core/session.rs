// Session-scoped convenience state: the operator currently on shift.
//
// Only successful record-event and record-shift-change commands move it.
// It is not part of the log and is never exported.

use chrono::NaiveDateTime;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::modules::logbook::core::validation::{DATE_FORMAT, TIME_FORMAT};

/// Prefill for a new general event form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFormDefaults {
    pub date: String,
    pub time: String,
    pub employee_name: Option<String>,
}

#[derive(Debug, Default)]
pub struct SessionContext {
    current_operator: RwLock<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current_operator(&self) -> Option<String> {
        self.current_operator.read().await.clone()
    }

    pub async fn set_current_operator(&self, operator: Option<String>) {
        *self.current_operator.write().await = operator;
    }

    pub async fn event_form_defaults(&self, now: NaiveDateTime) -> EventFormDefaults {
        EventFormDefaults {
            date: now.format(DATE_FORMAT).to_string(),
            time: now.format(TIME_FORMAT).to_string(),
            employee_name: self.current_operator().await,
        }
    }
}
