// Shared test fixture for the RecordEvent command, seeded from
// `json/record_event.json`.

use crate::modules::logbook::use_cases::record_event::command::RecordEvent;
use serde::Deserialize;

const RECORD_EVENT_JSON: &str = include_str!("json/record_event.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEventDto {
    pub date: String,
    pub time: String,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}

pub struct RecordEventBuilder {
    inner: RecordEvent,
}

impl Default for RecordEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordEventBuilder {
    pub fn new() -> Self {
        let dto: RecordEventDto = serde_json::from_str(RECORD_EVENT_JSON).unwrap();

        Self {
            inner: RecordEvent {
                date: dto.date,
                time: dto.time,
                identifier: dto.identifier,
                description: dto.description,
                informed_to: dto.informed_to,
                employee_name: dto.employee_name,
            },
        }
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn identifier(mut self, v: impl Into<String>) -> Self {
        self.inner.identifier = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn informed_to(mut self, v: impl Into<String>) -> Self {
        self.inner.informed_to = v.into();
        self
    }

    pub fn employee_name(mut self, v: Option<&str>) -> Self {
        self.inner.employee_name = v.map(str::to_string);
        self
    }

    pub fn build(self) -> RecordEvent {
        self.inner
    }
}

#[cfg(test)]
mod record_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordEventBuilder::default().build();

        assert_eq!(
            built,
            RecordEvent {
                date: "2024-01-15".into(),
                time: "08:00".into(),
                identifier: "ABC".into(),
                description: "Pump failure".into(),
                informed_to: "Supervisor".into(),
                employee_name: Some("John Doe".into()),
            }
        );
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = RecordEventBuilder::new()
            .date("2024-02-01")
            .time("23:59")
            .identifier("vlv")
            .description("Valve stuck")
            .informed_to("Maintenance")
            .employee_name(None)
            .build();

        assert_eq!(built.date, "2024-02-01");
        assert_eq!(built.time, "23:59");
        assert_eq!(built.identifier, "vlv");
        assert_eq!(built.description, "Valve stuck");
        assert_eq!(built.informed_to, "Maintenance");
        assert_eq!(built.employee_name, None);
    }
}
