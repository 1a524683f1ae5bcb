use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::Local;

use crate::modules::logbook::core::session::EventFormDefaults;
use crate::modules::logbook::use_cases::record_event::command::RecordEvent;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEventFormDefaults {
    pub date: String,
    pub time: String,
    pub employee_name: Option<String>,
}

impl From<EventFormDefaults> for GqlEventFormDefaults {
    fn from(v: EventFormDefaults) -> Self {
        Self {
            date: v.date,
            time: v.time,
            employee_name: v.employee_name,
        }
    }
}

#[derive(Default)]
pub struct RecordEventMutation;

#[Object]
impl RecordEventMutation {
    #[allow(clippy::too_many_arguments)]
    async fn record_event(
        &self,
        context: &Context<'_>,
        date: String,
        time: String,
        identifier: String,
        description: String,
        informed_to: String,
        employee_name: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = RecordEvent {
            date,
            time,
            identifier,
            description,
            informed_to,
            employee_name,
        };

        let entry = state
            .record_event_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(entry.id.to_string()))
    }
}

#[derive(Default)]
pub struct EventFormDefaultsQuery;

#[Object]
impl EventFormDefaultsQuery {
    async fn event_form_defaults(&self, context: &Context<'_>) -> GqlEventFormDefaults {
        let state = context.data_unchecked::<AppState>();
        state
            .session
            .event_form_defaults(Local::now().naive_local())
            .await
            .into()
    }
}
