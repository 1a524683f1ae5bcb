use serde::Deserialize;

use crate::modules::logbook::core::filter::EntryFilter;
use crate::shared::application::errors::ApplicationError;

/// Search bar values as they arrive from a client. Blank means "no criterion".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntriesParams {
    pub identifier: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListEntriesParams {
    pub fn to_filter(&self) -> Result<EntryFilter, ApplicationError> {
        EntryFilter::from_raw(
            self.identifier.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
        .map_err(|e| ApplicationError::InvalidQuery(e.to_string()))
    }
}
