use thiserror::Error;

use crate::modules::logbook::core::entry::EntryId;
use crate::shared::infrastructure::entry_store::EntryStoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] EntryStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("entry not found: {0}")]
    NotFound(EntryId),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}
