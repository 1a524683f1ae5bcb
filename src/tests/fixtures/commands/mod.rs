pub mod record_event;
pub mod update_event;
