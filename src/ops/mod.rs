pub mod calendar_notes;
pub mod clock;
pub mod field;
pub mod passcode;
pub mod record_list;
