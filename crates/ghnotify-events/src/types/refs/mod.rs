mod create_event;
mod delete_event;

pub use create_event::GhCreateEvent;
pub use delete_event::GhDeleteEvent;
