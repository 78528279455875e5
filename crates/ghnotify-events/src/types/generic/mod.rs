mod generic_event;

pub use generic_event::GhGenericEvent;
