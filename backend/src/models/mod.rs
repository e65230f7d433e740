pub mod reset_event;
