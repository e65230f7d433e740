pub mod reset_event_log;
