//! Presence broadcasting: the client port and the session manager.
//!
//! The manager keeps at most one connected session per group and at most
//! one connected session process-wide. The client traits are implemented
//! in actrack-infra (Discord) and by mocks in tests; `boxed` erases the
//! concrete client for the application state.

pub mod boxed;
pub mod client;
pub mod service;
