//! Presence client implementations.

pub mod discord;
