//! HTTP request handlers for the REST API.

pub mod activity;
pub mod category;
pub mod group;
pub mod misc;
pub mod presence;
pub mod record;
pub mod tag;
