//! Shared domain types for actrack.
//!
//! Groups, categories, activities, records and tags, the presence payload
//! types, request bodies, configuration and error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod activity;
pub mod category;
pub mod config;
pub mod error;
pub mod group;
pub mod presence;
pub mod record;
pub mod tag;
