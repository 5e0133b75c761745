//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (actrack-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod activity;
pub mod category;
pub mod group;
pub mod record;
pub mod tag;
