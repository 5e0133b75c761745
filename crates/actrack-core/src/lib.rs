//! Business logic and repository trait definitions for actrack.
//!
//! This crate defines the "ports" (repository traits, presence client
//! traits) that the infrastructure layer implements, the CRUD services, and
//! the presence session manager. It depends only on `actrack-types` --
//! never on `actrack-infra` or any database/IO crate.

pub mod presence;
pub mod repository;
pub mod service;
