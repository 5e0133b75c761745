//! Infrastructure layer for actrack.
//!
//! Contains implementations of the ports defined in `actrack-core`:
//! SQLite storage for every entity, the Discord presence client, the
//! `config.toml` loader, data directory resolution and sample data seeding.

pub mod config;
pub mod filesystem;
pub mod presence;
pub mod seed;
pub mod sqlite;
