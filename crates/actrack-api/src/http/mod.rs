//! HTTP/REST API layer for actrack.
//!
//! Axum-based JSON API under `/api/` with CORS support and an optional SPA
//! fallback for the built frontend.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
