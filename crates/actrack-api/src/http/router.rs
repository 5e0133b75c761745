//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/`. Presence routes are mounted twice:
//! `/api/presence/*` and the `/api/discord_presence/*` alias used by older
//! frontends.
//! Middleware: CORS, tracing.
//!
//! When the configured web directory exists, the built SPA is served from
//! it. API routes take priority; unknown paths fall through to the SPA's
//! `index.html` for client-side routing.

use actrack_infra::config::resolve_web_dir;
use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = resolve_web_dir(&state.config);

    let api_routes = Router::new()
        .route("/hello", get(handlers::misc::hello))
        // Groups
        .route(
            "/activity_groups",
            get(handlers::group::list_groups).post(handlers::group::create_group),
        )
        .route(
            "/activity_groups/{id}",
            put(handlers::group::update_group).delete(handlers::group::delete_group),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/categories/{id}",
            put(handlers::category::update_category).delete(handlers::category::delete_category),
        )
        // Activities
        .route(
            "/activities",
            get(handlers::activity::list_activities).post(handlers::activity::create_activity),
        )
        .route(
            "/activities/{id}",
            put(handlers::activity::update_activity).delete(handlers::activity::delete_activity),
        )
        .route(
            "/activities/{id}/tags",
            put(handlers::activity::set_activity_tags),
        )
        // Records
        .route(
            "/records",
            get(handlers::record::list_records).post(handlers::record::create_record),
        )
        .route(
            "/records/{id}",
            put(handlers::record::update_record).delete(handlers::record::delete_record),
        )
        // Tags
        .route(
            "/tags",
            get(handlers::tag::list_tags).post(handlers::tag::create_tag),
        )
        .route(
            "/tags/{id}",
            put(handlers::tag::update_tag).delete(handlers::tag::delete_tag),
        )
        .nest("/presence", presence_routes())
        .nest("/discord_presence", presence_routes());

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::misc::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.exists() {
        let index_path = web_dir.join("index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "SPA static file serving enabled");
    }

    router
}

fn presence_routes() -> Router<AppState> {
    Router::new()
        .route("/start", post(handlers::presence::start_presence))
        .route("/update", post(handlers::presence::update_presence))
        .route("/stop", post(handlers::presence::stop_presence))
        .route("/status", get(handlers::presence::presence_status))
}
