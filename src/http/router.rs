//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Users
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/{user_id}", get(handlers::get_user))
        // Timetable CRUD, scoped per owner
        .route(
            "/users/{user_id}/timetables",
            get(handlers::list_timetables).post(handlers::create_timetable),
        )
        .route(
            "/users/{user_id}/timetables/{timetable_id}",
            get(handlers::get_timetable)
                .put(handlers::update_timetable)
                .delete(handlers::delete_timetable),
        )
        // Timetable events
        .route(
            "/users/{user_id}/timetables/{timetable_id}/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/users/{user_id}/timetables/{timetable_id}/events/{event_id}",
            axum::routing::put(handlers::update_event).delete(handlers::delete_event),
        )
        .route(
            "/users/{user_id}/timetables/{timetable_id}/apply-template",
            post(handlers::apply_template),
        )
        // Schedule resolution
        .route(
            "/users/{user_id}/firing-plan/{date}",
            get(handlers::get_firing_plan),
        )
        // Templates
        .route(
            "/templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route(
            "/templates/{template_id}",
            get(handlers::get_template)
                .put(handlers::update_template)
                .delete(handlers::delete_template),
        )
        // Holidays
        .route(
            "/holidays",
            get(handlers::list_holidays).post(handlers::create_holiday),
        )
        .route(
            "/holidays/{holiday_id}",
            axum::routing::put(handlers::update_holiday).delete(handlers::delete_holiday),
        )
        // Sounds (metadata only; blobs live elsewhere)
        .route(
            "/sounds",
            get(handlers::list_sounds).post(handlers::create_sound),
        )
        .route(
            "/sounds/{sound_id}",
            get(handlers::get_sound)
                .put(handlers::rename_sound)
                .delete(handlers::delete_sound),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new())
            as Arc<dyn crate::db::repository::FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
