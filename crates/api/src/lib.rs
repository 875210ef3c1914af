//! Praise API: backend-for-frontend for the milestone dashboard

use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full router
pub fn app(state: Arc<AppState>) -> Router {
    let static_service = ServeDir::new(&state.config.static_dir)
        .fallback(routes::pages::unknown.into_service());

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/auth/login", get(routes::auth::login))
        .route("/auth/me", get(routes::auth::me))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/api/github/repositories", get(routes::github::list))
        .route("/api/repositories", get(routes::repositories::list))
        .route(
            "/api/repositories/import",
            post(routes::repositories::import),
        )
        .route("/api/repositories/:id", get(routes::repositories::get))
        .route(
            "/api/repositories/:id/milestones",
            get(routes::milestones::get),
        )
        .route("/api/badges/check", post(routes::badges::check))
        .route(
            "/api/badges/repository/:id",
            get(routes::badges::user_badges),
        )
        .route(
            "/api/badges/repository/:id/leaderboard",
            get(routes::badges::leaderboard),
        )
        // Dashboard pages go through the route guard
        .route("/", get(routes::pages::page))
        .route("/signup", get(routes::pages::page))
        .route("/login", get(routes::pages::page))
        .route("/home", get(routes::pages::page))
        .with_state(state)
        .fallback_service(static_service)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
