//! Dashboard pages behind the route guard

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use milestones::session::{guard, Access, AuthSession, Route};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Serve the dashboard shell, redirecting between public and signed-in pages
pub async fn page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let client = state.client_for(&headers);
    let mut session = AuthSession::new(client.token().map(str::to_string));
    if session.token().is_some() {
        match client.me().await {
            Ok(user) => session.sign_in(user),
            Err(e) => debug!("Not authenticated: {}", e),
        }
    }

    let route = Route::from_path(uri.path());
    if let Access::Redirect(to) = guard(&session, route) {
        debug!("Redirecting {} -> {}", uri.path(), to);
        return Ok(Redirect::temporary(to).into_response());
    }

    let index = Path::new(&state.config.static_dir).join("index.html");
    let html = tokio::fs::read_to_string(&index)
        .await
        .map_err(|e| ApiError::Internal(format!("{}: {}", index.display(), e)))?;
    Ok(Html(html).into_response())
}

/// Unknown paths land on the home page, which the guard then resolves
pub async fn unknown() -> Redirect {
    Redirect::temporary("/home")
}
