//! Auth routes (OAuth itself lives in the backend)

use axum::{
    extract::State,
    http::HeaderMap,
    response::Redirect,
    Json,
};
use common::models::User;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

/// Send the browser to the backend's GitHub OAuth entry point
pub async fn login(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Redirect {
    Redirect::temporary(&state.client_for(&headers).login_url())
}

pub async fn me(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Json<User>> {
    let user = state.client_for(&headers).me().await?;
    Ok(Json(user))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    state.client_for(&headers).logout().await?;
    info!("Session logged out");
    Ok(Json(json!({ "success": true })))
}
