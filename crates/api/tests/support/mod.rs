//! Shared helpers: a stub Praise backend and request utilities.

#![allow(dead_code)]

use api::state::AppState;
use axum::body::Body;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::Config;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "Bearer good")
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Not authenticated" })),
    )
        .into_response()
}

fn ok(data: Value) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    ok(json!({ "_id": "u1", "githubUsername": "octocat" }))
}

async fn repository(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id != "repo1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Repository not found or access denied." })),
        )
            .into_response();
    }
    ok(json!({
        "_id": "repo1",
        "name": "praise",
        "language": "Rust",
        "userRole": "contributor",
        "importedAt": "2026-02-01T00:00:00Z"
    }))
}

fn badge(value: u32, awarded: bool) -> Value {
    json!({
        "_id": format!("b{}", value),
        "name": format!("{} PRs", value),
        "description": format!("Open {} pull requests", value),
        "criteriaType": "prs",
        "criteriaValue": value,
        "isAwarded": awarded,
        "currentValue": 7
    })
}

async fn progress(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id != "repo1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Repository not found or access denied." })),
        )
            .into_response();
    }
    ok(json!({
        // Backend has only awarded the first badge; 7 PRs also reaches the second
        "badgeProgress": [badge(1, true), badge(5, false), badge(10, false), badge(25, false)],
        "userStats": {
            "totalPRs": 7, "mergedPRs": 5, "openPRs": 2, "closedPRs": 0,
            "totalCommits": 30, "totalAdditions": 400, "totalDeletions": 0,
            "totalLinesChanged": 400,
            "firstContribution": "2026-01-01T00:00:00Z",
            "lastContribution": "2026-01-10T12:00:00Z"
        },
        "prActivity": [ { "_id": "2026-01-05", "count": 3 }, { "_id": "2026-01-10", "count": 4 } ],
        "userRole": "contributor",
        "chartData": { "badgeStats": { "totalBadges": 4, "earnedBadges": 1, "progressPercentage": 25 } }
    }))
}

async fn logout(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "success": true, "message": "Logged out" })).into_response()
}

/// Ignores the role filter and returns repositories unsorted
async fn repositories(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let repo = |id: &str, role: &str, imported: &str| {
        json!({
            "_id": id,
            "name": id,
            "language": "Rust",
            "userRole": role,
            "importedAt": imported
        })
    };
    ok(json!({
        "repositories": [
            repo("zeta", "owner", "2026-01-01T00:00:00Z"),
            repo("alpha", "contributor", "2026-03-01T00:00:00Z"),
            repo("mid", "owner", "2026-02-01T00:00:00Z")
        ],
        "pagination": {
            "page": q.get("page").and_then(|p| p.parse::<u32>().ok()).unwrap_or(1),
            "limit": q.get("limit").and_then(|l| l.parse::<u32>().ok()).unwrap_or(0),
            "total": 3,
            "pages": 1
        }
    }))
}

async fn user_badges(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id != "repo1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Repository not found or access denied." })),
        )
            .into_response();
    }
    ok(json!([badge(1, true)]))
}

/// One entry per requested slot, so the limit the API forwarded is visible
async fn leaderboard(
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    assert_eq!(id, "repo1");
    let limit: u32 = q.get("limit").and_then(|l| l.parse().ok()).unwrap_or(0);
    let entries: Vec<Value> = (1..=limit)
        .map(|rank| {
            json!({
                "rank": rank,
                "user": { "_id": format!("u{}", rank), "githubUsername": format!("dev{}", rank) },
                "badgeCount": 1,
                "totalPRs": 100 - rank
            })
        })
        .collect();
    ok(json!(entries))
}

async fn check(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if body["repositoryId"] == "quiet" {
        return ok(json!({ "newlyAwarded": [] }));
    }
    let mut awarded = badge(5, true);
    awarded["name"] = json!("Rising Star");
    ok(json!({ "newlyAwarded": [awarded] }))
}

async fn github_repositories(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    ok(json!({ "repositories": [
        { "id": 1, "name": "python_codeforces", "language": "Python", "private": true,
          "stargazersCount": 1, "forksCount": 0,
          "createdAt": "2025-01-01T00:00:00Z", "updatedAt": "2026-01-01T00:00:00Z" },
        { "id": 2, "name": "react-mindspark", "language": "JavaScript", "private": false,
          "stargazersCount": 9, "forksCount": 2,
          "createdAt": "2025-02-01T00:00:00Z", "updatedAt": "2026-02-01T00:00:00Z" },
        { "id": 3, "name": "enteyatra", "language": "JavaScript", "private": false,
          "stargazersCount": 4, "forksCount": 1,
          "createdAt": "2025-03-01T00:00:00Z", "updatedAt": "2026-03-01T00:00:00Z" }
    ] }))
}

/// Start the stub backend on an ephemeral port and return its base URL
pub async fn spawn_backend() -> String {
    let backend = Router::new()
        .route("/auth/me", get(me))
        .route("/auth/logout", post(logout))
        .route("/api/repositories", get(repositories))
        .route("/api/repositories/:id", get(repository))
        .route("/api/badges/repository/:id", get(user_badges))
        .route("/api/badges/repository/:id/leaderboard", get(leaderboard))
        .route("/api/badges/repository/:id/progress", get(progress))
        .route("/api/badges/check", post(check))
        .route("/github/repositories", get(github_repositories));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{}", addr)
}

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

pub const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";

/// Build the API router pointed at a fresh stub backend
pub async fn build_test_app() -> Router {
    let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
    let static_dir = std::env::temp_dir().join(format!(
        "praise-api-static-{}-{}",
        std::process::id(),
        n
    ));
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("index.html"), INDEX_HTML).unwrap();

    let config = Config {
        backend_url: spawn_backend().await,
        public_url: "https://praise.test".to_string(),
        static_dir: static_dir.display().to_string(),
        ..Config::default()
    };
    api::app(Arc::new(AppState::new(config).unwrap()))
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get_as(app: Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
