// src/infrastructure/server.rs
use crate::application::{CardDeleter, CardLister, FlagUpdater};
use crate::domain::{Card, DomainError, FlagChanges};
use crate::infrastructure::config;
use crate::infrastructure::SqliteCardRepository;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::error;

/// Shared handler state: the one store connection, plus the CORS
/// allow-list.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<SqliteCardRepository>>,
    allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(store: SqliteCardRepository) -> Self {
        Self::with_origins(
            store,
            config::ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn with_origins(store: SqliteCardRepository, allowed_origins: Vec<String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            allowed_origins: Arc::new(allowed_origins),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub card: Option<Card>,
}

fn lock_store(state: &AppState) -> Result<MutexGuard<'_, SqliteCardRepository>, DomainError> {
    state
        .store
        .lock()
        .map_err(|err| DomainError::StoreUnavailable(err.to_string()))
}

fn error_response(err: DomainError) -> Response {
    error!(%err, "Request failed");
    let body = Json(json!({ "error": err.to_string() }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

async fn list_cards_handler(State(state): State<AppState>) -> Response {
    let result =
        lock_store(&state).and_then(|mut store| CardLister::new(&mut *store).list_active());
    match result {
        Ok(cards) => Json(cards).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_card_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(changes): Json<FlagChanges>,
) -> Response {
    let result = lock_store(&state)
        .and_then(|mut store| FlagUpdater::new(&mut *store).update_flags(id, changes));
    match result {
        // An unknown id serializes as a bare `null`, not a 404.
        Ok(card) => Json(card).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_card_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let result =
        lock_store(&state).and_then(|mut store| CardDeleter::new(&mut *store).soft_delete(id));
    match result {
        Ok(card) => Json(DeleteResponse {
            message: "Card temporarily deleted".to_string(),
            card,
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let allowed = origin
        .as_deref()
        .is_some_and(|o| state.allowed_origins.iter().any(|x| x == o));

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if allowed {
            if let Some(origin_value) = origin {
                if let Ok(v) = HeaderValue::from_str(&origin_value) {
                    resp.headers_mut().insert("access-control-allow-origin", v);
                }
                resp.headers_mut().insert(
                    "access-control-allow-methods",
                    HeaderValue::from_static("GET,POST,PUT,DELETE"),
                );
                resp.headers_mut().insert(
                    "access-control-allow-headers",
                    HeaderValue::from_static("content-type"),
                );
                resp.headers_mut().insert(
                    "access-control-allow-credentials",
                    HeaderValue::from_static("true"),
                );
            }
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if allowed {
        if let Some(origin_value) = origin {
            if let Ok(v) = HeaderValue::from_str(&origin_value) {
                resp.headers_mut().insert("access-control-allow-origin", v);
                resp.headers_mut().insert(
                    "access-control-allow-credentials",
                    HeaderValue::from_static("true"),
                );
                resp.headers_mut()
                    .insert("vary", HeaderValue::from_static("Origin"));
            }
        }
    }
    resp
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/cards", get(list_cards_handler))
        .route(
            "/api/cards/:id",
            put(update_card_handler).delete(delete_card_handler),
        )
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .with_state(state)
}
