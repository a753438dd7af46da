//! Axum route handlers for the Battlesnake server.
//!
//! # Routes
//!
//! - `GET  /`      — Returns the configured [`InfoResponse`] as JSON
//! - `POST /start` — Decodes a [`GameState`], logs the game start
//! - `POST /move`  — Decodes a [`GameState`], runs the move function,
//!   returns its [`MoveResponse`] as JSON
//! - `POST /end`   — Decodes a [`GameState`], logs the game end
//!
//! Anything else is a 404. Bodies are decoded by hand from raw bytes rather
//! than with the `Json` extractor: the game orchestrator does not promise a
//! `content-type` header, and decode failures must be logged at error level
//! before the 400 goes out.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, post},
    Router,
};
use bytes::Bytes;

use crate::logger::{LevelMask, Logger};
use crate::types::{GameState, InfoResponse, MoveResponse};

/// The injected move strategy, invoked once per `/move` request with the
/// decoded state and the server's logger. Must answer synchronously and be
/// safe to call from concurrent requests.
pub type MoveFn = Arc<dyn Fn(&GameState, &Logger) -> MoveResponse + Send + Sync>;

/// Shared application state for the HTTP server.
///
/// Immutable for the lifetime of the server; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Snake metadata served at the root route.
    pub info: Arc<InfoResponse>,
    /// Leveled logger shared with the move function.
    pub logger: Logger,
    /// Caller-supplied move strategy.
    pub move_fn: MoveFn,
}

/// Builds the axum router with all routes.
///
/// The root route is method-agnostic, matching the original API's
/// path-only dispatch. The request-logging middleware is only installed
/// when the debug level is enabled, so the mask check costs nothing
/// per-request when it is off.
pub fn app_router(state: AppState) -> Router {
    let debug = state.logger.enabled(LevelMask::DEBUG);
    let router = Router::new()
        .route("/", any(index_handler))
        .route("/start", post(start_handler))
        .route("/end", post(end_handler))
        .route("/move", post(move_handler))
        .fallback(not_found_handler);
    let router = if debug {
        router.layer(middleware::from_fn_with_state(state.clone(), log_request))
    } else {
        router
    };
    router.with_state(state)
}

/// Buffers and logs the raw request before the route handler runs.
///
/// The body is materialized into memory so it can be logged verbatim, then
/// handed downstream as a fresh body with identical bytes. A body read
/// failure short-circuits to a 400 without invoking the inner handler.
async fn log_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            state
                .logger
                .err(format_args!("Failed to read request body: {err}"));
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    state.logger.debug(format_args!(
        "{} {} {}",
        parts.method,
        parts.uri.path(),
        String::from_utf8_lossy(&bytes)
    ));
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// `GET /` — snake info.
async fn index_handler(State(state): State<AppState>) -> Response {
    match serde_json::to_vec(state.info.as_ref()) {
        Ok(body) => json_response(body),
        Err(err) => {
            state
                .logger
                .err(format_args!("Failed to encode index response: {err}"));
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `POST /start` — game started.
async fn start_handler(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let Some(game) = decode_state(&state.logger, "start", &body) else {
        return StatusCode::BAD_REQUEST;
    };
    state.logger.info(format_args!(
        "Game ID {} [Turn {}] Snake ID {} - Start",
        game.game.id, game.turn, game.you.id
    ));
    StatusCode::OK
}

/// `POST /end` — game over.
async fn end_handler(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let Some(game) = decode_state(&state.logger, "end", &body) else {
        return StatusCode::BAD_REQUEST;
    };
    state.logger.info(format_args!(
        "Game ID {} [Turn {}] Snake ID {} - End",
        game.game.id, game.turn, game.you.id
    ));
    StatusCode::OK
}

/// `POST /move` — decide the next move.
async fn move_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(game) = decode_state(&state.logger, "move", &body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let decision = (state.move_fn)(&game, &state.logger);

    match serde_json::to_vec(&decision) {
        Ok(body) => {
            state.logger.info(format_args!(
                "Game ID {} [Turn {}] Snake ID {} - Move: {}",
                game.game.id, game.turn, game.you.id, decision.direction
            ));
            json_response(body)
        }
        Err(err) => {
            state
                .logger
                .err(format_args!("Failed to encode move response: {err}"));
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn decode_state(logger: &Logger, route: &str, body: &[u8]) -> Option<GameState> {
    match serde_json::from_slice(body) {
        Ok(state) => Some(state),
        Err(err) => {
            logger.err(format_args!(
                "Failed to decode {route} request body: {err}"
            ));
            None
        }
    }
}

fn json_response(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
