//! HTTP server for a Battlesnake.
//!
//! Exposes the four routes of the Battlesnake game API and delegates move
//! decisions to a caller-supplied function.
//!
//! # Endpoints
//!
//! - `GET  /`      — Snake info (author, appearance, API version)
//! - `POST /start` — Game started notification
//! - `POST /move`  — Decide the next move
//! - `POST /end`   — Game over notification

pub mod routes;

pub use routes::{app_router, AppState, MoveFn};

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::ServerError;
use crate::logger::Logger;
use crate::types::{GameState, InfoResponse, MoveResponse};
use crate::API_VERSION;

/// An embeddable Battlesnake HTTP server.
///
/// Construction wires the router; [`start`](Self::start) binds the port and
/// serves until the process exits. For in-process testing,
/// [`router`](Self::router) hands out the router without touching the
/// network.
///
/// ```no_run
/// use battlesnake_server::{
///     BattlesnakeServer, InfoResponse, LevelMask, Logger, MoveResponse,
/// };
///
/// # async fn run() -> Result<(), battlesnake_server::ServerError> {
/// let info = InfoResponse {
///     author: "you".into(),
///     color: "#888888".into(),
///     head: "default".into(),
///     tail: "default".into(),
///     version: "0.0.1".into(),
///     ..InfoResponse::default()
/// };
/// let server = BattlesnakeServer::new(
///     8080,
///     info,
///     Logger::stdout(LevelMask::DEFAULT),
///     |_state, _logger| MoveResponse::new("up"),
/// );
/// server.start().await
/// # }
/// ```
pub struct BattlesnakeServer {
    port: u16,
    router: Router,
    logger: Logger,
}

impl BattlesnakeServer {
    /// Creates a server listening on `port`, serving `info` at the root
    /// route and calling `move_fn` for every `/move` request.
    ///
    /// The `apiversion` field of `info` is overwritten with [`API_VERSION`];
    /// the game orchestrator rejects snakes announcing anything else.
    ///
    /// `move_fn` runs on the request task and must be safe to call from
    /// concurrent requests.
    pub fn new(
        port: u16,
        mut info: InfoResponse,
        logger: Logger,
        move_fn: impl Fn(&GameState, &Logger) -> MoveResponse + Send + Sync + 'static,
    ) -> Self {
        info.apiversion = API_VERSION.to_string();
        let state = AppState {
            info: Arc::new(info),
            logger: logger.clone(),
            move_fn: Arc::new(move_fn),
        };
        Self {
            port,
            router: app_router(state),
            logger,
        }
    }

    /// Returns a clone of the router, for driving requests in tests without
    /// binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the listener and serves until the connection loop fails.
    ///
    /// A bind failure is returned immediately; there is no retry.
    pub async fn start(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(("0.0.0.0", self.port))
            .await
            .map_err(ServerError::Bind)?;
        let addr = listener.local_addr().map_err(ServerError::Bind)?;

        self.logger
            .print(format_args!("START server running at {addr}..."));
        self.logger.debug("request debug logging enabled");

        axum::serve(listener, self.router)
            .await
            .map_err(ServerError::Serve)
    }
}
