//! # battlesnake-server
//!
//! An embeddable HTTP server for the [Battlesnake](https://docs.battlesnake.com/)
//! game API. It decodes the orchestrator's JSON payloads, hands each `/move`
//! request to a caller-supplied move function, and encodes the answer back,
//! with a severity-leveled logger and optional verbatim request logging.
//!
//! This crate is transport only: it is not a game engine, rules validator,
//! or strategy framework. The move logic is entirely yours.
//!
//! ```no_run
//! use battlesnake_server::{
//!     BattlesnakeServer, InfoResponse, LevelMask, Logger, MoveResponse,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), battlesnake_server::ServerError> {
//!     let info = InfoResponse {
//!         author: "your-name".into(),
//!         color: "#888888".into(),
//!         head: "default".into(),
//!         tail: "default".into(),
//!         version: "0.0.1".into(),
//!         ..InfoResponse::default()
//!     };
//!     BattlesnakeServer::new(
//!         8080,
//!         info,
//!         Logger::stdout(LevelMask::DEFAULT),
//!         |_state, _logger| MoveResponse::new("up"),
//!     )
//!     .start()
//!     .await
//! }
//! ```

pub mod error;
pub mod logger;
pub mod server;
pub mod types;

pub use error::ServerError;
pub use logger::{LevelMask, Logger};
pub use server::{app_router, AppState, BattlesnakeServer, MoveFn};
pub use types::{
    Battlesnake, Board, Coord, Customizations, Game, GameState, InfoResponse, MoveResponse,
    Ruleset, RulesetSettings, RoyaleSettings, SquadSettings,
};

/// Battlesnake API version implemented by this server. Forced into every
/// [`InfoResponse`] at construction.
pub const API_VERSION: &str = "1";
