//! Battlesnake server binary.
//!
//! Runs the server with a placeholder move function that always goes up.
//! Meant as a wiring example; real snakes embed the library and supply
//! their own move logic.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `SNAKE_DEBUG` — Set to any value to enable debug-level request logging
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # or with verbatim request logging:
//! SNAKE_DEBUG=1 cargo run --bin server
//! ```

use anyhow::Result;
use battlesnake_server::{
    BattlesnakeServer, GameState, InfoResponse, LevelMask, Logger, MoveResponse,
};

fn choose_move(state: &GameState, logger: &Logger) -> MoveResponse {
    logger.debug(format_args!(
        "choosing a move for turn {} at head ({}, {})",
        state.turn, state.you.head.x, state.you.head.y
    ));
    MoveResponse::new("up")
}

#[tokio::main]
async fn main() -> Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let mask = if std::env::var("SNAKE_DEBUG").is_ok() {
        LevelMask::ALL
    } else {
        LevelMask::DEFAULT
    };

    let info = InfoResponse {
        author: "battlesnake-server".into(),
        color: "#888888".into(),
        head: "default".into(),
        tail: "default".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        ..InfoResponse::default()
    };

    let server = BattlesnakeServer::new(port, info, Logger::stdout(mask), choose_move);
    server.start().await?;
    Ok(())
}
