//! Server errors.

use std::io;

use thiserror::Error;

/// Errors surfaced by [`BattlesnakeServer::start`](crate::BattlesnakeServer::start).
///
/// Both variants are fatal; the server never retries on its own.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding the TCP listener on the configured port failed.
    #[error("failed to bind listener: {0}")]
    Bind(#[source] io::Error),

    /// The accept/serve loop terminated with an I/O error.
    #[error("server terminated: {0}")]
    Serve(#[source] io::Error),
}
