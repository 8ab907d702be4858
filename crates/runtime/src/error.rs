use thiserror::Error;

use crate::launch::LaunchError;
use crate::model::ModelError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The tool server could not be launched or the handshake failed.
    #[error("failed to connect to MCP server: {0}")]
    Connection(String),

    /// The tool server went away mid-session.
    #[error("MCP transport closed: {0}")]
    Transport(String),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, Error>;
