//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Dex Error Enum ==
/// Unified error type for the Pokedex client.
///
/// Command handlers return these to the REPL, which prints the message and
/// moves on to the next command; no error here aborts the session.
#[derive(Error, Debug)]
pub enum DexError {
    /// HTTP transport failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading from stdin failed
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrong number of arguments for a command
    #[error("{0}")]
    InvalidArgs(String),

    /// The first word of the input matched no command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `inspect` on a Pokemon that was never caught
    #[error("{0} has not been registered in the Pokedex")]
    NotRegistered(String),

    /// `pokedex` with nothing caught yet
    #[error("your Pokedex is empty")]
    EmptyPokedex,

    /// `mapb` while already on the first page
    #[error("no previous page to display")]
    NoPreviousPage,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, DexError>;
