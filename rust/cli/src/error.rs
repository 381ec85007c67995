//! Error types for the CLI application.

use std::fmt;

use headsup_engine::errors::GameError;

/// Errors that can occur during CLI execution, propagated with `?` up to
/// the dispatcher which maps them onto exit codes.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes)
    Io(std::io::Error),
    /// Invalid user input or command-line arguments
    InvalidInput(String),
    /// Configuration error
    Config(String),
    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}
