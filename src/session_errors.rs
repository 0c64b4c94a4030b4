use crate::grid::GridError;
use std::fmt;

/// Errors that end or abort a band session
#[derive(Debug)]
pub enum SessionError {
    /// Reading the console or writing the prompt failed
    Io(std::io::Error),
    /// The input stream ended before the user chose to exit
    InputClosed,
    /// Configuration could not be used to build the grid
    Config(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "Console I/O failed: {}", err),
            SessionError::InputClosed => write!(f, "Input closed"),
            SessionError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// Grid errors reaching the session level mean the grid could not be built
impl From<GridError> for SessionError {
    fn from(err: GridError) -> Self {
        SessionError::Config(err.to_string())
    }
}

/// Convert from generic boxed errors raised while loading configuration
impl From<Box<dyn std::error::Error>> for SessionError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        SessionError::Config(err.to_string())
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
