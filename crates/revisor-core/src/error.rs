//! Error types for Revisor

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Revisor system
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error happened while talking to a remote service
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Authentication(_) | Error::Timeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(Error::Transport("refused".to_string()).is_transport());
        assert!(Error::Authentication("403".to_string()).is_transport());
        assert!(Error::Timeout("60s".to_string()).is_transport());
        assert!(!Error::MalformedResponse("not json".to_string()).is_transport());
        assert!(!Error::EmptyInput("blank".to_string()).is_transport());
        assert!(!Error::Configuration("no key".to_string()).is_transport());
    }
}
