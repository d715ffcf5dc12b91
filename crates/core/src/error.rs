//! Error types for rp-core
//!
//! Provides the shared error taxonomy for the client: transport failures,
//! server rejections, and protocol violations are distinct and never
//! collapsed into one another.

use thiserror::Error;

/// Result type alias for rp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for repoctl operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error (local file access)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Request could not be built or sent; no HTTP exchange completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server completed the exchange with a non-success status
    #[error("Server error: HTTP {status} {status_text}: {body}")]
    Server {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The server returned a success status but the body violated the
    /// expected JSON shape
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::InvalidArgument(_)
            | Error::InvalidUrl(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => 2, // UsageError
            Error::Transport(_) | Error::Io(_) => 3, // NetworkError
            Error::Server { status, .. } => match status {
                401 | 403 => 4, // AuthError
                404 => 5,       // NotFound
                409 => 6,       // Conflict
                _ => 1,         // GeneralError
            },
            Error::Protocol(_) => 1, // GeneralError
        }
    }

    /// True for failures where no HTTP exchange completed
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Io(_))
    }

    /// True for completed exchanges rejected by the server
    pub fn is_server(&self) -> bool {
        matches!(self, Error::Server { .. })
    }

    /// True for success responses with an unparseable body
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(status: u16) -> Error {
        Error::Server {
            status,
            status_text: "status".into(),
            body: "body".into(),
        }
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::InvalidArgument("test".into()).exit_code(), 2);
        assert_eq!(Error::Transport("test".into()).exit_code(), 3);
        assert_eq!(server_error(401).exit_code(), 4);
        assert_eq!(server_error(403).exit_code(), 4);
        assert_eq!(server_error(404).exit_code(), 5);
        assert_eq!(server_error(409).exit_code(), 6);
        assert_eq!(server_error(500).exit_code(), 1);
        assert_eq!(Error::Protocol("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_kinds_disjoint() {
        let transport = Error::Transport("connection refused".into());
        assert!(transport.is_transport());
        assert!(!transport.is_server());
        assert!(!transport.is_protocol());

        let server = server_error(404);
        assert!(server.is_server());
        assert!(!server.is_transport());

        let protocol = Error::Protocol("expected array".into());
        assert!(protocol.is_protocol());
        assert!(!protocol.is_server());
    }

    #[test]
    fn test_server_error_display_carries_body() {
        let err = server_error(400);
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("body"));
    }
}
